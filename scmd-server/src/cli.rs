//! Command-line options of `scmd-server`.

use clap::Parser;
use scmd_common::access::AccessLevel;
use scmd_common::config::{DEFAULT_VOTE_PERCENT, RuntimeConfig, VotePromotionPolicy};
use scmd_common::error::{ConsoleError, ConsoleResult};
use scmd_common::ids::{ConnectionId, VotePercent};
use scmd_gate::echo::ConnectedClient;
use scmd_gate::gate::Caller;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
pub(crate) const DEFAULT_LOG_FILTER: &str = "scmd_core=info,scmd_gate=info,scmd_server=info";

#[derive(Debug, Parser)]
#[command(name = "scmd-server")]
#[command(about = "Line-oriented server console over the command registry and access gate")]
pub(crate) struct Cli {
    /// Run lines as a remote connection holding this level instead of as the console
    #[arg(long, env = "SCMD_LEVEL")]
    pub level: Option<AccessLevel>,

    /// Connection id used together with --level
    #[arg(long, default_value_t = 1)]
    pub connection_id: ConnectionId,

    /// Other connected clients as `<id>:<level>`, used to report echo audiences
    #[arg(long = "peer", value_parser = parse_peer)]
    pub peers: Vec<ConnectedClient>,

    /// Vote threshold for commands without their own percent
    #[arg(
        long,
        env = "SCMD_DEFAULT_VOTE_PERCENT",
        default_value_t = DEFAULT_VOTE_PERCENT,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub default_vote_percent: u8,

    /// Lowest level allowed to propose a vote
    #[arg(long, default_value_t = AccessLevel::Basic)]
    pub vote_min_proposer: AccessLevel,

    /// Highest command level a vote may stand in for
    #[arg(long, default_value_t = AccessLevel::Ctrl)]
    pub vote_max_level: AccessLevel,

    /// Deny under-privileged commands instead of proposing votes
    #[arg(long)]
    pub no_vote_promotion: bool,

    /// Log filter directive, overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Builds and validates the runtime configuration selected by the options.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InvalidConfig` when the options describe an unusable gate.
    pub(crate) fn runtime_config(&self) -> ConsoleResult<RuntimeConfig> {
        let default_vote_percent = VotePercent::new(self.default_vote_percent)
            .ok_or(ConsoleError::InvalidConfig("vote percent must be at most 100"))?;
        let config = RuntimeConfig {
            default_vote_percent,
            vote_promotion: VotePromotionPolicy {
                enabled: !self.no_vote_promotion,
                min_proposer: self.vote_min_proposer,
                max_votable: self.vote_max_level,
            },
            ..RuntimeConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Caller every input line is attributed to.
    pub(crate) fn caller(&self) -> Caller {
        match self.level {
            Some(level) => Caller::Connection {
                id: self.connection_id,
                level,
            },
            None => Caller::Console,
        }
    }
}

fn parse_peer(raw: &str) -> Result<ConnectedClient, String> {
    let (id, level) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <id>:<level>, got '{raw}'"))?;
    let id = id
        .trim()
        .parse::<ConnectionId>()
        .map_err(|error| format!("invalid connection id '{id}': {error}"))?;
    let level = level
        .trim()
        .parse::<AccessLevel>()
        .map_err(|error| error.to_string())?;
    Ok(ConnectedClient { id, level })
}
