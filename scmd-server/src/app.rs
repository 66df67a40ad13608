//! Process composition root for `scmd-server`.

mod bootstrap;

use scmd_common::config::RuntimeConfig;
use scmd_common::error::ConsoleResult;
use scmd_common::ids::ConnectionId;
use scmd_core::CoreModule;
use scmd_core::command::{CommandLine, ConsoleReply};
use scmd_core::localize::Untranslated;
use scmd_core::registry::CommandId;
use scmd_gate::GateModule;
use scmd_gate::echo::{ConnectedClient, echo_recipients};
use scmd_gate::gate::{Caller, Decision};
use tracing::info;

/// Console composition container.
#[derive(Debug)]
pub struct ConsoleApp {
    /// Runtime configuration.
    pub config: RuntimeConfig,
    /// Command registry and help rendering.
    pub core: CoreModule,
    /// Authorization gate over the shared registry.
    pub gate: GateModule,
    /// Other connected clients, used to report who sees an echoed command.
    pub peers: Vec<ConnectedClient>,
}

/// Result of handling one console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Reply printed for the line.
    pub reply: ConsoleReply,
    /// Set once an accepted `quit` asks the console loop to stop.
    pub shutdown: bool,
}

impl ConsoleApp {
    /// Creates a process composition from runtime config.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        let core = CoreModule::new();
        let gate = GateModule::new(core.registry().clone(), &config);
        Self {
            config,
            core,
            gate,
            peers: Vec::new(),
        }
    }

    /// Human-readable startup summary.
    #[must_use]
    pub fn startup_summary(&self) -> String {
        let policy = &self.config.vote_promotion;
        format!(
            "scmd-server ready: commands={}, default_vote_percent={}, vote_promotion={}, \
vote_min_proposer={}, vote_max_level={}, peers={}",
            self.core.registry().len(),
            self.config.default_vote_percent,
            policy.enabled,
            policy.min_proposer,
            policy.max_votable,
            self.peers.len()
        )
    }

    /// Parses and executes one raw input line.
    ///
    /// Returns `None` for lines without a command name.
    #[must_use]
    pub fn handle_line(&self, caller: Caller, line: &str) -> Option<LineOutcome> {
        let line = CommandLine::parse(line)?;
        Some(self.execute(caller, &line))
    }

    /// Classifies one parsed line and renders the decision.
    #[must_use]
    pub fn execute(&self, caller: Caller, line: &CommandLine) -> LineOutcome {
        let gate = &self.gate.gate;
        let decision = gate.classify(caller, &line.name);
        let shutdown = decision == Decision::DirectAllowed(CommandId::Quit);
        if shutdown {
            info!(?caller, "shutdown requested");
        }
        let reply = match decision {
            Decision::DirectAllowed(CommandId::Help) => {
                self.core.help(&line.rest, gate.level_of(caller), &Untranslated)
            }
            Decision::DirectAllowed(id) => {
                let descriptor = gate.registry().by_id(id);
                let audience = echo_recipients(descriptor.echo(), caller, &self.peers);
                ConsoleReply::Accepted(format!(
                    "{} echo={}",
                    descriptor.name(),
                    render_audience(&audience)
                ))
            }
            Decision::VoteRequired(request) => {
                let descriptor = gate.registry().by_id(request.command);
                info!(
                    command = descriptor.name(),
                    proposer = request.proposer,
                    "vote requested"
                );
                ConsoleReply::VoteOpened(format!(
                    "{} percent={} flags={}",
                    descriptor.name(),
                    request.percent.get(),
                    request.flags.bits()
                ))
            }
            Decision::Denied(reason) => ConsoleReply::Error(reason.to_string()),
        };
        LineOutcome { reply, shutdown }
    }
}

fn render_audience(audience: &[ConnectionId]) -> String {
    if audience.is_empty() {
        return "none".to_owned();
    }
    audience
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Starts the console and processes stdin until end of input or `quit`.
///
/// # Errors
///
/// Returns an error when options are invalid or console I/O fails.
pub fn run() -> ConsoleResult<()> {
    bootstrap::run_console()
}

#[cfg(test)]
mod app_tests;
