use super::ConsoleApp;
use crate::cli::{Cli, DEFAULT_LOG_FILTER};
use crate::ingress::serve_lines;
use clap::Parser;
use scmd_common::error::{ConsoleError, ConsoleResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub(super) fn run_console() -> ConsoleResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let config = cli.runtime_config()?;
    let caller = cli.caller();
    let mut app = ConsoleApp::new(config);
    app.peers = cli.peers;
    info!("{}", app.startup_summary());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = serve_lines(&app, caller, stdin.lock(), stdout.lock())?;
    info!(handled, "console input finished");
    Ok(())
}

fn init_tracing(directive: Option<&str>) -> ConsoleResult<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|_| ConsoleError::InvalidConfig("invalid --log-level filter directive"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
