use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout carries only the generated document.
///
/// An unparsable directive falls back to the default level rather than
/// failing the run.
pub fn init_tracing(directive: &str) -> Result<(), String> {
    let filter = EnvFilter::try_new(directive)
        .or_else(|_| EnvFilter::try_new(crate::config::DEFAULT_LOG_FILTER))
        .map_err(|e| format!("invalid log filter: {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}
