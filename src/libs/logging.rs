use super::messages::macros::is_debug_mode;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DAYPLAN_LOG";

/// Installs the global tracing subscriber writing to stderr.
///
/// Filter precedence: `DAYPLAN_LOG`, then `RUST_LOG`, then `debug` in
/// debug mode or `warn` otherwise.
pub fn init() -> Result<()> {
    let level = if is_debug_mode() { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
