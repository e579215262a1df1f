//! Log output for bridge hosts.
//!
//! Logs go to stderr; stdout belongs to the host's message stream. Pick
//! [`LogFormat::Json`] when a device log collector reads the output and
//! [`LogFormat::Human`] otherwise. `RUST_LOG`, when set, replaces the level
//! passed in, e.g. `RUST_LOG=idbridge_events=trace` to see dropped events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Coloured single-line records.
    Human,
    /// One JSON object per record.
    Json,
}

/// Install the process-wide subscriber. `level` is an `EnvFilter`
/// directive such as `"info"` or `"warn,idbridge_session=debug"`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(format: LogFormat, level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Human => registry.with(layer).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };
    installed.is_ok()
}
