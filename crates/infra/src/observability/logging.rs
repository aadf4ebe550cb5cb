//! Tracing subscriber setup
//!
//! ## Environment Variables
//! - `PARCELSORT_LOG`: filter directives (takes precedence)
//! - `RUST_LOG`: fallback filter directives
//!
//! Defaults to `info` when neither is set or both fail to parse.

use tracing_subscriber::EnvFilter;

/// Environment variable read before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "PARCELSORT_LOG";

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Pretty,
    /// One JSON object per event, for telemetry sinks
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to stderr
///
/// Returns `false` if a global subscriber was already installed; the
/// existing one is kept.
pub fn init(format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };
    result.is_ok()
}

/// Install a verbose subscriber that writes through the test harness
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
