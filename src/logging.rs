//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the filter from `RUST_LOG`, then `LOG_LEVEL`, then `default_level`.
#[must_use]
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber. Output goes to stderr so reports on
/// stdout stay machine-readable. Calling it twice is harmless.
pub fn init_tracing(default_level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
