//! Logging setup
//!
//! Logs go to stderr so search results on stdout stay pipeable.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber
///
/// `RUST_LOG`, when set, overrides the verbosity flag. Calling this twice
/// is harmless; the second call leaves the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordslot={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
