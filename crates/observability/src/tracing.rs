//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::{LogConfig, LogFormat, DEFAULT_FILTER};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = build_filter(&config.filter, &mut std::io::stderr());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_ok() {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
}

/// Parse `directives`, falling back to [`DEFAULT_FILTER`].
///
/// A rejected directive is reported on `diagnostics` before the fallback.
pub fn build_filter(directives: &str, diagnostics: &mut impl Write) -> EnvFilter {
    match EnvFilter::try_new(directives) {
        Ok(filter) => filter,
        Err(err) => {
            let _ = writeln!(
                diagnostics,
                "invalid log filter `{directives}`: {err}; falling back to `{DEFAULT_FILTER}`"
            );
            EnvFilter::new(DEFAULT_FILTER)
        }
    }
}
