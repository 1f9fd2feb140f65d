//! Command-line / environment configuration.

use clap::Parser;

use bakery_observability::{LogConfig, LogFormat, DEFAULT_FILTER};

#[derive(Debug, Parser)]
#[command(name = "bakery-inventory")]
#[command(version, about = "In-memory ingredient inventory for a small bakery", long_about = None)]
pub struct Cli {
    /// Tracing filter directive, e.g. `warn` or `bakery_inventory=debug`
    #[arg(long, env = "BAKERY_LOG", default_value = DEFAULT_FILTER)]
    pub log_filter: String,

    /// Log format written to stderr (`pretty` or `json`)
    #[arg(long, env = "BAKERY_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            log: LogConfig {
                filter: self.log_filter,
                format: self.log_format,
            },
        }
    }
}
