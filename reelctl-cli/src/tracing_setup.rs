//! Tracing setup for the reelctl CLI
//!
//! Usage:
//!   reelctl --debug ...              # Debug logging to stderr
//!   RUST_LOG=reelctl_core=trace ...  # Fine-grained log control
//!
//! Precedence: RUST_LOG, then --debug, then `log_level` from config, then info.
//! Logs go to stderr so page output on stdout stays pipeable.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the filter to debug if RUST_LOG is not set)
    pub debug: bool,
    /// Fallback level from the config file
    pub default_level: Option<String>,
}

impl TracingConfig {
    fn fallback_filter(&self) -> EnvFilter {
        if self.debug {
            return EnvFilter::new("debug");
        }
        match self.default_level.as_deref() {
            Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
            None => EnvFilter::new("info"),
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.fallback_filter());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
