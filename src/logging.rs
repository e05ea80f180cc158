//! Diagnostic tracing for troubleshooting.
//!
//! User-facing lines go through [`crate::output`]. This subscriber only
//! carries `tracing` events (request URL, credential source, timings) and is
//! silent unless `TRAD_LOG` or `RUST_LOG` asks for them.

use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the trad-specific filter directives.
pub const LOG_ENV: &str = "TRAD_LOG";

const DEFAULT_FILTER: &str = "off";

/// Builds the filter: `TRAD_LOG` first, then `RUST_LOG`, then `off`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing compact lines to stderr.
pub fn init() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal() && !crate::output::is_no_color())
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
