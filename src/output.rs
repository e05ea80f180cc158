//! Global output configuration and leveled log lines.
//!
//! This module provides centralized control over CLI output behavior.
//!
//! ## Design Principles
//!
//! - Usage and version text go to stdout
//! - Leveled log lines (including the translation) go to stderr
//! - Colors can be disabled via the NO_COLOR environment variable

use owo_colors::OwoColorize;
use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored level badges.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: no_color_requested(std::env::var_os("NO_COLOR").as_deref()),
        }
    }
}

/// Only a non-empty `NO_COLOR` disables color.
fn no_color_requested(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Initialize the global output configuration.
///
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERRO",
            Self::Fatal => "FATA",
        }
    }

    fn badge(self, no_color: bool) -> String {
        let label = self.as_str();
        if no_color {
            return label.to_string();
        }
        match self {
            Self::Info => format!("{}", label.cyan().bold()),
            Self::Warn => format!("{}", label.yellow().bold()),
            Self::Error => format!("{}", label.red().bold()),
            Self::Fatal => format!("{}", label.magenta().bold()),
        }
    }
}

/// Formats a log line as `LEVEL message`.
pub fn format_line(level: Level, message: &str, no_color: bool) -> String {
    format!("{} {message}", level.badge(no_color))
}

/// Writes one leveled line to stderr.
///
/// Prefer the [`info!`], [`warn!`], [`error!`] and [`fatal!`] macros.
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    let line = format_line(level, &args.to_string(), is_no_color());
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{line}");
    let _ = stderr.flush();
}

/// Print an INFO line to stderr.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::output::log($crate::output::Level::Info, format_args!($($arg)*))
    };
}

/// Print a WARN line to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::output::log($crate::output::Level::Warn, format_args!($($arg)*))
    };
}

/// Print an ERROR line to stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::output::log($crate::output::Level::Error, format_args!($($arg)*))
    };
}

/// Print a FATAL line to stderr.
///
/// Unlike a classic fatal logger this does not exit; the caller decides the
/// exit status.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::output::log($crate::output::Level::Fatal, format_args!($($arg)*))
    };
}
