//! Diagnostic logging.
//!
//! Report lines (Success/Error) are printed by the commands on stdout. This
//! module only configures the `log` facade for diagnostics, which go to
//! stderr so they never mix with those reports.

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use log::LevelFilter;
use std::str::FromStr;

/// Verbosity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    /// Default.
    Warning,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Unknown verbosity level: {s}")),
        }
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Level from the number of `-v` flags, or `Error` when `-q` is given.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Warning,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Install the global logger writing to stderr.
pub fn init_logger(level: LogLevel) -> Result<()> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level.to_level_filter())
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("Logger initialized with verbosity level: {level:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("Warning").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);

        assert_eq!(
            LogLevel::from_str("loud").unwrap_err(),
            "Unknown verbosity level: loud"
        );
    }

    #[test]
    fn test_log_level_to_level_filter() {
        assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warning.to_level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(LogLevel::from_flags(0, false), LogLevel::Warning);
        assert_eq!(LogLevel::from_flags(1, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(2, false), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(3, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(255, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(0, true), LogLevel::Error);
    }
}
