//! Log level definitions and the level gate

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// All levels in ascending severity order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Uppercase label used by human-readable output
    pub fn to_upper_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Map a raw integer severity onto a level, `None` when out of range
    pub fn from_repr(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// Label for a raw integer severity
    ///
    /// Unknown values yield an empty string rather than an error.
    ///
    /// ```
    /// use leveled_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::label_of(2), "warn");
    /// assert_eq!(LogLevel::label_of(42), "");
    /// ```
    pub fn label_of(raw: i32) -> &'static str {
        Self::from_repr(raw).map(|level| level.as_str()).unwrap_or("")
    }

    /// Whether a message at `self` passes a gate configured at `min`
    #[inline]
    pub fn enabled_at(self, min: LogLevel) -> bool {
        should_log(min, self)
    }
}

/// Level gate: `candidate` is emitted iff it is at least `configured`.
#[inline]
pub fn should_log(configured: LogLevel, candidate: LogLevel) -> bool {
    candidate >= configured
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level as i32
    }
}
