//! Logging macros for ergonomic field construction.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{fields, info};
//!
//! let logger = NopLogger::default();
//!
//! // Message only
//! info!(logger, "Server started");
//!
//! // With structured fields
//! let port = 8080;
//! info!(logger, "Listening", { "port" => port, "tls" => false });
//!
//! // Building a field set directly
//! let ctx = fields! { "user_id" => 42, "action" => "login" };
//! logger.info("User action", &ctx);
//! ```

/// Build a `Fields` map from `key => value` pairs.
///
/// Values go through `FieldValue::from`, so each keeps its own category.
///
/// ```
/// use leveled_logger::{fields, FieldValue};
///
/// let f = fields! { "name" => "alice", "age" => 30_i64 };
/// assert_eq!(f.len(), 2);
/// assert_eq!(f["age"], FieldValue::I64(30));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::FieldValue::from($value));
        )+
        fields
    }};
}

/// Log at an explicit level, with optional fields.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = NopLogger::default();
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Request failed", { "status" => 500 });
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr) => {
        $crate::Log::log(&$logger, $level, &$msg, &$crate::Fields::new())
    };
    ($logger:expr, $level:expr, $msg:expr, { $($key:expr => $value:expr),* $(,)? }) => {
        $crate::Log::log(&$logger, $level, &$msg, &$crate::fields!($($key => $value),*))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message; the logger's exit behavior runs afterwards.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
