//! # Leveled Logger
//!
//! A leveled, structured-logging facade. Callers log at five severities with
//! typed key-value fields; a structured engine formats and writes the
//! records.
//!
//! ## Features
//!
//! - **Level Gate**: calls below the configured level cost nothing beyond a
//!   comparison
//! - **Typed Fields**: strings, integers, floats, booleans, bytes, times and
//!   durations keep their native type in the output
//! - **Swappable Loggers**: code depends on the `Log` trait, not on an engine
//! - **Testable Fatal**: the exit after a fatal record is an injected callback
//!
//! ## Example
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::fields;
//!
//! let buffer = SharedBuffer::new();
//! let logger = StructuredLogger::builder()
//!     .level(LogLevel::Info)
//!     .writer(buffer.clone())
//!     .build()?;
//!
//! logger.info("hello", &fields! { "key" => "value" });
//! logger.debug("suppressed", &Fields::new());
//!
//! let out = buffer.contents_string();
//! assert!(out.contains("\"hello\""));
//! assert!(out.contains("\"key\":\"value\""));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod engines;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        ExitCallback, FieldValue, Fields, Log, LogLevel, LoggerBuilder, LoggerConfig,
        LoggerError, OutputTarget, Result, SharedBuffer, StructuredLogger, TimestampFormat,
        FATAL_EXIT_CODE,
    };
    pub use crate::loggers::{ConsoleLogger, NopLogger};
}

pub use crate::core::{
    convert, noop_exit, process_exit, should_log, Engine, EngineMetrics, ExitCallback,
    FieldKind, FieldValue, Fields, Log, LogLevel, LoggerBuilder, LoggerConfig, LoggerError,
    OutputTarget, Result, SharedBuffer, StructuredLogger, TimestampFormat, TypedField,
    FATAL_EXIT_CODE,
};
pub use engines::{EncoderConfig, JsonEngine};
pub use loggers::{ConsoleLogger, NopLogger};
