//! Core logger types and traits

pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;
pub mod typed_field;

pub use config::{LoggerBuilder, LoggerConfig};
pub use engine::Engine;
pub use error::{LoggerError, Result};
pub use exit::{noop_exit, process_exit, ExitCallback, FATAL_EXIT_CODE};
pub use field::{FieldValue, Fields};
pub use log_level::{should_log, LogLevel};
pub use logger::{Log, StructuredLogger};
pub use metrics::EngineMetrics;
pub use sink::{OutputTarget, SharedBuffer};
pub use timestamp::TimestampFormat;
pub use typed_field::{convert, FieldKind, TypedField};
