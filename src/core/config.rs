//! Logger configuration and builder

use super::{
    error::Result,
    exit::ExitCallback,
    log_level::LogLevel,
    logger::StructuredLogger,
    sink::OutputTarget,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Construction input for a `StructuredLogger`
///
/// The serializable part (level, output, extensions) can be loaded from
/// JSON; the writer override and exit callback are set in code.
///
/// # Example
///
/// ```
/// use leveled_logger::{LoggerConfig, LogLevel, OutputTarget};
///
/// let config = LoggerConfig::from_json_str(r#"{"level": "warn", "output": "stderr"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.output, OutputTarget::Stderr);
/// ```
#[derive(Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level emitted (default: info)
    pub level: LogLevel,

    /// Destination used when no writer override is set (default: stdout)
    pub output: OutputTarget,

    /// Engine-specific tuning, not interpreted by the facade
    pub extensions: HashMap<String, serde_json::Value>,

    /// Writer that replaces `output` when set
    #[serde(skip)]
    pub writer: Option<Box<dyn Write + Send>>,

    /// Run after a fatal record is emitted (default: terminate the process)
    #[serde(skip)]
    pub exit_func: Option<ExitCallback>,
}

impl LoggerConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Parse the serializable part of the configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writer override if present, otherwise the opened output target
    pub(crate) fn take_sink(&mut self) -> Result<Box<dyn Write + Send>> {
        match self.writer.take() {
            Some(writer) => Ok(writer),
            None => self.output.open(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            output: OutputTarget::default(),
            extensions: HashMap::new(),
            writer: None,
            exit_func: None,
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("output", &self.output)
            .field("extensions", &self.extensions)
            .field("writer", &self.writer.as_ref().map(|_| "<custom>"))
            .field("exit_func", &self.exit_func.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Builder for constructing a `StructuredLogger` with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = StructuredLogger::builder()
///     .level(LogLevel::Debug)
///     .writer(buffer.clone())
///     .exit_func(|_code| {})
///     .build()
///     .unwrap();
///
/// logger.debug("ready", &Fields::new());
/// assert!(buffer.contents_string().contains("ready"));
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Set the output destination
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: OutputTarget) -> Self {
        self.config.output = output;
        self
    }

    /// Write records to a custom writer instead of the output target
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.config.writer = Some(Box::new(writer));
        self
    }

    /// Replace the exit performed after a fatal record
    #[must_use = "builder methods return a new value"]
    pub fn exit_func<F>(mut self, exit: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.config.exit_func = Some(Arc::new(exit));
        self
    }

    /// Replace the exit with an already shared callback
    #[must_use = "builder methods return a new value"]
    pub fn exit_callback(mut self, exit: ExitCallback) -> Self {
        self.config.exit_func = Some(exit);
        self
    }

    /// Add an engine-specific tuning entry
    #[must_use = "builder methods return a new value"]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.extensions.insert(key.into(), value.into());
        self
    }

    /// Build the logger; fails if the output cannot be opened
    pub fn build(self) -> Result<StructuredLogger> {
        StructuredLogger::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert!(config.extensions.is_empty());
        assert!(config.writer.is_none());
        assert!(config.exit_func.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = LoggerConfig::from_json_str(r#"{"output": "/var/log/app.log"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("/var/log/app.log")));
    }

    #[test]
    fn test_from_json_extensions() {
        let config = LoggerConfig::from_json_str(
            r#"{"level": "debug", "extensions": {"time_key": "time", "buffer": 4096}}"#,
        )
        .unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.extensions.len(), 2);
        assert_eq!(config.extensions["time_key"], "time");
    }

    #[test]
    fn test_from_json_invalid_level() {
        let err = LoggerConfig::from_json_str(r#"{"level": "loud"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_builder_collects_settings() {
        let builder = LoggerBuilder::new()
            .level(LogLevel::Error)
            .output(OutputTarget::Stderr)
            .extension("caller_key", "")
            .exit_func(|_| {});

        assert_eq!(builder.config.level, LogLevel::Error);
        assert_eq!(builder.config.output, OutputTarget::Stderr);
        assert!(builder.config.extensions.contains_key("caller_key"));
        assert!(builder.config.exit_func.is_some());
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let config = LoggerBuilder::new().writer(Vec::new()).config;
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("<custom>"));
    }
}
