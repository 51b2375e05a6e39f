//! Main logger implementation
//!
//! `Log` is the capability every logger offers: five severity operations and
//! a level accessor. `StructuredLogger` implements it on top of an
//! [`Engine`], gating each call by level before any field conversion.

use super::{
    config::{LoggerBuilder, LoggerConfig},
    engine::Engine,
    error::Result,
    exit::{process_exit, ExitCallback, FATAL_EXIT_CODE},
    field::Fields,
    log_level::{should_log, LogLevel},
    typed_field::convert,
};
use crate::engines::{EncoderConfig, JsonEngine};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Leveled structured logging
///
/// Calls below the logger's level are silent no-ops. `fatal` emits its
/// record and then runs the logger's exit behavior.
pub trait Log: Send + Sync {
    #[track_caller]
    fn debug(&self, msg: &str, fields: &Fields);

    #[track_caller]
    fn info(&self, msg: &str, fields: &Fields);

    #[track_caller]
    fn warn(&self, msg: &str, fields: &Fields);

    #[track_caller]
    fn error(&self, msg: &str, fields: &Fields);

    #[track_caller]
    fn fatal(&self, msg: &str, fields: &Fields);

    /// Minimum level this logger emits
    fn level(&self) -> LogLevel;

    /// Dispatch to the operation matching `level`
    #[track_caller]
    fn log(&self, level: LogLevel, msg: &str, fields: &Fields) {
        match level {
            LogLevel::Debug => self.debug(msg, fields),
            LogLevel::Info => self.info(msg, fields),
            LogLevel::Warn => self.warn(msg, fields),
            LogLevel::Error => self.error(msg, fields),
            LogLevel::Fatal => self.fatal(msg, fields),
        }
    }
}

macro_rules! forward_log {
    ($($ty:ty),+) => {$(
        impl<L: Log + ?Sized> Log for $ty {
            #[track_caller]
            fn debug(&self, msg: &str, fields: &Fields) {
                (**self).debug(msg, fields)
            }

            #[track_caller]
            fn info(&self, msg: &str, fields: &Fields) {
                (**self).info(msg, fields)
            }

            #[track_caller]
            fn warn(&self, msg: &str, fields: &Fields) {
                (**self).warn(msg, fields)
            }

            #[track_caller]
            fn error(&self, msg: &str, fields: &Fields) {
                (**self).error(msg, fields)
            }

            #[track_caller]
            fn fatal(&self, msg: &str, fields: &Fields) {
                (**self).fatal(msg, fields)
            }

            fn level(&self) -> LogLevel {
                (**self).level()
            }

            #[track_caller]
            fn log(&self, level: LogLevel, msg: &str, fields: &Fields) {
                (**self).log(level, msg, fields)
            }
        }
    )+};
}

forward_log!(&L, Box<L>, Arc<L>);

/// Engine-backed logger
///
/// Immutable after construction. Clones share the same engine, so a logger
/// can be handed to many threads.
#[derive(Clone)]
pub struct StructuredLogger {
    level: LogLevel,
    engine: Arc<dyn Engine>,
    exit_func: ExitCallback,
}

impl StructuredLogger {
    /// Build a JSON logger from configuration
    ///
    /// Fails when the configured output cannot be opened.
    pub fn new(mut config: LoggerConfig) -> Result<Self> {
        let sink = config.take_sink()?;
        let encoder = EncoderConfig::from_extensions(&config.extensions);
        let engine = JsonEngine::with_encoder(config.level, sink, encoder);
        let exit_func = config.exit_func.take().unwrap_or_else(process_exit);

        Ok(Self::with_engine(config.level, Arc::new(engine), exit_func))
    }

    /// Wrap an existing engine
    pub fn with_engine(level: LogLevel, engine: Arc<dyn Engine>, exit_func: ExitCallback) -> Self {
        Self {
            level,
            engine,
            exit_func,
        }
    }

    /// Create a builder for StructuredLogger
    ///
    /// # Example
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = StructuredLogger::builder()
    ///     .level(LogLevel::Warn)
    ///     .writer(SharedBuffer::new())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), LogLevel::Warn);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Flush the engine's sink
    pub fn flush(&self) -> Result<()> {
        self.engine.flush()
    }

    #[inline]
    fn should_log(&self, level: LogLevel) -> bool {
        should_log(self.level, level)
    }

    #[track_caller]
    fn dispatch(&self, level: LogLevel, msg: &str, fields: &Fields) {
        if !self.should_log(level) {
            return;
        }

        self.engine.emit(level, msg, convert(fields), Location::caller());

        if level == LogLevel::Fatal {
            (self.exit_func)(FATAL_EXIT_CODE);
        }
    }
}

impl Log for StructuredLogger {
    #[track_caller]
    fn debug(&self, msg: &str, fields: &Fields) {
        self.dispatch(LogLevel::Debug, msg, fields);
    }

    #[track_caller]
    fn info(&self, msg: &str, fields: &Fields) {
        self.dispatch(LogLevel::Info, msg, fields);
    }

    #[track_caller]
    fn warn(&self, msg: &str, fields: &Fields) {
        self.dispatch(LogLevel::Warn, msg, fields);
    }

    #[track_caller]
    fn error(&self, msg: &str, fields: &Fields) {
        self.dispatch(LogLevel::Error, msg, fields);
    }

    /// Emit at fatal level, then exit with status 1
    #[track_caller]
    fn fatal(&self, msg: &str, fields: &Fields) {
        self.dispatch(LogLevel::Fatal, msg, fields);
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("level", &self.level)
            .field("engine", &self.engine.name())
            .finish_non_exhaustive()
    }
}
