//! Logger that discards everything

use crate::core::{Fields, Log, LogLevel};

/// Reports a level but never emits and never exits, fatal included
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger {
    level: LogLevel,
}

impl NopLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Log for NopLogger {
    fn debug(&self, _msg: &str, _fields: &Fields) {}

    fn info(&self, _msg: &str, _fields: &Fields) {}

    fn warn(&self, _msg: &str, _fields: &Fields) {}

    fn error(&self, _msg: &str, _fields: &Fields) {}

    fn fatal(&self, _msg: &str, _fields: &Fields) {}

    fn level(&self) -> LogLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nop_logger_returns() {
        let logger = NopLogger::new(LogLevel::Debug);
        logger.fatal("ignored", &Fields::new());
        assert_eq!(logger.level(), LogLevel::Debug);
        assert_eq!(NopLogger::default().level(), LogLevel::Info);
    }
}
