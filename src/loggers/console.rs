//! Print-based logger
//!
//! Human-readable alternative to the JSON engine. Shares the level gate and
//! the exit-on-fatal contract with `StructuredLogger`.

use crate::core::{
    process_exit, should_log, ExitCallback, Fields, Log, LogLevel, TimestampFormat,
    FATAL_EXIT_CODE,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

type ConsoleStream = Arc<Mutex<Box<dyn Write + Send>>>;

fn stream<W: Write + Send + 'static>(writer: W) -> ConsoleStream {
    Arc::new(Mutex::new(Box::new(writer)))
}

#[derive(Clone)]
pub struct ConsoleLogger {
    level: LogLevel,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    exit_func: ExitCallback,
    out: ConsoleStream,
    err: ConsoleStream,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            exit_func: process_exit(),
            out: stream(io::stdout()),
            err: stream(io::stderr()),
        }
    }

    /// Enable or disable colored level labels
    ///
    /// Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this logger
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_logger::loggers::ConsoleLogger;
    /// use leveled_logger::{LogLevel, TimestampFormat};
    ///
    /// let logger = ConsoleLogger::new(LogLevel::Info)
    ///     .with_timestamp_format(TimestampFormat::Rfc3339Millis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_exit_func(mut self, exit_func: ExitCallback) -> Self {
        self.exit_func = exit_func;
        self
    }

    /// Replace stdout and stderr with custom writers
    ///
    /// Error and Fatal lines go to `err`, everything else to `out`.
    #[must_use]
    pub fn with_writers<O, E>(mut self, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        self.out = stream(out);
        self.err = stream(err);
        self
    }

    /// Render one line: `[ts] [LEVEL] message key=value ...`
    ///
    /// Fields are sorted by key so output is stable.
    pub fn format_line(&self, level: LogLevel, msg: &str, fields: &Fields) -> String {
        let timestamp = self.timestamp_format.format(&Utc::now());
        let mut line = format!("[{}] [{}] {}", timestamp, self.level_label(level), msg);

        let mut pairs: Vec<_> = fields.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in pairs {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(&value.to_string());
        }
        line
    }

    #[cfg(feature = "console")]
    fn level_label(&self, level: LogLevel) -> String {
        use colored::{Color, Colorize};

        let label = format!("{:5}", level.to_upper_str());
        if !self.use_colors {
            return label;
        }
        let color = match level {
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
            LogLevel::Fatal => Color::BrightRed,
        };
        label.color(color).to_string()
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, level: LogLevel) -> String {
        format!("{:5}", level.to_upper_str())
    }

    fn print(&self, level: LogLevel, msg: &str, fields: &Fields) {
        if !should_log(self.level, level) {
            return;
        }

        let line = self.format_line(level, msg, fields);

        // Route Error and Fatal levels to stderr, others to stdout
        let target = match level {
            LogLevel::Error | LogLevel::Fatal => &self.err,
            _ => &self.out,
        };
        let result = {
            let mut writer = target.lock();
            writeln!(writer, "{}", line).and_then(|_| writer.flush())
        };
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] Console write failed: {}", e);
        }

        if level == LogLevel::Fatal {
            (self.exit_func)(FATAL_EXIT_CODE);
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Log for ConsoleLogger {
    fn debug(&self, msg: &str, fields: &Fields) {
        self.print(LogLevel::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &Fields) {
        self.print(LogLevel::Info, msg, fields);
    }

    fn warn(&self, msg: &str, fields: &Fields) {
        self.print(LogLevel::Warn, msg, fields);
    }

    fn error(&self, msg: &str, fields: &Fields) {
        self.print(LogLevel::Error, msg, fields);
    }

    fn fatal(&self, msg: &str, fields: &Fields) {
        self.print(LogLevel::Fatal, msg, fields);
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

impl std::fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .field("use_colors", &self.use_colors)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedBuffer;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    fn captured(level: LogLevel) -> (ConsoleLogger, SharedBuffer, SharedBuffer, Arc<AtomicUsize>) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let exits = Arc::new(AtomicUsize::new(0));
        let exits_clone = Arc::clone(&exits);
        let logger = ConsoleLogger::new(level)
            .with_colors(false)
            .with_writers(out.clone(), err.clone())
            .with_exit_func(Arc::new(move |_| {
                exits_clone.fetch_add(1, Ordering::SeqCst);
            }));
        (logger, out, err, exits)
    }

    #[test]
    fn test_format_line_plain() {
        let logger = ConsoleLogger::new(LogLevel::Debug).with_colors(false);

        let mut fields = Fields::new();
        fields.insert("zeta".into(), 1_i64.into());
        fields.insert("alpha".into(), "x".into());

        let line = logger.format_line(LogLevel::Warn, "disk low", &fields);
        assert!(line.contains("[WARN ] disk low"));
        assert!(line.ends_with("alpha=x zeta=1"));
    }

    #[test]
    fn test_format_line_without_fields() {
        let logger = ConsoleLogger::new(LogLevel::Info).with_colors(false);
        let line = logger.format_line(LogLevel::Info, "ready", &Fields::new());
        assert!(line.ends_with("[INFO ] ready"));
    }

    #[test]
    fn test_fatal_runs_exit_callback() {
        let code = Arc::new(AtomicI32::new(0));
        let code_clone = Arc::clone(&code);
        let logger = ConsoleLogger::new(LogLevel::Info)
            .with_colors(false)
            .with_writers(io::sink(), io::sink())
            .with_exit_func(Arc::new(move |c| code_clone.store(c, Ordering::SeqCst)));

        logger.fatal("console fatal", &Fields::new());
        assert_eq!(code.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_below_threshold_writes_nothing_and_never_exits() {
        let (logger, out, err, exits) = captured(LogLevel::Fatal);

        logger.debug("d", &Fields::new());
        logger.info("i", &Fields::new());
        logger.warn("w", &Fields::new());
        logger.error("e", &Fields::new());

        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(exits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_and_fatal_go_to_err_writer() {
        let (logger, out, err, exits) = captured(LogLevel::Debug);

        logger.info("to out", &Fields::new());
        logger.warn("also out", &Fields::new());
        logger.error("to err", &Fields::new());
        logger.fatal("fatal to err", &Fields::new());

        let out_lines = out.lines();
        let err_lines = err.lines();
        assert_eq!(out_lines.len(), 2);
        assert!(out_lines[0].ends_with("[INFO ] to out"));
        assert!(out_lines[1].ends_with("[WARN ] also out"));
        assert_eq!(err_lines.len(), 2);
        assert!(err_lines[0].ends_with("[ERROR] to err"));
        assert!(err_lines[1].ends_with("[FATAL] fatal to err"));
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }
}
