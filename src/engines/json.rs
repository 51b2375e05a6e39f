//! JSON-lines engine
//!
//! Writes each record as a single-line JSON object with the level, an
//! RFC 3339 timestamp, the caller location, the message, and the typed
//! fields flattened into top-level keys.

use crate::core::{
    Engine, EngineMetrics, FieldKind, LogLevel, LoggerError, Result, TimestampFormat,
    TypedField,
};
use base64::Engine as _;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;
use std::panic::Location;

/// Key names and time encoding for JSON records
///
/// An empty key omits that entry from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub caller_key: String,
    pub time_format: TimestampFormat,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            caller_key: "caller".to_string(),
            time_format: TimestampFormat::Rfc3339,
        }
    }
}

impl EncoderConfig {
    /// Build from the logger's extension map
    ///
    /// Recognizes `message_key`, `level_key`, `time_key`, `caller_key` and
    /// `time_format`. Unknown keys and values of the wrong type are ignored.
    pub fn from_extensions(extensions: &HashMap<String, serde_json::Value>) -> Self {
        let mut config = Self::default();
        let text = |key: &str| extensions.get(key).and_then(|v| v.as_str()).map(str::to_string);

        if let Some(key) = text("message_key") {
            config.message_key = key;
        }
        if let Some(key) = text("level_key") {
            config.level_key = key;
        }
        if let Some(key) = text("time_key") {
            config.time_key = key;
        }
        if let Some(key) = text("caller_key") {
            config.caller_key = key;
        }
        if let Some(format) = text("time_format").and_then(|name| TimestampFormat::from_name(&name)) {
            config.time_format = format;
        }
        config
    }
}

pub struct JsonEngine {
    min_level: LogLevel,
    encoder: EncoderConfig,
    writer: Mutex<Box<dyn Write + Send>>,
    metrics: EngineMetrics,
}

impl JsonEngine {
    pub fn new(min_level: LogLevel, writer: Box<dyn Write + Send>) -> Self {
        Self::with_encoder(min_level, writer, EncoderConfig::default())
    }

    pub fn with_encoder(
        min_level: LogLevel,
        writer: Box<dyn Write + Send>,
        encoder: EncoderConfig,
    ) -> Self {
        Self {
            min_level,
            encoder,
            writer: Mutex::new(writer),
            metrics: EngineMetrics::new(),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn encoder(&self) -> &EncoderConfig {
        &self.encoder
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Render a record as one line of JSON, without the trailing newline
    pub fn encode(
        &self,
        level: LogLevel,
        message: &str,
        fields: Vec<TypedField>,
        caller: Option<&Location<'_>>,
    ) -> String {
        let mut record = serde_json::Map::with_capacity(fields.len() + 4);
        let enc = &self.encoder;

        if !enc.level_key.is_empty() {
            record.insert(enc.level_key.clone(), level.as_str().into());
        }
        if !enc.time_key.is_empty() {
            record.insert(enc.time_key.clone(), enc.time_format.to_json(&Utc::now()));
        }
        if let Some(caller) = caller.filter(|_| !enc.caller_key.is_empty()) {
            record.insert(
                enc.caller_key.clone(),
                format!("{}:{}", caller.file(), caller.line()).into(),
            );
        }
        if !enc.message_key.is_empty() {
            record.insert(enc.message_key.clone(), message.into());
        }

        // Metadata keeps its key; a colliding field moves under `fields.`
        for field in fields {
            let (mut key, kind) = field.into_parts();
            while record.contains_key(&key) {
                key = format!("fields.{}", key);
            }
            let value = self.encode_kind(kind);
            record.insert(key, value);
        }

        serde_json::Value::Object(record).to_string()
    }

    fn encode_kind(&self, kind: FieldKind) -> serde_json::Value {
        use serde_json::Value;

        match kind {
            FieldKind::String(s) => Value::String(s),
            FieldKind::Int64(i) => Value::Number(i.into()),
            FieldKind::Float64(f) => match serde_json::Number::from_f64(f) {
                Some(n) => Value::Number(n),
                None if f.is_nan() => Value::String("NaN".to_string()),
                None if f.is_sign_positive() => Value::String("+Inf".to_string()),
                None => Value::String("-Inf".to_string()),
            },
            FieldKind::Bool(b) => Value::Bool(b),
            FieldKind::Binary(bytes) => {
                Value::String(base64::engine::general_purpose::STANDARD.encode(bytes))
            }
            FieldKind::Time(t) => self.encoder.time_format.to_json(&t),
            FieldKind::Duration(d) => serde_json::Number::from_f64(d.as_secs_f64())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldKind::Any(v) => v,
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Engine for JsonEngine {
    fn enabled(&self, level: LogLevel) -> bool {
        level.enabled_at(self.min_level)
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: Vec<TypedField>,
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let line = self.encode(level, message, fields, Some(caller));
        match self.write_line(&line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failure();
                eprintln!("[LOGGER ERROR] Failed to write {} record: {}", level, e);
            }
        }
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::writer(format!("json engine flush failed: {}", e)))
    }

    fn name(&self) -> &str {
        "json"
    }
}

impl std::fmt::Debug for JsonEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEngine")
            .field("min_level", &self.min_level)
            .field("encoder", &self.encoder)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Drop for JsonEngine {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
