//! Typed fields consumed by the structured log engine, and the adapter that
//! produces them from a caller's `Fields`.

use super::field::{FieldValue, Fields};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Native category of a typed field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String(String),
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Binary(Vec<u8>),
    Time(DateTime<Utc>),
    Duration(Duration),
    Any(serde_json::Value),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String(_) => "string",
            FieldKind::Int64(_) => "int64",
            FieldKind::Float64(_) => "float64",
            FieldKind::Bool(_) => "bool",
            FieldKind::Binary(_) => "binary",
            FieldKind::Time(_) => "time",
            FieldKind::Duration(_) => "duration",
            FieldKind::Any(_) => "any",
        }
    }
}

/// A single key paired with its typed value
#[derive(Debug, Clone, PartialEq)]
pub struct TypedField {
    key: String,
    kind: FieldKind,
}

impl TypedField {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldKind::String(value.into()))
    }

    pub fn int64(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, FieldKind::Int64(value))
    }

    pub fn float64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, FieldKind::Float64(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, FieldKind::Bool(value))
    }

    pub fn binary(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self::new(key, FieldKind::Binary(value))
    }

    pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(key, FieldKind::Time(value))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, FieldKind::Duration(value))
    }

    pub fn any(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self::new(key, FieldKind::Any(value))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn into_parts(self) -> (String, FieldKind) {
        (self.key, self.kind)
    }
}

/// Convert one caller value into its typed form
///
/// 32-bit integers are widened to the common 64-bit representation.
pub fn to_typed(key: &str, value: &FieldValue) -> TypedField {
    match value {
        FieldValue::String(s) => TypedField::string(key, s.as_str()),
        FieldValue::I32(i) => TypedField::int64(key, i64::from(*i)),
        FieldValue::I64(i) => TypedField::int64(key, *i),
        FieldValue::F64(f) => TypedField::float64(key, *f),
        FieldValue::Bool(b) => TypedField::bool(key, *b),
        FieldValue::Bytes(b) => TypedField::binary(key, b.clone()),
        FieldValue::Time(t) => TypedField::time(key, *t),
        FieldValue::Duration(d) => TypedField::duration(key, *d),
        FieldValue::Any(v) => TypedField::any(key, v.clone()),
    }
}

/// Convert a field set into typed fields, one per entry
///
/// Output order follows the map's iteration order and is unspecified.
pub fn convert(fields: &Fields) -> Vec<TypedField> {
    let mut typed = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        typed.push(to_typed(key, value));
    }
    typed
}
