//! Caller-facing field values for structured logging
//!
//! Callers attach heterogeneous context to each log call. `FieldValue` keeps
//! that context typed: one variant per category the adapter knows how to
//! preserve, plus an `Any` fallback for everything else.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, SystemTime};

/// Unordered key-value context attached to a single log call
pub type Fields = HashMap<String, FieldValue>;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    I32(i32),
    I64(i64),
    F64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Time(DateTime<Utc>),
    Duration(Duration),
    /// Opaque fallback for values with no dedicated category
    Any(serde_json::Value),
}

impl FieldValue {
    /// Best-effort fallback for any serializable value
    ///
    /// Never fails: a value that refuses to serialize is recorded as the
    /// serialization error text.
    pub fn any<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => FieldValue::Any(json),
            Err(e) => FieldValue::Any(serde_json::Value::String(format!("<unserializable: {}>", e))),
        }
    }

    /// Short category name, handy for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::I32(_) => "i32",
            FieldValue::I64(_) => "i64",
            FieldValue::F64(_) => "f64",
            FieldValue::Bool(_) => "bool",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Time(_) => "time",
            FieldValue::Duration(_) => "duration",
            FieldValue::Any(_) => "any",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::I32(i) => write!(f, "{}", i),
            FieldValue::I64(i) => write!(f, "{}", i),
            FieldValue::F64(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            FieldValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Any(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::I32(i)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::I64(i)
    }
}

macro_rules! widen_to_i64 {
    ($($ty:ty),+) => {$(
        impl From<$ty> for FieldValue {
            fn from(i: $ty) -> Self {
                FieldValue::I64(i64::from(i))
            }
        }
    )+};
}

widen_to_i64!(i8, i16, u8, u16, u32);

// Values past i64::MAX keep their magnitude as an opaque JSON number
impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(signed) => FieldValue::I64(signed),
            Err(_) => FieldValue::Any(serde_json::Value::from(i)),
        }
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(signed) => FieldValue::I64(signed),
            Err(_) => FieldValue::Any(serde_json::Value::from(i)),
        }
    }
}

impl From<isize> for FieldValue {
    fn from(i: isize) -> Self {
        FieldValue::I64(i as i64)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::F64(f64::from(f))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::F64(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        FieldValue::Bytes(b.to_vec())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Time(t)
    }
}

impl From<SystemTime> for FieldValue {
    fn from(t: SystemTime) -> Self {
        FieldValue::Time(t.into())
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Any(v)
    }
}

/// `None` is recorded as a JSON null
impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Any(serde_json::Value::Null),
        }
    }
}
