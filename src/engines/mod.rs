//! Engine implementations

pub mod json;

pub use json::{EncoderConfig, JsonEngine};

pub use crate::core::Engine;
