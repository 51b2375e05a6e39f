//! Engine trait for structured record output

use super::{error::Result, log_level::LogLevel, typed_field::TypedField};
use std::panic::Location;

/// Formats and writes structured records
///
/// An engine produces one record per `emit` call before returning. It is
/// shared by every handle of a logger, so implementations serialize their
/// own writes.
pub trait Engine: Send + Sync {
    /// Engine-side level gate, checked again inside `emit`
    fn enabled(&self, level: LogLevel) -> bool;

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: Vec<TypedField>,
        caller: &'static Location<'static>,
    );

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;
}
