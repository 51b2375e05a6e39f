//! Alternate `Log` implementations

pub mod console;
pub mod nop;

pub use console::ConsoleLogger;
pub use nop::NopLogger;

pub use crate::core::Log;
