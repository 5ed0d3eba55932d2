// src/core/mod.rs
pub mod dispatch;
pub mod timestamp;
pub mod util;

pub use dispatch::*;
pub use timestamp::*;
pub use util::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::SecurityError>;
