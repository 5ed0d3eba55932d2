// src/core/timestamp.rs
//! Time utilities for expiry/validity windows
//!
//! Offsets are signed seconds; the contract resolution is whole seconds
//! on the Unix epoch. These supply the primitive, not the policy — token
//! lifetimes and the like belong to callers.

use chrono::{DateTime, Duration, Utc};

/// The current time
///
/// A clock read cannot fail here; a platform without a clock is a fatal
/// environment error, not a recoverable one.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// An absolute timestamp at the given signed offset from now
pub fn relative_timestamp(offset_secs: i64) -> DateTime<Utc> {
    Utc::now() + Duration::seconds(offset_secs)
}
