// src/error.rs
//! Public error type for the entire crate
//!
//! Every security-relevant failure carries two independent messages: a
//! user message safe to render to an end user and a log message with the
//! full diagnostic detail for operators. The two are never merged, and an
//! attached cause keeps its own messages (readable via `source()`).
//!
//! Callers must render only `user_message()` to untrusted audiences.
//! Keeping secrets, stack state, and key material out of `user_message`
//! is a constructor-site discipline, not something this type can check.

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed underlying error attached as a cause
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// The closed set of security failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityErrorKind {
    /// A cryptographic transform could not be performed
    Encryption,
    /// An integrity check (digest/MAC comparison) failed
    Integrity,
    /// The caller lacks authorization for the requested resource
    AccessControl,
}

impl SecurityErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityErrorKind::Encryption => "encryption",
            SecurityErrorKind::Integrity => "integrity",
            SecurityErrorKind::AccessControl => "access-control",
        }
    }
}

impl std::fmt::Display for SecurityErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dual-message security error
///
/// `Display` renders only the user message, so logging an error through a
/// generic formatter never leaks operator detail to an end user.
#[derive(Debug, Error)]
#[error("{user_message}")]
pub struct SecurityError {
    kind: SecurityErrorKind,
    user_message: String,
    log_message: String,
    #[source]
    cause: Option<Cause>,
}

impl SecurityError {
    /// A bare error of the given kind with empty messages and no cause
    pub fn new(kind: SecurityErrorKind) -> Self {
        Self {
            kind,
            user_message: String::new(),
            log_message: String::new(),
            cause: None,
        }
    }

    fn with_messages(
        kind: SecurityErrorKind,
        user_message: impl Into<String>,
        log_message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            user_message: user_message.into(),
            log_message: log_message.into(),
            cause: None,
        }
    }

    /// A transform failure
    pub fn encryption(user_message: impl Into<String>, log_message: impl Into<String>) -> Self {
        Self::with_messages(SecurityErrorKind::Encryption, user_message, log_message)
    }

    /// An integrity-check failure
    pub fn integrity(user_message: impl Into<String>, log_message: impl Into<String>) -> Self {
        Self::with_messages(SecurityErrorKind::Integrity, user_message, log_message)
    }

    /// An authorization failure
    pub fn access_control(user_message: impl Into<String>, log_message: impl Into<String>) -> Self {
        Self::with_messages(SecurityErrorKind::AccessControl, user_message, log_message)
    }

    /// Attach the underlying error; its messages stay its own
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> SecurityErrorKind {
        self.kind
    }

    /// The message safe to show an end user
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// The full diagnostic message for operator logging only
    pub fn log_message(&self) -> &str {
        &self.log_message
    }
}
