// src/provider/error.rs
use thiserror::Error;

use crate::enums::AlgorithmMode;

/// Provider-level failure causes
///
/// These are the runtime reasons a resolved tag still cannot be applied.
/// The dispatcher wraps them into the crate's dual-message error; the
/// variants themselves carry no key material and no payload bytes.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The tag is valid but this provider has no transform for it
    #[error("transform {0} is not supported by this provider")]
    UnsupportedTransform(AlgorithmMode),

    /// Key material has the wrong length for the requested cipher
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Ciphertext shorter than the transform's minimum (IV + one block)
    #[error("ciphertext too short: minimum {minimum} bytes, got {actual}")]
    DataTooShort { minimum: usize, actual: usize },

    /// Ciphertext body is not a whole number of cipher blocks
    #[error("ciphertext is not a whole number of cipher blocks")]
    RaggedCiphertext,

    /// Block padding did not verify on decrypt (wrong key or tampering)
    #[error("invalid block padding")]
    InvalidPadding,
}
