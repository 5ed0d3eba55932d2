// src/provider/traits.rs
use crate::enums::{CipherAlgorithm, CipherMode, DigestAlgorithm};

use super::ProviderError;

/// A source of concrete transforms for the catalog tags
///
/// Implementations work on raw bytes; the hex boundary belongs to the
/// dispatcher. Every method must be safe for concurrent invocation — the
/// dispatcher adds no locking of its own. If a backing resource needs
/// exclusive access (an HSM handle, say), that discipline lives in the
/// implementation.
pub trait CryptoProvider: Send + Sync {
    /// Apply the forward confidentiality transform
    fn encrypt(
        &self,
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, ProviderError>;

    /// Apply the inverse confidentiality transform
    fn decrypt(
        &self,
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, ProviderError>;

    /// Apply the one-way digest transform
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError>;
}
