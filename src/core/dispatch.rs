// src/core/dispatch.rs
//! The Encryptor facade — single dispatch point for the operation catalog
//!
//! Every call resolves an operation tag plus an algorithm/mode tag to one
//! provider transform, or fails with a typed [`SecurityError`]. The
//! dispatcher carries no state besides the injected provider and the
//! policy fixed at construction, so it is safe to share across threads
//! whenever the provider is.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fmt;

use crate::aliases::KeyHex;
use crate::config;
use crate::consts::GENERIC_USER_MESSAGE;
use crate::core::timestamp;
use crate::core::util::{constant_time_eq, log_preview};
use crate::enums::{AlgorithmMode, CipherAlgorithm, CipherMode, CryptoOp, DigestAlgorithm};
use crate::error::SecurityError;
use crate::provider::{CryptoProvider, SoftwareProvider};

pub type Result<T> = std::result::Result<T, SecurityError>;

/// Per-call request value object — constructed per call, never retained
#[derive(Debug, Clone, Copy)]
pub struct CryptoRequest<'a> {
    pub operation: CryptoOp,
    pub mode: AlgorithmMode,
    pub payload: &'a str,
}

/// Transport-safe textual result of a dispatch
///
/// Ciphertext and digests come back as lowercase ASCII-hex; decryption
/// returns the recovered text. Raw binary never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoResult(String);

impl CryptoResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CryptoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dispatch-time policy, fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct DispatchPolicy {
    /// Permit ECB and the retired cipher families
    pub allow_legacy_ciphers: bool,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            allow_legacy_ciphers: true,
        }
    }
}

pub struct Encryptor<P = SoftwareProvider> {
    provider: P,
    policy: DispatchPolicy,
}

impl Encryptor<SoftwareProvider> {
    /// Build a dispatcher over the software provider keyed from config
    ///
    /// With dev keys disabled the master key comes from `CG_MASTER_KEY`
    /// (64 hex chars).
    pub fn from_config() -> Result<Self> {
        let config = config::load();

        let key_hex = if config.features.use_dev_keys {
            KeyHex::new(config.keys.master_key.clone())
        } else {
            KeyHex::new(std::env::var("CG_MASTER_KEY").map_err(|_| {
                encryption_failure(
                    "CG_MASTER_KEY required when dev keys are disabled".to_string(),
                )
            })?)
        };

        let key_bytes = hex::decode(key_hex.expose_secret())
            .map_err(|e| encryption_failure(format!("master key is not valid hex: {e}")).with_cause(e))?;
        let provider = SoftwareProvider::from_key_bytes(&key_bytes)
            .map_err(|e| encryption_failure(format!("master key rejected: {e}")).with_cause(e))?;

        let policy = DispatchPolicy {
            allow_legacy_ciphers: config.features.allow_legacy_ciphers,
        };
        Ok(Self::with_policy(provider, policy))
    }
}

impl<P: CryptoProvider> Encryptor<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: DispatchPolicy::default(),
        }
    }

    pub fn with_policy(provider: P, policy: DispatchPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Execute one catalog operation against the provider
    ///
    /// Operation/mode compatibility is enforced here, before the provider
    /// is touched; an unknown-at-runtime transform is the provider's call.
    pub fn execute(
        &self,
        operation: CryptoOp,
        mode: AlgorithmMode,
        data: &str,
    ) -> Result<CryptoResult> {
        let request = CryptoRequest {
            operation,
            mode,
            payload: data,
        };
        debug!("dispatching {} for {}", request.operation, request.mode);
        self.apply(request)
    }

    fn apply(&self, request: CryptoRequest<'_>) -> Result<CryptoResult> {
        let CryptoRequest {
            operation,
            mode,
            payload,
        } = request;

        match operation {
            CryptoOp::EncryptAsciiHex => {
                let (algorithm, cipher_mode) = self.cipher_tag(operation, mode)?;
                let ciphertext = self
                    .provider
                    .encrypt(algorithm, cipher_mode, payload.as_bytes())
                    .map_err(|e| {
                        encryption_failure(format!(
                            "{operation} failed for {mode}: {e} (input {} bytes)",
                            payload.len()
                        ))
                        .with_cause(e)
                    })?;
                Ok(CryptoResult(hex::encode(ciphertext)))
            }
            CryptoOp::DecryptAsciiHex => {
                let (algorithm, cipher_mode) = self.cipher_tag(operation, mode)?;
                let ciphertext = hex::decode(payload).map_err(|e| {
                    encryption_failure(format!(
                        "{operation} for {mode}: payload is not ASCII-hex \
                         ({} chars, starts \"{}\"): {e}",
                        payload.len(),
                        log_preview(payload)
                    ))
                    .with_cause(e)
                })?;
                let plaintext = self
                    .provider
                    .decrypt(algorithm, cipher_mode, &ciphertext)
                    .map_err(|e| {
                        encryption_failure(format!(
                            "{operation} failed for {mode}: {e} (input {} bytes)",
                            ciphertext.len()
                        ))
                        .with_cause(e)
                    })?;
                let text = String::from_utf8(plaintext).map_err(|e| {
                    encryption_failure(format!(
                        "{operation} for {mode}: recovered plaintext is not UTF-8 text"
                    ))
                    .with_cause(e)
                })?;
                Ok(CryptoResult(text))
            }
            CryptoOp::HashAsciiHex => {
                let digest_algorithm = match mode {
                    AlgorithmMode::Digest(digest) => digest,
                    AlgorithmMode::Cipher(..) => {
                        return Err(encryption_failure(format!(
                            "{operation} requested with cipher tag {mode}; digest tag required"
                        )))
                    }
                };
                let digest = self
                    .provider
                    .digest(digest_algorithm, payload.as_bytes())
                    .map_err(|e| {
                        encryption_failure(format!(
                            "{operation} failed for {mode}: {e} (input {} bytes)",
                            payload.len()
                        ))
                        .with_cause(e)
                    })?;
                Ok(CryptoResult(hex::encode(digest)))
            }
        }
    }

    /// Digest `data` and compare against an expected hex digest
    ///
    /// The comparison is constant-time; a mismatch is an integrity
    /// failure, not an encryption one.
    pub fn verify_digest(
        &self,
        algorithm: DigestAlgorithm,
        data: &str,
        expected_hex: &str,
    ) -> Result<()> {
        let digest = self
            .provider
            .digest(algorithm, data.as_bytes())
            .map_err(|e| {
                encryption_failure(format!(
                    "digest for {algorithm} failed: {e} (input {} bytes)",
                    data.len()
                ))
                .with_cause(e)
            })?;
        let expected = hex::decode(expected_hex).map_err(|e| {
            let log = format!(
                "{algorithm} verification: expected digest is not ASCII-hex ({} chars)",
                expected_hex.len()
            );
            warn!("{log}");
            SecurityError::integrity("integrity verification failed", log).with_cause(e)
        })?;
        if !constant_time_eq(&digest, &expected) {
            let log = format!("{algorithm} digest mismatch for {} byte input", data.len());
            warn!("{log}");
            return Err(SecurityError::integrity("integrity verification failed", log));
        }
        Ok(())
    }

    /// See [`timestamp::current_timestamp`]
    pub fn current_timestamp(&self) -> DateTime<Utc> {
        timestamp::current_timestamp()
    }

    /// See [`timestamp::relative_timestamp`]
    pub fn relative_timestamp(&self, offset_secs: i64) -> DateTime<Utc> {
        timestamp::relative_timestamp(offset_secs)
    }

    fn cipher_tag(
        &self,
        operation: CryptoOp,
        mode: AlgorithmMode,
    ) -> Result<(CipherAlgorithm, CipherMode)> {
        let (algorithm, cipher_mode) = mode.cipher_pair().ok_or_else(|| {
            encryption_failure(format!(
                "{operation} requested with digest tag {mode}; cipher tag required"
            ))
        })?;
        if !self.policy.allow_legacy_ciphers && is_legacy(algorithm, cipher_mode) {
            return Err(encryption_failure(format!(
                "legacy transform {mode} is disabled by policy"
            )));
        }
        Ok((algorithm, cipher_mode))
    }
}

fn is_legacy(algorithm: CipherAlgorithm, mode: CipherMode) -> bool {
    matches!(mode, CipherMode::Ecb)
        || matches!(
            algorithm,
            CipherAlgorithm::Des | CipherAlgorithm::Enigma | CipherAlgorithm::Wake
        )
}

fn encryption_failure(log_message: String) -> SecurityError {
    warn!("{log_message}");
    SecurityError::encryption(GENERIC_USER_MESSAGE, log_message)
}
