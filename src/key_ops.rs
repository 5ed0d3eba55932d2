// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles secure master-key generation and the string
//! representations operators need when provisioning a config.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::{MasterKey32, SecureConversionsExt, SecureRandomExt};

pub type Key = MasterKey32;

/// Generate a new random 256-bit master key
#[inline]
pub fn generate_master_key() -> Key {
    Key::random()
}

/// String representations of a key for provisioning/display
#[derive(Debug, Clone)]
pub struct MasterKeyRepr {
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &Key) -> MasterKeyRepr {
    MasterKeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
    }
}
