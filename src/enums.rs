// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent the
//! reviewed operation catalog: crypto operations, cipher families,
//! chaining modes, and digest algorithms. These sets are deliberately
//! closed — a transform outside them cannot be expressed, which is the
//! primary security property of the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations the dispatcher can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CryptoOp {
    /// Encrypt text, returning ASCII-hex ciphertext
    EncryptAsciiHex,
    /// Decrypt ASCII-hex ciphertext, returning the original text
    DecryptAsciiHex,
    /// Digest text, returning the ASCII-hex digest
    HashAsciiHex,
}

impl CryptoOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CryptoOp::EncryptAsciiHex => "encrypt-ascii-hex",
            CryptoOp::DecryptAsciiHex => "decrypt-ascii-hex",
            CryptoOp::HashAsciiHex => "hash-ascii-hex",
        }
    }
}

impl fmt::Display for CryptoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cipher families of the catalog
///
/// The Rijndael tags name the *block* size, not the key size. A provider
/// may support only a subset; requesting the rest is a runtime error,
/// never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    Cast128,
    Gost,
    Rijndael128,
    Twofish,
    Arcfour,
    Cast256,
    Loki97,
    Rijndael192,
    SaferPlus,
    Wake,
    BlowfishCompat,
    Des,
    Rijndael256,
    Serpent,
    Xtea,
    Blowfish,
    Enigma,
    Rc2,
    TripleDes,
}

impl CipherAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherAlgorithm::Cast128 => "cast-128",
            CipherAlgorithm::Gost => "gost",
            CipherAlgorithm::Rijndael128 => "rijndael-128",
            CipherAlgorithm::Twofish => "twofish",
            CipherAlgorithm::Arcfour => "arcfour",
            CipherAlgorithm::Cast256 => "cast-256",
            CipherAlgorithm::Loki97 => "loki97",
            CipherAlgorithm::Rijndael192 => "rijndael-192",
            CipherAlgorithm::SaferPlus => "saferplus",
            CipherAlgorithm::Wake => "wake",
            CipherAlgorithm::BlowfishCompat => "blowfish-compat",
            CipherAlgorithm::Des => "des",
            CipherAlgorithm::Rijndael256 => "rijndael-256",
            CipherAlgorithm::Serpent => "serpent",
            CipherAlgorithm::Xtea => "xtea",
            CipherAlgorithm::Blowfish => "blowfish",
            CipherAlgorithm::Enigma => "enigma",
            CipherAlgorithm::Rc2 => "rc2",
            CipherAlgorithm::TripleDes => "tripledes",
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chaining modes of the catalog
///
/// `Cfb`/`Ofb` are the full-block variants here; `Ncfb`/`Nofb` keep the
/// byte-granular legacy semantics as distinct tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherMode {
    Cbc,
    Cfb,
    Ctr,
    Ecb,
    Ncfb,
    Nofb,
    Ofb,
    Stream,
}

impl CipherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Cbc => "cbc",
            CipherMode::Cfb => "cfb",
            CipherMode::Ctr => "ctr",
            CipherMode::Ecb => "ecb",
            CipherMode::Ncfb => "ncfb",
            CipherMode::Nofb => "nofb",
            CipherMode::Ofb => "ofb",
            CipherMode::Stream => "stream",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Algorithm/mode tag resolved by the provider to one concrete transform
///
/// The nested pair shape keeps the cross product closed and alias-free:
/// every constructible tag maps to exactly one provider-side transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmMode {
    Cipher(CipherAlgorithm, CipherMode),
    Digest(DigestAlgorithm),
}

impl AlgorithmMode {
    /// The cipher pair, if this tag names a confidentiality transform
    pub fn cipher_pair(&self) -> Option<(CipherAlgorithm, CipherMode)> {
        match self {
            AlgorithmMode::Cipher(algorithm, mode) => Some((*algorithm, *mode)),
            AlgorithmMode::Digest(_) => None,
        }
    }

    /// The digest algorithm, if this tag names a one-way transform
    pub fn digest(&self) -> Option<DigestAlgorithm> {
        match self {
            AlgorithmMode::Cipher(..) => None,
            AlgorithmMode::Digest(digest) => Some(*digest),
        }
    }
}

impl fmt::Display for AlgorithmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmMode::Cipher(algorithm, mode) => write!(f, "{algorithm}/{mode}"),
            AlgorithmMode::Digest(digest) => write!(f, "{digest}"),
        }
    }
}
