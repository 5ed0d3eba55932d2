// src/provider/software.rs
//! Software reference provider
//!
//! Implements the catalog subset a pure-Rust build can honor:
//! Rijndael-128 (AES, 256-bit key) in CBC/ECB/CTR/OFB/CFB with a random
//! per-message IV prepended to the ciphertext, the Arcfour stream cipher,
//! and the SHA-1/SHA-256 digests. Every other family/mode pair is
//! reported unsupported at runtime.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::aliases::{Iv16, MasterKey32, SecureRandomExt};
use crate::consts::{AES_BLOCK_LEN as BLOCK, IV_LEN, MASTER_KEY_LEN};
use crate::enums::{AlgorithmMode, CipherAlgorithm, CipherMode, DigestAlgorithm};

use super::{CryptoProvider, ProviderError};

/// Keystream-style modes sharing one apply loop
#[derive(Clone, Copy)]
enum StreamKind {
    Ctr,
    Ofb,
    Cfb,
}

pub struct SoftwareProvider {
    key: MasterKey32,
}

impl SoftwareProvider {
    pub fn new(key: MasterKey32) -> Self {
        Self { key }
    }

    /// Build a provider from raw key bytes, checking the length
    pub fn from_key_bytes(key: &[u8]) -> Result<Self, ProviderError> {
        if key.len() != MASTER_KEY_LEN {
            return Err(ProviderError::InvalidKeyLength {
                expected: MASTER_KEY_LEN,
                actual: key.len(),
            });
        }
        let mut key_arr = [0u8; MASTER_KEY_LEN];
        key_arr.copy_from_slice(key);
        Ok(Self::new(MasterKey32::new(key_arr)))
    }

    fn enc_cipher(&self) -> Aes256Enc {
        Aes256Enc::new(self.key.expose_secret().into())
    }

    fn dec_cipher(&self) -> Aes256Dec {
        Aes256Dec::new(self.key.expose_secret().into())
    }

    fn aes_cbc_encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let cipher = self.enc_cipher();
        let iv = Iv16::random();
        let padded = pkcs7_pad(plaintext);

        let mut out = Vec::with_capacity(IV_LEN + padded.len());
        out.extend_from_slice(iv.expose_secret());

        let mut prev = *iv.expose_secret();
        for chunk in padded.chunks_exact(BLOCK) {
            let mut xored = [0u8; BLOCK];
            xor_block(chunk, &prev, &mut xored);

            let mut block = AesBlock::from(xored);
            cipher.encrypt_block(&mut block);

            out.extend_from_slice(block.as_slice());
            prev.copy_from_slice(block.as_slice());
        }
        out
    }

    fn aes_cbc_decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        if ciphertext.len() < IV_LEN + BLOCK {
            return Err(ProviderError::DataTooShort {
                minimum: IV_LEN + BLOCK,
                actual: ciphertext.len(),
            });
        }
        let (iv, body) = ciphertext.split_at(IV_LEN);
        if body.len() % BLOCK != 0 {
            return Err(ProviderError::RaggedCiphertext);
        }

        let cipher = self.dec_cipher();
        let mut prev = [0u8; BLOCK];
        prev.copy_from_slice(iv);

        let mut out = Vec::with_capacity(body.len());
        for chunk in body.chunks_exact(BLOCK) {
            let mut block = AesBlock::clone_from_slice(chunk);
            cipher.decrypt_block(&mut block);

            let mut plain = [0u8; BLOCK];
            xor_block(block.as_slice(), &prev, &mut plain);
            out.extend_from_slice(&plain);
            prev.copy_from_slice(chunk);
        }
        pkcs7_unpad(&mut out)?;
        Ok(out)
    }

    fn aes_ecb_encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let cipher = self.enc_cipher();
        let padded = pkcs7_pad(plaintext);

        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK) {
            let mut block = AesBlock::clone_from_slice(chunk);
            cipher.encrypt_block(&mut block);
            out.extend_from_slice(block.as_slice());
        }
        out
    }

    fn aes_ecb_decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        if ciphertext.len() < BLOCK {
            return Err(ProviderError::DataTooShort {
                minimum: BLOCK,
                actual: ciphertext.len(),
            });
        }
        if ciphertext.len() % BLOCK != 0 {
            return Err(ProviderError::RaggedCiphertext);
        }

        let cipher = self.dec_cipher();
        let mut out = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK) {
            let mut block = AesBlock::clone_from_slice(chunk);
            cipher.decrypt_block(&mut block);
            out.extend_from_slice(block.as_slice());
        }
        pkcs7_unpad(&mut out)?;
        Ok(out)
    }

    fn aes_stream_encrypt(&self, kind: StreamKind, plaintext: &[u8]) -> Vec<u8> {
        let iv = Iv16::random();
        let mut out = Vec::with_capacity(IV_LEN + plaintext.len());
        out.extend_from_slice(iv.expose_secret());
        out.extend_from_slice(&self.aes_stream_apply(kind, iv.expose_secret(), plaintext, true));
        out
    }

    fn aes_stream_decrypt(
        &self,
        kind: StreamKind,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        if ciphertext.len() < IV_LEN {
            return Err(ProviderError::DataTooShort {
                minimum: IV_LEN,
                actual: ciphertext.len(),
            });
        }
        let (iv, body) = ciphertext.split_at(IV_LEN);
        let mut iv_arr = [0u8; IV_LEN];
        iv_arr.copy_from_slice(iv);
        Ok(self.aes_stream_apply(kind, &iv_arr, body, false))
    }

    /// One keystream loop for CTR/OFB/CFB; `state` starts as the IV
    fn aes_stream_apply(
        &self,
        kind: StreamKind,
        iv: &[u8; BLOCK],
        data: &[u8],
        encrypting: bool,
    ) -> Vec<u8> {
        let cipher = self.enc_cipher();
        let mut state = *iv;
        let mut out = Vec::with_capacity(data.len());

        for chunk in data.chunks(BLOCK) {
            let mut keystream = AesBlock::from(state);
            cipher.encrypt_block(&mut keystream);

            let mut produced = [0u8; BLOCK];
            for (i, &byte) in chunk.iter().enumerate() {
                produced[i] = byte ^ keystream[i];
            }
            out.extend_from_slice(&produced[..chunk.len()]);

            match kind {
                StreamKind::Ctr => next_counter(&mut state),
                StreamKind::Ofb => state.copy_from_slice(keystream.as_slice()),
                StreamKind::Cfb => {
                    // feedback register takes the ciphertext block
                    if encrypting {
                        state[..chunk.len()].copy_from_slice(&produced[..chunk.len()]);
                    } else {
                        state[..chunk.len()].copy_from_slice(chunk);
                    }
                }
            }
        }
        out
    }

    fn arcfour_apply(&self, data: &[u8]) -> Vec<u8> {
        let key = self.key.expose_secret();

        // KSA
        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        // PRGA
        let mut out = Vec::with_capacity(data.len());
        let (mut i, mut j) = (0u8, 0u8);
        for &byte in data {
            i = i.wrapping_add(1);
            j = j.wrapping_add(s[i as usize]);
            s.swap(i as usize, j as usize);
            let k = s[s[i as usize].wrapping_add(s[j as usize]) as usize];
            out.push(byte ^ k);
        }
        out
    }
}

impl CryptoProvider for SoftwareProvider {
    fn encrypt(
        &self,
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        match (algorithm, mode) {
            (CipherAlgorithm::Rijndael128, CipherMode::Cbc) => Ok(self.aes_cbc_encrypt(plaintext)),
            (CipherAlgorithm::Rijndael128, CipherMode::Ecb) => Ok(self.aes_ecb_encrypt(plaintext)),
            (CipherAlgorithm::Rijndael128, CipherMode::Ctr) => {
                Ok(self.aes_stream_encrypt(StreamKind::Ctr, plaintext))
            }
            (CipherAlgorithm::Rijndael128, CipherMode::Ofb) => {
                Ok(self.aes_stream_encrypt(StreamKind::Ofb, plaintext))
            }
            (CipherAlgorithm::Rijndael128, CipherMode::Cfb) => {
                Ok(self.aes_stream_encrypt(StreamKind::Cfb, plaintext))
            }
            (CipherAlgorithm::Arcfour, CipherMode::Stream) => Ok(self.arcfour_apply(plaintext)),
            (algorithm, mode) => Err(ProviderError::UnsupportedTransform(AlgorithmMode::Cipher(
                algorithm, mode,
            ))),
        }
    }

    fn decrypt(
        &self,
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        match (algorithm, mode) {
            (CipherAlgorithm::Rijndael128, CipherMode::Cbc) => self.aes_cbc_decrypt(ciphertext),
            (CipherAlgorithm::Rijndael128, CipherMode::Ecb) => self.aes_ecb_decrypt(ciphertext),
            (CipherAlgorithm::Rijndael128, CipherMode::Ctr) => {
                self.aes_stream_decrypt(StreamKind::Ctr, ciphertext)
            }
            (CipherAlgorithm::Rijndael128, CipherMode::Ofb) => {
                self.aes_stream_decrypt(StreamKind::Ofb, ciphertext)
            }
            (CipherAlgorithm::Rijndael128, CipherMode::Cfb) => {
                self.aes_stream_decrypt(StreamKind::Cfb, ciphertext)
            }
            (CipherAlgorithm::Arcfour, CipherMode::Stream) => Ok(self.arcfour_apply(ciphertext)),
            (algorithm, mode) => Err(ProviderError::UnsupportedTransform(AlgorithmMode::Cipher(
                algorithm, mode,
            ))),
        }
    }

    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(match algorithm {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        })
    }
}

/// XOR two 16-byte blocks into `output`
#[inline(always)]
fn xor_block(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    for i in 0..BLOCK {
        output[i] = block_a[i] ^ block_b[i];
    }
}

/// Increment the counter block as one big-endian integer
#[inline]
fn next_counter(block: &mut [u8; BLOCK]) {
    for byte in block.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK - data.len() % BLOCK;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat(pad as u8).take(pad));
    out
}

fn pkcs7_unpad(data: &mut Vec<u8>) -> Result<(), ProviderError> {
    let pad = *data.last().ok_or(ProviderError::InvalidPadding)? as usize;
    if pad == 0 || pad > BLOCK || pad > data.len() {
        return Err(ProviderError::InvalidPadding);
    }
    if data[data.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(ProviderError::InvalidPadding);
    }
    data.truncate(data.len() - pad);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SoftwareProvider {
        SoftwareProvider::new(MasterKey32::new([0x42u8; 32]))
    }

    #[test]
    fn test_cbc_roundtrip() {
        let p = provider();
        let ct = p
            .encrypt(CipherAlgorithm::Rijndael128, CipherMode::Cbc, b"hello")
            .unwrap();
        assert_ne!(&ct[IV_LEN..], b"hello".as_slice());
        let pt = p
            .decrypt(CipherAlgorithm::Rijndael128, CipherMode::Cbc, &ct)
            .unwrap();
        assert_eq!(pt, b"hello");
    }

    #[test]
    fn test_cbc_pads_exact_multiple() {
        let p = provider();
        let plaintext = [0xABu8; 32];
        let ct = p
            .encrypt(CipherAlgorithm::Rijndael128, CipherMode::Cbc, &plaintext)
            .unwrap();
        // IV + plaintext + one full pad block
        assert_eq!(ct.len(), IV_LEN + 32 + BLOCK);
        let pt = p
            .decrypt(CipherAlgorithm::Rijndael128, CipherMode::Cbc, &ct)
            .unwrap();
        assert_eq!(pt, plaintext);
    }

    #[test]
    fn test_ctr_preserves_length() {
        let p = provider();
        let ct = p
            .encrypt(CipherAlgorithm::Rijndael128, CipherMode::Ctr, b"not a block multiple")
            .unwrap();
        assert_eq!(ct.len(), IV_LEN + b"not a block multiple".len());
        let pt = p
            .decrypt(CipherAlgorithm::Rijndael128, CipherMode::Ctr, &ct)
            .unwrap();
        assert_eq!(pt, b"not a block multiple");
    }

    #[test]
    fn test_unsupported_transform() {
        let p = provider();
        let result = p.encrypt(CipherAlgorithm::Loki97, CipherMode::Cbc, b"x");
        assert!(matches!(result, Err(ProviderError::UnsupportedTransform(_))));
    }

    #[test]
    fn test_from_key_bytes_rejects_short_key() {
        let result = SoftwareProvider::from_key_bytes(&[0u8; 16]);
        assert!(matches!(
            result,
            Err(ProviderError::InvalidKeyLength { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn test_unpad_rejects_garbage() {
        let mut garbage = vec![1u8, 2, 3, 0xFF];
        assert!(matches!(
            pkcs7_unpad(&mut garbage),
            Err(ProviderError::InvalidPadding)
        ));
    }
}
