// tests/dispatch_tests.rs
use crypto_gate::{
    AlgorithmMode, CipherAlgorithm, CipherMode, CryptoOp, CryptoProvider, DigestAlgorithm,
    DispatchPolicy, Encryptor, MasterKey32, ProviderError, SecurityErrorKind, SoftwareProvider,
};

fn gate() -> Encryptor<SoftwareProvider> {
    let _ = env_logger::builder().is_test(true).try_init();
    Encryptor::new(SoftwareProvider::new(MasterKey32::new([0x42u8; 32])))
}

/// Provider that must never be reached — compatibility rejection happens first
struct PanicProvider;

impl CryptoProvider for PanicProvider {
    fn encrypt(
        &self,
        _algorithm: CipherAlgorithm,
        _mode: CipherMode,
        _plaintext: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        panic!("provider encrypt path must not be invoked");
    }

    fn decrypt(
        &self,
        _algorithm: CipherAlgorithm,
        _mode: CipherMode,
        _ciphertext: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        panic!("provider decrypt path must not be invoked");
    }

    fn digest(&self, _algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        panic!("provider digest path must not be invoked");
    }
}

#[test]
fn test_cbc_scenario_roundtrip_hello() {
    let gate = gate();
    let mode = AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc);

    let ciphertext = gate
        .execute(CryptoOp::EncryptAsciiHex, mode, "hello")
        .unwrap();
    assert!(!ciphertext.as_str().is_empty());
    assert_eq!(ciphertext.as_str().len() % 2, 0);
    assert!(ciphertext
        .as_str()
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let plaintext = gate
        .execute(CryptoOp::DecryptAsciiHex, mode, ciphertext.as_str())
        .unwrap();
    assert_eq!(plaintext.as_str(), "hello");
}

#[test]
fn test_roundtrip_all_supported_modes() {
    let gate = gate();
    let modes = [
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc),
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Ecb),
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Ctr),
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Ofb),
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cfb),
        AlgorithmMode::Cipher(CipherAlgorithm::Arcfour, CipherMode::Stream),
    ];

    for mode in modes {
        let ciphertext = gate
            .execute(CryptoOp::EncryptAsciiHex, mode, "Attack at dawn!")
            .unwrap();
        let plaintext = gate
            .execute(CryptoOp::DecryptAsciiHex, mode, ciphertext.as_str())
            .unwrap();
        assert_eq!(plaintext.as_str(), "Attack at dawn!", "mode {mode}");
    }
}

#[test]
fn test_iv_modes_differ_between_calls() {
    let gate = gate();
    let mode = AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc);

    let first = gate
        .execute(CryptoOp::EncryptAsciiHex, mode, "same input")
        .unwrap();
    let second = gate
        .execute(CryptoOp::EncryptAsciiHex, mode, "same input")
        .unwrap();
    assert_ne!(first, second);

    for ciphertext in [first, second] {
        let plaintext = gate
            .execute(CryptoOp::DecryptAsciiHex, mode, ciphertext.as_str())
            .unwrap();
        assert_eq!(plaintext.as_str(), "same input");
    }
}

#[test]
fn test_hash_is_deterministic() {
    let gate = gate();
    let mode = AlgorithmMode::Digest(DigestAlgorithm::Sha256);

    let first = gate.execute(CryptoOp::HashAsciiHex, mode, "payload").unwrap();
    let second = gate.execute(CryptoOp::HashAsciiHex, mode, "payload").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hash_known_vector_sha1() {
    let gate = gate();
    let digest = gate
        .execute(
            CryptoOp::HashAsciiHex,
            AlgorithmMode::Digest(DigestAlgorithm::Sha1),
            "abc",
        )
        .unwrap();
    assert_eq!(digest.as_str(), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn test_digest_tag_rejected_for_encrypt_before_provider() {
    let gate = Encryptor::new(PanicProvider);
    let err = gate
        .execute(
            CryptoOp::EncryptAsciiHex,
            AlgorithmMode::Digest(DigestAlgorithm::Sha1),
            "hello",
        )
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Encryption);
    assert_eq!(err.user_message(), "an internal error occurred");
    assert!(err.log_message().contains("digest tag"));
}

#[test]
fn test_cipher_tag_rejected_for_hash_before_provider() {
    let gate = Encryptor::new(PanicProvider);
    let err = gate
        .execute(
            CryptoOp::HashAsciiHex,
            AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc),
            "hello",
        )
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Encryption);
    assert!(err.log_message().contains("cipher tag"));
}

#[test]
fn test_decrypt_rejects_malformed_hex() {
    let gate = gate();
    let err = gate
        .execute(
            CryptoOp::DecryptAsciiHex,
            AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc),
            "not hex at all",
        )
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Encryption);
    assert!(err.log_message().contains("ASCII-hex"));
}

#[test]
fn test_unsupported_transform_surfaces_as_encryption_error() {
    let gate = gate();
    let err = gate
        .execute(
            CryptoOp::EncryptAsciiHex,
            AlgorithmMode::Cipher(CipherAlgorithm::Loki97, CipherMode::Cbc),
            "hello",
        )
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Encryption);
    assert!(err.log_message().contains("loki97"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_legacy_policy_blocks_ecb_and_des() {
    let provider = SoftwareProvider::new(MasterKey32::new([0x42u8; 32]));
    let gate = Encryptor::with_policy(
        provider,
        DispatchPolicy {
            allow_legacy_ciphers: false,
        },
    );

    for mode in [
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Ecb),
        AlgorithmMode::Cipher(CipherAlgorithm::Des, CipherMode::Cbc),
    ] {
        let err = gate
            .execute(CryptoOp::EncryptAsciiHex, mode, "hello")
            .unwrap_err();
        assert!(err.log_message().contains("disabled by policy"), "mode {mode}");
    }

    // non-legacy transforms still dispatch
    gate.execute(
        CryptoOp::EncryptAsciiHex,
        AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc),
        "hello",
    )
    .unwrap();
}

#[test]
fn test_verify_digest_accepts_match_and_flags_mismatch() {
    let gate = gate();
    let good = gate
        .execute(
            CryptoOp::HashAsciiHex,
            AlgorithmMode::Digest(DigestAlgorithm::Sha256),
            "payload",
        )
        .unwrap();

    gate.verify_digest(DigestAlgorithm::Sha256, "payload", good.as_str())
        .unwrap();

    let err = gate
        .verify_digest(DigestAlgorithm::Sha256, "tampered", good.as_str())
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Integrity);
    assert_eq!(err.user_message(), "integrity verification failed");
}

#[test]
fn test_decrypt_of_garbage_blocks_fails_cleanly() {
    let gate = gate();
    // valid hex, but too short to hold an IV and a block
    let err = gate
        .execute(
            CryptoOp::DecryptAsciiHex,
            AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc),
            "deadbeef",
        )
        .unwrap_err();
    assert_eq!(err.kind(), SecurityErrorKind::Encryption);
    assert!(err.log_message().contains("too short"));
}
