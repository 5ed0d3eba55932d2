// tests/config_tests.rs
//! Config loading is process-global (OnceLock), so everything that
//! depends on it lives in one test.

use std::io::Write;

use crypto_gate::{AlgorithmMode, CipherAlgorithm, CipherMode, CryptoOp, Encryptor};

#[test]
fn test_load_from_toml_and_build_dispatcher() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[keys]
master_key = "{}"

[features]
use_dev_keys = true
allow_legacy_ciphers = true
"#,
        "42".repeat(32)
    )
    .unwrap();
    std::env::set_var("CG_CONFIG", file.path());

    let config = crypto_gate::load_config();
    assert!(config.features.use_dev_keys);
    assert!(config.features.allow_legacy_ciphers);
    assert_eq!(config.keys.master_key, "42".repeat(32));

    let gate = Encryptor::from_config().unwrap();
    let mode = AlgorithmMode::Cipher(CipherAlgorithm::Rijndael128, CipherMode::Cbc);
    let ciphertext = gate
        .execute(CryptoOp::EncryptAsciiHex, mode, "hello")
        .unwrap();
    let plaintext = gate
        .execute(CryptoOp::DecryptAsciiHex, mode, ciphertext.as_str())
        .unwrap();
    assert_eq!(plaintext.as_str(), "hello");
}
