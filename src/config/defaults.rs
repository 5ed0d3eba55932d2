// src/config/defaults.rs
use crate::config::app::{Features, Keys};

// Dev-only key — never ship a deployment that keeps use_dev_keys on
pub const DEFAULT_MASTER_KEY_HEX: &str =
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

pub fn default_keys() -> Keys {
    Keys {
        master_key: DEFAULT_MASTER_KEY_HEX.into(),
    }
}

pub fn default_features() -> Features {
    Features {
        use_dev_keys: true,
        allow_legacy_ciphers: true,
    }
}
