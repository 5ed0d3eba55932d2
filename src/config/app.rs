// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::consts::DEFAULT_CONFIG_FILE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keys: Keys,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    /// 64 hex chars — the 256-bit dispatcher master key
    pub master_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub use_dev_keys: bool,
    pub allow_legacy_ciphers: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("CG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut conf = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read config file");
            toml::from_str(&content).expect("Invalid TOML in config file")
        } else {
            eprintln!("Warning: {DEFAULT_CONFIG_FILE} not found — using built-in defaults");
            Config {
                keys: default_keys(),
                features: default_features(),
            }
        };

        // Test mode override
        if std::env::var("CG_TEST_MODE").is_ok() {
            conf.features.use_dev_keys = false;
        }

        conf
    })
}
