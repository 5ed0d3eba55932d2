// src/consts.rs
//! Shared constants — security parameters and defaults

/// Block length for the Rijndael-128 transforms (bytes)
pub const AES_BLOCK_LEN: usize = 16;

/// Master key length (bytes) — Rijndael-128 is keyed with 256 bits
pub const MASTER_KEY_LEN: usize = 32;

/// Per-message IV length for block transforms (bytes)
pub const IV_LEN: usize = 16;

/// The one user-visible message for internal transform failures
pub const GENERIC_USER_MESSAGE: &str = "an internal error occurred";

/// Default config file consulted when CG_CONFIG is unset
pub const DEFAULT_CONFIG_FILE: &str = "dev-config.toml";

/// Max characters of caller input echoed into a log message
pub const LOG_PREVIEW_LEN: usize = 16;
