// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout crypto-gate.

pub use secure_gate::{
    dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(MasterKey32, 32); // 256-bit dispatcher master key
fixed_alias!(Iv16, 16); // per-message IV for block transforms

// Dynamic secrets
dynamic_alias!(KeyHex, String); // hex-encoded key material in transit (config, env)
