//! Address-encoding prefix table
//!
//! Version-byte sequences per key class, consumed by the external base58
//! text codec. Within one profile no two classes may share a prefix, or
//! decoded payloads would be ambiguous.

use serde::{Deserialize, Serialize};

/// Closed set of encodable key classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

/// All key classes, in table order
pub const KEY_CLASSES: [KeyClass; 6] = [
    KeyClass::PubkeyAddress,
    KeyClass::ScriptAddress,
    KeyClass::SecretKey,
    KeyClass::ExtPublicKey,
    KeyClass::ExtSecretKey,
    KeyClass::ExtCoinType,
];

/// Per-profile version-byte table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    pub ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    /// Version bytes for one key class
    pub fn prefix(&self, class: KeyClass) -> &[u8] {
        match class {
            KeyClass::PubkeyAddress => &self.pubkey_address,
            KeyClass::ScriptAddress => &self.script_address,
            KeyClass::SecretKey => &self.secret_key,
            KeyClass::ExtPublicKey => &self.ext_public_key,
            KeyClass::ExtSecretKey => &self.ext_secret_key,
            KeyClass::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// Abort if two key classes share an encoding prefix
    pub(crate) fn validate(&self, network: &str) {
        for (i, a) in KEY_CLASSES.iter().enumerate() {
            for b in &KEY_CLASSES[i + 1..] {
                assert!(
                    self.prefix(*a) != self.prefix(*b),
                    "{network}: key classes {a:?} and {b:?} share an encoding prefix"
                );
            }
        }
    }
}
