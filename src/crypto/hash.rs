//! Double-SHA256 hashing
//!
//! All consensus hashing in LINC uses double-SHA256 (SHA256 applied twice),
//! the digest the published block hashes are computed under.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output
///
/// Bytes are stored in the order the hash function produces them. Hex
/// display and parsing use the reversed byte order that block explorers
/// print, so `to_hex`/`from_hex` round-trip the conventional hash strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Create a zero hash (used for genesis previous hash)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    /// Create hash from bytes in stored order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Parse a hash from display (explorer) hex order
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash256(arr))
    }

    /// Format in display (explorer) hex order
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }

    /// Get as bytes in stored order
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check for the all-zero sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Self::zero()
    }
}

/// Hash arbitrary bytes with double-SHA256
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash256(second.into())
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}
