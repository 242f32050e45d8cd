//! Block structure for the LINC blockchain
//!
//! Defines the immutable block and block header structures and the
//! 80-byte header encoding block hashes are computed over.

use crate::consensus::Transaction;
use crate::crypto::{compute_merkle_root, sha256d, Hash256};
use serde::{Deserialize, Serialize};

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block format version
    pub version: i32,
    /// Hash of the previous block (zero for genesis)
    pub prev_hash: Hash256,
    /// Merkle root of all transactions
    pub merkle_root: Hash256,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce found by the miner
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize the 80-byte header for hashing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(80);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_hash.0);
        bytes.extend_from_slice(&self.merkle_root.0);
        bytes.extend_from_slice(&self.time.to_le_bytes());
        bytes.extend_from_slice(&self.bits.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Get the block hash
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }

    /// Merkle root over the transaction list
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_hash: Hash256::zero(),
            merkle_root: Hash256::zero(),
            time: 1_234_567_890,
            bits: 0x1d00ffff,
            nonce: 0,
        }
    }

    #[test]
    fn test_block_header_serialization() {
        let bytes = header().to_bytes();
        assert_eq!(bytes.len(), 4 + 32 + 32 + 4 + 4 + 4); // 80 bytes
    }

    #[test]
    fn test_header_hash_deterministic() {
        assert_eq!(header().hash(), header().hash());
    }

    #[test]
    fn test_nonce_changes_hash() {
        let a = header();
        let mut b = header();
        b.nonce = 1;
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_genesis_block_detection() {
        let block = Block {
            header: header(),
            transactions: vec![],
        };
        assert!(block.is_genesis());
    }
}
