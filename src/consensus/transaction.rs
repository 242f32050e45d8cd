//! Transaction structure and consensus encoding
//!
//! Script-carrying UTXO transactions. Signing and validation live outside
//! this crate; blocks constructed here only need the exact byte encoding
//! transaction hashes are computed over.

use crate::consensus::encode::write_compact_size;
use crate::crypto::{sha256d, Hash256};
use serde::{Deserialize, Serialize};

/// Sequence value marking an input final
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub txid: Hash256,
    /// Index of the output in that transaction
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint carried by a coinbase input
    pub const fn null() -> Self {
        OutPoint {
            txid: Hash256::zero(),
            vout: 0xFFFF_FFFF,
        }
    }

    /// Check for the coinbase sentinel
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == 0xFFFF_FFFF
    }
}

/// A transaction input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent
    pub prevout: OutPoint,
    /// Unlocking script; for a coinbase this is arbitrary data
    pub script_sig: Vec<u8>,
    /// Relative lock-time / replacement field
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: u64,
    /// Locking script of the recipient
    pub script_pubkey: Vec<u8>,
}

/// A complete transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction inputs
    pub inputs: Vec<TxIn>,
    /// Transaction outputs
    pub outputs: Vec<TxOut>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Serialize with the consensus encoding hashes are computed over
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prevout.txid.0);
            bytes.extend_from_slice(&input.prevout.vout.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(&input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }
        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(&output.script_pubkey);
        }
        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction hash (double-SHA256 of the consensus encoding)
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> u64 {
        self.outputs.iter().map(|o| o.value).sum()
    }
}
