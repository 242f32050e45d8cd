//! Genesis block construction
//!
//! Builds the root block each chain profile is anchored to. Construction
//! is a pure function of its inputs: identical inputs produce an identical
//! block and hash on every platform, which is what lets every profile
//! hard-code the expected result and refuse to start on any mismatch.

use crate::consensus::{
    Block, BlockHeader, OutPoint, ScriptBuilder, Transaction, TxIn, TxOut, OP_CHECKSIG,
    SEQUENCE_FINAL,
};
use crate::crypto::Hash256;

/// Legacy difficulty-bits constant carried in the coinbase signature script
const COINBASE_LEGACY_BITS: i64 = 486_604_799;

/// Fixed extra-nonce slot value in the coinbase signature script
const COINBASE_EXTRA_NONCE: i64 = 4;

/// One-time message embedded in the LINC genesis coinbase
const GENESIS_COINBASE_MESSAGE: &str = "LINC is not a coin // 2018-04-24";

/// Uncompressed public key the genesis reward is paid to
const GENESIS_OUTPUT_PUBKEY: &str = "048fb16fbd075e50edecec80589e3dddb74fe6433001a3ffbc894403b61279a5270edfa49aa7c12320a9da173331412f226f32bcd01802d5e9b40b15d0e3c894f3";

/// Build a genesis block from explicit inputs
///
/// The single transaction's input carries no real signature: its script
/// encodes the legacy bits constant, a small fixed integer, and the raw
/// coinbase message bytes, filling the arbitrary-data slot a coinbase has.
/// The output cannot be spent because no ledger entry backs it.
pub fn create_genesis_block(
    coinbase_message: &str,
    output_script: Vec<u8>,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Block {
    let script_sig = ScriptBuilder::new()
        .push_num(COINBASE_LEGACY_BITS)
        .push_num(COINBASE_EXTRA_NONCE)
        .push_data(coinbase_message.as_bytes())
        .into_bytes();

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: output_script,
        }],
        lock_time: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version,
            prev_hash: Hash256::zero(),
            merkle_root: Hash256::zero(),
            time,
            bits,
            nonce,
        },
        transactions: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Build a genesis block with the fixed LINC coinbase message and reward
/// script; profile builders supply only the varying header fields.
pub fn genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: u64) -> Block {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY).expect("genesis pubkey literal");
    let output_script = ScriptBuilder::new()
        .push_data(&pubkey)
        .push_opcode(OP_CHECKSIG)
        .into_bytes();
    create_genesis_block(
        GENESIS_COINBASE_MESSAGE,
        output_script,
        time,
        nonce,
        bits,
        version,
        reward,
    )
}
