//! Genesis regression tests
//!
//! Each profile's genesis block must reproduce its published hash and
//! merkle root byte-for-byte. A mismatch here means the constructed chain
//! would fork from every deployed node.

use linc_core::chain::lookup;

const MAIN_GENESIS_HASH: &str = "000007f3bdda2ed96c9a5fecbc59c626055661c476ffe1cf46ee75a6aa84bf34";
const TEST_GENESIS_HASH: &str = "00000523ad2c81ac31cd5575cc28fe960dce2a38f3ebb12b8a1e458ee9cfd203";
const REGTEST_GENESIS_HASH: &str =
    "000005ca1cda23f26e9c102ca6ffe9f2db341d0a3f47e620e1328085f1f1b894";

/// All three networks share the same coinbase transaction
const SHARED_MERKLE_ROOT: &str = "984e1a31140f65ba4dbef8b5d22a5d1a2363bc43898107a9fa88cfd2dde44c9f";

#[test]
fn main_genesis_matches_published_values() {
    let params = lookup("main").unwrap();
    assert_eq!(params.genesis.hash().to_string(), MAIN_GENESIS_HASH);
    assert_eq!(
        params.genesis.header.merkle_root.to_string(),
        SHARED_MERKLE_ROOT
    );
    assert_eq!(params.consensus.genesis_hash.to_string(), MAIN_GENESIS_HASH);
}

#[test]
fn test_genesis_matches_published_values() {
    let params = lookup("test").unwrap();
    assert_eq!(params.genesis.hash().to_string(), TEST_GENESIS_HASH);
    assert_eq!(
        params.genesis.header.merkle_root.to_string(),
        SHARED_MERKLE_ROOT
    );
}

#[test]
fn regtest_genesis_matches_published_values() {
    let params = lookup("regtest").unwrap();
    assert_eq!(params.genesis.hash().to_string(), REGTEST_GENESIS_HASH);
    assert_eq!(
        params.genesis.header.merkle_root.to_string(),
        SHARED_MERKLE_ROOT
    );
}

#[test]
fn genesis_hashes_are_distinct_across_profiles() {
    let main = lookup("main").unwrap().genesis.hash();
    let test = lookup("test").unwrap().genesis.hash();
    let regtest = lookup("regtest").unwrap().genesis.hash();
    assert_ne!(main, test);
    assert_ne!(main, regtest);
    assert_ne!(test, regtest);
}

#[test]
fn merkle_root_recomputes_from_transaction_list() {
    for network in ["main", "test", "regtest"] {
        let params = lookup(network).unwrap();
        assert_eq!(
            params.genesis.compute_merkle_root(),
            params.genesis.header.merkle_root,
            "{network}: merkle root must be idempotent"
        );
        // One transaction reduces to that transaction's own hash
        assert_eq!(
            params.genesis.header.merkle_root,
            params.genesis.transactions[0].txid()
        );
    }
}

#[test]
fn bip34_anchor_points_at_genesis_where_active() {
    for network in ["main", "test"] {
        let params = lookup(network).unwrap();
        assert_eq!(params.consensus.bip34_height, Some(0));
        assert_eq!(params.consensus.bip34_hash, params.genesis.hash());
    }
    assert!(lookup("regtest")
        .unwrap()
        .consensus
        .bip34_height
        .is_none());
}
