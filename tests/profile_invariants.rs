//! Cross-profile invariant tests
//!
//! Structural properties every profile must hold, checked from the outside
//! the way downstream subsystems would observe them.

use linc_core::chain::{lookup, KeyClass, KEY_CLASSES};
use linc_core::crypto::sha256d;

const NETWORKS: [&str; 3] = ["main", "test", "regtest"];

#[test]
fn checkpoint_heights_strictly_increase() {
    for network in NETWORKS {
        let params = lookup(network).unwrap();
        let heights: Vec<u32> = params
            .checkpoints
            .checkpoints
            .iter()
            .map(|(h, _)| *h)
            .collect();
        for pair in heights.windows(2) {
            assert!(pair[0] < pair[1], "{network}: {pair:?} out of order");
        }
    }
}

#[test]
fn address_prefixes_never_collide_within_a_profile() {
    for network in NETWORKS {
        let params = lookup(network).unwrap();
        for (i, a) in KEY_CLASSES.iter().enumerate() {
            for b in &KEY_CLASSES[i + 1..] {
                assert_ne!(
                    params.base58_prefixes.prefix(*a),
                    params.base58_prefixes.prefix(*b),
                    "{network}: {a:?} and {b:?} share a prefix"
                );
            }
        }
    }
}

#[test]
fn registered_pools_always_cover_height_zero() {
    for network in NETWORKS {
        let params = lookup(network).unwrap();
        assert!(
            params.registered_pools.contains_key(&0),
            "{network}: missing height-0 pool entry"
        );
    }
}

#[test]
fn deployment_bits_stay_in_version_field_range() {
    for network in NETWORKS {
        let params = lookup(network).unwrap();
        for dep in &params.consensus.deployments {
            assert!(dep.bit < 32, "{network}: bit {} out of range", dep.bit);
        }
    }
}

#[test]
fn unknown_network_is_a_recoverable_error() {
    assert!(lookup("bogus").is_err());
    assert!(lookup("mainnet").is_err());
    // And known networks keep resolving afterwards
    assert!(lookup("main").is_ok());
}

#[test]
fn main_pubkey_prefix_encodes_to_l_addresses() {
    // Base58check with version byte 48 puts every pubkey address in the
    // 'L' range; downstream wallets rely on this.
    let params = lookup("main").unwrap();
    let version = params.base58_prefixes.prefix(KeyClass::PubkeyAddress);
    assert_eq!(version, &[48]);

    for fill in [0x00u8, 0x7f, 0xff] {
        let mut payload = version.to_vec();
        payload.extend_from_slice(&[fill; 20]);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum.as_bytes()[..4]);
        let address = bs58::encode(payload).into_string();
        assert!(
            address.starts_with('L'),
            "expected an L-address, got {address}"
        );
    }
}

#[test]
fn seed_hosts_match_their_network() {
    let main = lookup("main").unwrap();
    assert!(!main.dns_seeds.is_empty());
    assert!(!main.fixed_seeds.is_empty());
    for seed in &main.fixed_seeds {
        assert_eq!(seed.port(), main.default_port);
    }

    let test = lookup("test").unwrap();
    for seed in &test.fixed_seeds {
        assert_eq!(seed.port(), test.default_port);
    }

    let regtest = lookup("regtest").unwrap();
    assert!(regtest.dns_seeds.is_empty());
    assert!(regtest.fixed_seeds.is_empty());
}

#[test]
fn spork_keys_present_outside_regtest() {
    for network in ["main", "test"] {
        let params = lookup(network).unwrap();
        assert!(!params.spork_pubkey.is_empty());
        assert_eq!(params.spork_pubkey, params.masternode_payments_pubkey);
        assert!(!params.alert_pubkey.is_empty());
    }
}
