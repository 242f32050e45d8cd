//! Chain profiles
//!
//! One immutable [`ChainParams`] aggregate per supported network, populated
//! with literal constants and self-checked at construction. A wrong value
//! here silently forks the node from its network, so every profile asserts
//! its freshly-constructed genesis block against the published hash and
//! refuses to start on any mismatch.

use std::collections::{BTreeMap, BTreeSet};
use std::net::SocketAddr;

use tracing::debug;

use crate::chain::{genesis_block, Base58Prefixes, CheckpointData, Network};
use crate::consensus::{
    Block, ConsensusRules, SoftForkDeployment, HEIGHT_NEVER, MAX_DEPLOYMENTS, TIMEOUT_NEVER,
};
use crate::constants::GENESIS_REWARD;
use crate::crypto::Hash256;

/// One DNS seed entry (label + host queried for peer addresses)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// The complete, immutable profile of one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Which network this profile identifies
    pub network: Network,
    /// Message-start magic framing every p2p message
    pub message_start: [u8; 4],
    /// Key that signs network alerts
    pub alert_pubkey: Vec<u8>,
    /// Default p2p listen port
    pub default_port: u16,
    /// Maximum tolerable age of the chain tip, seconds
    pub max_tip_age: i64,
    /// Height after which block files may be pruned
    pub prune_after_height: u64,
    /// The genesis block this profile is anchored to
    pub genesis: Block,
    /// Consensus rule record
    pub consensus: ConsensusRules,
    /// DNS seeds queried for initial peers
    pub dns_seeds: Vec<DnsSeed>,
    /// Hard-coded fallback peer addresses
    pub fixed_seeds: Vec<SocketAddr>,
    /// Address-encoding version bytes
    pub base58_prefixes: Base58Prefixes,
    /// Refuse to mine unless peers are connected
    pub mining_requires_peers: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Enforce standard-transaction rules at relay
    pub require_standard: bool,
    /// Allow block creation on demand
    pub mine_blocks_on_demand: bool,
    /// Legacy RPC field reporting testnet deprecation
    pub testnet_to_be_deprecated_field_rpc: bool,
    /// Maximum transactions a mixing pool may merge
    pub pool_max_transactions: u32,
    /// Seconds after which fulfilled p2p requests expire
    pub fulfilled_request_expire_time: u64,
    /// Key that signs sporks
    pub spork_pubkey: String,
    /// Key that signs masternode payment votes
    pub masternode_payments_pubkey: String,
    /// Checkpoint anchors
    pub checkpoints: CheckpointData,
    /// Pool identifiers permitted from each activation height onward
    pub registered_pools: BTreeMap<u32, BTreeSet<String>>,
}

fn seed(addr: &str) -> SocketAddr {
    addr.parse().expect("fixed seed literal")
}

fn pools(entries: &[(u32, &[&str])]) -> BTreeMap<u32, BTreeSet<String>> {
    entries
        .iter()
        .map(|(height, names)| (*height, names.iter().map(|s| s.to_string()).collect()))
        .collect()
}

impl ChainParams {
    /// Main network profile
    pub fn main() -> Self {
        let expected_hash =
            Hash256::from_hex("000007f3bdda2ed96c9a5fecbc59c626055661c476ffe1cf46ee75a6aa84bf34")
                .expect("genesis hash literal");
        let expected_merkle =
            Hash256::from_hex("984e1a31140f65ba4dbef8b5d22a5d1a2363bc43898107a9fa88cfd2dde44c9f")
                .expect("merkle root literal");

        let genesis = genesis_block(1524571200, 703762, 0x1e0ffff0, 1, GENESIS_REWARD);
        assert_eq!(genesis.hash(), expected_hash, "main: genesis hash mismatch");
        assert_eq!(
            genesis.header.merkle_root, expected_merkle,
            "main: genesis merkle root mismatch"
        );

        let consensus = ConsensusRules {
            subsidy_halving_interval: 64800, // every ~90 days
            masternode_payments_start_block: 3600,
            masternode_payments_increase_block: 3600, // not used
            masternode_payments_increase_period: 64800,
            dev_fund_payments_start_block: 21600,
            dev_fund_payments_address: "LZxvv1WkcsFoRVu6pEZUKumkhV2XGqSmjP".to_string(),
            pool_registration_start_block: 21600,
            same_forger_penalty_start_block: 25000,
            instant_send_keep_lock: 24,
            budget_payments_start_block: HEIGHT_NEVER, // no budget temporarily
            budget_payments_cycle_blocks: 16616,       // ~(60*24*30)/2.6
            budget_payments_window_blocks: 100,
            budget_proposal_establishing_time: 60 * 60 * 24,
            superblock_start_block: HEIGHT_NEVER, // no superblocks temporarily
            superblock_cycle: 16616,
            governance_min_quorum: 10,
            governance_filter_elements: 20000,
            masternode_minimum_confirmations: 15,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34_height: Some(0), // from launch
            bip34_hash: expected_hash,
            pow_limit: Hash256::from_hex(
                "00000fffff000000000000000000000000000000000000000000000000000000",
            )
            .expect("pow limit literal"),
            pow_target_timespan: 24 * 60 * 60, // 1 day
            pow_target_spacing: 2 * 60,        // 2 minutes
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pow_kgw_height: 10,
            pow_dgw_height: 50,
            rule_change_activation_threshold: 1916, // 95% of 2016
            miner_confirmation_window: 2016,        // timespan / spacing
            deployments: deployments_main_test(),
            genesis_hash: expected_hash,
        };

        let params = ChainParams {
            network: Network::Main,
            // Rarely-used upper ASCII, not valid UTF-8, unlikely in normal data
            message_start: [0xca, 0xd3, 0xb0, 0xb7],
            alert_pubkey: hex::decode(
                "04409e02e9b6f772af40fc897683076eec4152a5e425834a735f3e850a6493267f9864bc6c61df584e29e218d12d99ecb8982c3c1747afc0c81cc7a39a31a1f646",
            )
            .expect("alert key literal"),
            default_port: 17222,
            max_tip_age: 2 * 60 * 60, // ~2 x fork detection time
            prune_after_height: 100_000,
            genesis,
            consensus,
            dns_seeds: vec![
                DnsSeed::new("seed1.linc", "dnsseed1.linc.site"),
                DnsSeed::new("seed2.linc", "dnsseed2.linc.site"),
                DnsSeed::new("seed3.linc", "dnsseed3.linc.site"),
                DnsSeed::new("seed4.linc", "dnsseed4.linc.site"),
            ],
            fixed_seeds: vec![
                seed("95.179.155.38:17222"),
                seed("144.202.67.139:17222"),
                seed("45.77.141.80:17222"),
                seed("108.61.188.224:17222"),
            ],
            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![48], // 'L'
                script_address: vec![18], // '8'
                secret_key: vec![212],
                ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E], // 'xpub'
                ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4], // 'xprv'
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x05],  // BIP44 coin type 5
            },
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: false,
            pool_max_transactions: 3,
            fulfilled_request_expire_time: 60 * 60, // 1 hour
            spork_pubkey: "04a460e5df140a13bbc49c904c2ab92ca615f776070e9847044ea95b5c374385a29fdbef318a4b495d77bec63bee11a3805862cae5e5fb7b3add309a0075afb387".to_string(),
            masternode_payments_pubkey: "04a460e5df140a13bbc49c904c2ab92ca615f776070e9847044ea95b5c374385a29fdbef318a4b495d77bec63bee11a3805862cae5e5fb7b3add309a0075afb387".to_string(),
            checkpoints: CheckpointData {
                checkpoints: vec![
                    (0, expected_hash),
                    (
                        5900,
                        Hash256::from_hex(
                            "000000000c36c7a21a77b9b0610b6abfeba1f397de80333bdf608de3be77a245",
                        )
                        .expect("checkpoint literal"),
                    ),
                    (
                        6200,
                        Hash256::from_hex(
                            "000000d1c2d7e422860d402afb2d59fdfda9fed098a0048d200f67b89fc60228",
                        )
                        .expect("checkpoint literal"),
                    ),
                ],
                last_checkpoint_time: 1525469428,
                total_transactions: 10448,
                transactions_per_day: 1500.0,
            },
            registered_pools: pools(&[
                (0, &[]),
                (
                    21600,
                    &[
                        "LNg5rEQFKTDPzcFMJjZPyygPis1q8s6AYT", // LINC
                        "LPvR4Hjs2KT5NCBD5fATCxuY2n9Pd7yRMu", // Saltpool
                        "LKaYw79j6j7ZKRp2HmgLAUdpafsjJ9hFUh", // Hash4life
                        "LcByXiuQnAn55zAFTSUzmjysZXzUH3uX1P", // FairMine
                        "LPeebZHVdKpVJcLZEJqYzTAf3hV6PDqJ3f", // BSOD
                        "LiHjnMV83HpFfD3DzjCU9bdkV3SboR3cyt", // WeekendPool
                    ],
                ),
            ]),
        };
        params.validate();
        debug!(network = %params.network, genesis = %params.genesis.hash(), "constructed chain parameters");
        params
    }

    /// Test network profile
    pub fn testnet() -> Self {
        let expected_hash =
            Hash256::from_hex("00000523ad2c81ac31cd5575cc28fe960dce2a38f3ebb12b8a1e458ee9cfd203")
                .expect("genesis hash literal");
        let expected_merkle =
            Hash256::from_hex("984e1a31140f65ba4dbef8b5d22a5d1a2363bc43898107a9fa88cfd2dde44c9f")
                .expect("merkle root literal");

        let genesis = genesis_block(1524571220, 1874694, 0x1e0ffff0, 1, GENESIS_REWARD);
        assert_eq!(genesis.hash(), expected_hash, "test: genesis hash mismatch");
        assert_eq!(
            genesis.header.merkle_root, expected_merkle,
            "test: genesis merkle root mismatch"
        );

        let consensus = ConsensusRules {
            subsidy_halving_interval: 64800,
            masternode_payments_start_block: 3600,
            masternode_payments_increase_block: 3600,
            masternode_payments_increase_period: 64800,
            dev_fund_payments_start_block: 21600,
            dev_fund_payments_address: "LZxvv1WkcsFoRVu6pEZUKumkhV2XGqSmjP".to_string(),
            pool_registration_start_block: HEIGHT_NEVER,
            same_forger_penalty_start_block: HEIGHT_NEVER,
            instant_send_keep_lock: 6,
            budget_payments_start_block: HEIGHT_NEVER,
            budget_payments_cycle_blocks: 50,
            budget_payments_window_blocks: 10,
            budget_proposal_establishing_time: 60 * 20,
            superblock_start_block: HEIGHT_NEVER,
            superblock_cycle: 24, // superblocks can be issued hourly
            governance_min_quorum: 1,
            governance_filter_elements: 500,
            masternode_minimum_confirmations: 1,
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 100,
            bip34_height: Some(0),
            bip34_hash: expected_hash,
            pow_limit: Hash256::from_hex(
                "00000fffff000000000000000000000000000000000000000000000000000000",
            )
            .expect("pow limit literal"),
            pow_target_timespan: 24 * 60 * 60,
            pow_target_spacing: 2 * 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            pow_kgw_height: 10,
            pow_dgw_height: 50,
            rule_change_activation_threshold: 1512, // 75% for testchains
            miner_confirmation_window: 2016,
            deployments: deployments_main_test(),
            genesis_hash: expected_hash,
        };

        let params = ChainParams {
            network: Network::Test,
            message_start: [0xc2, 0x3d, 0xc1, 0xbf],
            alert_pubkey: hex::decode(
                "047ce3f4270b51da389992fc2509710da96f4103f61513188bafd56d4493510cbc4c3c578ff08dd5da82050fe85bc2a7f66f7462268c58892e235ba0a9a8addfe3",
            )
            .expect("alert key literal"),
            default_port: 17333,
            max_tip_age: i64::from(i32::MAX), // allow mining on top of old blocks
            prune_after_height: 1000,
            genesis,
            consensus,
            dns_seeds: vec![DnsSeed::new("testnet-seed.linc", "testnet-seed.linc.site")],
            fixed_seeds: vec![seed("45.32.180.12:17333"), seed("207.148.9.177:17333")],
            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![127], // 't'
                script_address: vec![19],
                secret_key: vec![239],
                ext_public_key: vec![0x04, 0x35, 0x87, 0xCF], // 'tpub'
                ext_secret_key: vec![0x04, 0x35, 0x83, 0x94], // 'tprv'
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],  // testnet coin type 1
            },
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            pool_max_transactions: 3,
            fulfilled_request_expire_time: 5 * 60,
            spork_pubkey: "04547e657d1c35813d2461eb7cad490be6222b90e192d6e184ff93907173bac6b29fe4bec036b9f1baa36904d8f30d773e5af730050c88120db1aa54217c36b8b5".to_string(),
            masternode_payments_pubkey: "04547e657d1c35813d2461eb7cad490be6222b90e192d6e184ff93907173bac6b29fe4bec036b9f1baa36904d8f30d773e5af730050c88120db1aa54217c36b8b5".to_string(),
            checkpoints: CheckpointData {
                checkpoints: vec![(0, expected_hash)],
                last_checkpoint_time: 1524571220,
                total_transactions: 0,
                transactions_per_day: 0.0,
            },
            registered_pools: pools(&[(0, &[])]),
        };
        params.validate();
        debug!(network = %params.network, genesis = %params.genesis.hash(), "constructed chain parameters");
        params
    }

    /// Regression-test profile
    pub fn regtest() -> Self {
        let expected_hash =
            Hash256::from_hex("000005ca1cda23f26e9c102ca6ffe9f2db341d0a3f47e620e1328085f1f1b894")
                .expect("genesis hash literal");
        let expected_merkle =
            Hash256::from_hex("984e1a31140f65ba4dbef8b5d22a5d1a2363bc43898107a9fa88cfd2dde44c9f")
                .expect("merkle root literal");

        let genesis = genesis_block(1524571240, 153776, 0x1e0ffff0, 1, GENESIS_REWARD);
        assert_eq!(
            genesis.hash(),
            expected_hash,
            "regtest: genesis hash mismatch"
        );
        assert_eq!(
            genesis.header.merkle_root, expected_merkle,
            "regtest: genesis merkle root mismatch"
        );

        let consensus = ConsensusRules {
            subsidy_halving_interval: 150,
            masternode_payments_start_block: 240,
            masternode_payments_increase_block: 350,
            masternode_payments_increase_period: 10,
            dev_fund_payments_start_block: 21600,
            dev_fund_payments_address: "LZxvv1WkcsFoRVu6pEZUKumkhV2XGqSmjP".to_string(),
            pool_registration_start_block: HEIGHT_NEVER,
            same_forger_penalty_start_block: HEIGHT_NEVER,
            instant_send_keep_lock: 6,
            budget_payments_start_block: HEIGHT_NEVER,
            budget_payments_cycle_blocks: 50,
            budget_payments_window_blocks: 10,
            budget_proposal_establishing_time: 60 * 20,
            superblock_start_block: HEIGHT_NEVER,
            superblock_cycle: 10,
            governance_min_quorum: 1,
            governance_filter_elements: 100,
            masternode_minimum_confirmations: 1,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34_height: None, // not necessarily activated on regtest
            bip34_hash: Hash256::zero(),
            pow_limit: Hash256::from_hex(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )
            .expect("pow limit literal"),
            pow_target_timespan: 24 * 60 * 60,
            pow_target_spacing: 2 * 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pow_kgw_height: 50,
            pow_dgw_height: 50,
            rule_change_activation_threshold: 108, // 75% for testchains
            miner_confirmation_window: 144,        // faster than normal
            deployments: deployments_always_active(),
            genesis_hash: expected_hash,
        };

        let params = ChainParams {
            network: Network::Regtest,
            message_start: [0xc9, 0xf7, 0xba, 0xa1],
            alert_pubkey: Vec::new(),
            default_port: 17444,
            max_tip_age: 6 * 60 * 60,
            prune_after_height: 1000,
            genesis,
            consensus,
            dns_seeds: Vec::new(),   // regtest has no DNS seeds
            fixed_seeds: Vec::new(), // regtest has no fixed seeds
            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![122], // 'r'
                script_address: vec![19],
                secret_key: vec![239],
                ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
            },
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            pool_max_transactions: 3,
            fulfilled_request_expire_time: 5 * 60,
            spork_pubkey: String::new(),
            masternode_payments_pubkey: String::new(),
            checkpoints: CheckpointData {
                checkpoints: vec![(0, expected_hash)],
                last_checkpoint_time: 0,
                total_transactions: 0,
                transactions_per_day: 0.0,
            },
            registered_pools: pools(&[(0, &[])]),
        };
        params.validate();
        debug!(network = %params.network, genesis = %params.genesis.hash(), "constructed chain parameters");
        params
    }

    /// Pool identifiers permitted at a given height
    pub fn registered_pools_at(&self, height: u32) -> &BTreeSet<String> {
        self.registered_pools
            .range(..=height)
            .next_back()
            .map(|(_, set)| set)
            .expect("registered pools always carry a height-0 entry")
    }

    /// Startup self-checks; any failure is fatal
    fn validate(&self) {
        let network = self.network.as_str();
        assert_eq!(
            self.genesis.hash(),
            self.consensus.genesis_hash,
            "{network}: genesis hash does not match consensus record"
        );
        assert_eq!(
            self.genesis.header.merkle_root,
            self.genesis.compute_merkle_root(),
            "{network}: genesis merkle root does not recompute"
        );
        self.consensus.validate_deployments(network);
        self.checkpoints.validate(network);
        self.base58_prefixes.validate(network);
        assert!(
            self.registered_pools.contains_key(&0),
            "{network}: registered pools missing the height-0 entry"
        );
    }
}

/// Deployment windows shared by the main and test profiles
fn deployments_main_test() -> [SoftForkDeployment; MAX_DEPLOYMENTS] {
    [
        SoftForkDeployment {
            bit: 28,
            start_time: 1199145601, // January 1, 2008
            timeout: 1230767999,    // December 31, 2008
        },
        SoftForkDeployment {
            bit: 0,
            start_time: 1519862400, // March 1st, 2018
            timeout: 1551398400,    // March 1st, 2019
        },
    ]
}

/// Regtest deployments signal from genesis and never time out
fn deployments_always_active() -> [SoftForkDeployment; MAX_DEPLOYMENTS] {
    [
        SoftForkDeployment {
            bit: 28,
            start_time: 0,
            timeout: TIMEOUT_NEVER,
        },
        SoftForkDeployment {
            bit: 0,
            start_time: 0,
            timeout: TIMEOUT_NEVER,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::Deployment;

    #[test]
    fn test_main_profile_constructs() {
        let params = ChainParams::main();
        assert_eq!(params.network, Network::Main);
        assert_eq!(params.default_port, 17222);
        assert_eq!(params.message_start, [0xca, 0xd3, 0xb0, 0xb7]);
        assert!(params.mining_requires_peers);
        assert!(params.require_standard);
        assert!(!params.mine_blocks_on_demand);
        assert_eq!(params.checkpoints.checkpoints.len(), 3);
        assert_eq!(params.dns_seeds.len(), 4);
        assert!(!params.fixed_seeds.is_empty());
    }

    #[test]
    fn test_test_profile_constructs() {
        let params = ChainParams::testnet();
        assert_eq!(params.network, Network::Test);
        assert_eq!(params.default_port, 17333);
        assert!(!params.require_standard);
        assert!(params.consensus.pow_allow_min_difficulty_blocks);
        assert_eq!(params.checkpoints.checkpoints.len(), 1);
        assert_eq!(
            params.consensus.pool_registration_start_block,
            HEIGHT_NEVER
        );
    }

    #[test]
    fn test_regtest_profile_constructs() {
        let params = ChainParams::regtest();
        assert_eq!(params.network, Network::Regtest);
        assert_eq!(params.default_port, 17444);
        assert!(params.mine_blocks_on_demand);
        assert!(!params.mining_requires_peers);
        assert!(params.consensus.pow_no_retargeting);
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert!(params.consensus.bip34_height.is_none());
    }

    #[test]
    fn test_main_pool_allow_list_activation() {
        let params = ChainParams::main();
        assert!(params.registered_pools_at(0).is_empty());
        assert!(params.registered_pools_at(21599).is_empty());
        let active = params.registered_pools_at(21600);
        assert_eq!(active.len(), 6);
        assert!(active.contains("LNg5rEQFKTDPzcFMJjZPyygPis1q8s6AYT"));
        // Later heights keep the same allow-list
        assert_eq!(params.registered_pools_at(1_000_000), active);
    }

    #[test]
    fn test_empty_allow_lists_on_test_chains() {
        for params in [ChainParams::testnet(), ChainParams::regtest()] {
            assert_eq!(params.registered_pools.len(), 1);
            assert!(params.registered_pools_at(u32::MAX).is_empty());
        }
    }

    #[test]
    fn test_deployment_windows() {
        let main = ChainParams::main();
        let dummy = main.consensus.deployment(Deployment::TestDummy);
        assert_eq!(dummy.bit, 28);
        assert_eq!(dummy.start_time, 1199145601);
        let csv = main.consensus.deployment(Deployment::Csv);
        assert_eq!(csv.bit, 0);

        let regtest = ChainParams::regtest();
        assert_eq!(
            regtest.consensus.deployment(Deployment::Csv).timeout,
            TIMEOUT_NEVER
        );
    }

    #[test]
    fn test_genesis_anchored_in_first_checkpoint() {
        for params in [
            ChainParams::main(),
            ChainParams::testnet(),
            ChainParams::regtest(),
        ] {
            let (height, hash) = params.checkpoints.checkpoints[0];
            assert_eq!(height, 0);
            assert_eq!(hash, params.genesis.hash());
        }
    }

    #[test]
    fn test_profiles_do_not_share_identity() {
        let main = ChainParams::main();
        let test = ChainParams::testnet();
        let regtest = ChainParams::regtest();
        assert_ne!(main.genesis.hash(), test.genesis.hash());
        assert_ne!(main.genesis.hash(), regtest.genesis.hash());
        assert_ne!(test.genesis.hash(), regtest.genesis.hash());
        assert_ne!(main.message_start, test.message_start);
        assert_ne!(main.message_start, regtest.message_start);
        assert_ne!(main.default_port, test.default_port);
        assert_ne!(test.default_port, regtest.default_port);
    }
}
