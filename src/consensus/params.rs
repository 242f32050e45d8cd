//! Consensus rule record
//!
//! Passive per-profile tunables consumed by the validation, difficulty,
//! signaling, and governance subsystems. Populated once by the chain
//! profile builders and never mutated afterwards.

use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};

/// Sentinel height meaning "feature never activates"
pub const HEIGHT_NEVER: u32 = u32::MAX;

/// Sentinel deployment time meaning "no bound"
pub const TIMEOUT_NEVER: i64 = i64::MAX;

/// Tracked soft-fork deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Reserved deployment exercising the signaling machinery
    TestDummy = 0,
    /// BIP68/BIP112/BIP113 relative lock-time bundle
    Csv = 1,
}

/// Number of tracked deployments
pub const MAX_DEPLOYMENTS: usize = 2;

/// Version-bits deployment descriptor
///
/// Interpreted by the external signaling-threshold evaluator; this crate
/// only declares the windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftForkDeployment {
    /// Signaling bit in the block version field, 0..=31
    pub bit: u8,
    /// Unix time at which signaling may begin
    pub start_time: i64,
    /// Unix time after which the deployment is considered failed
    pub timeout: i64,
}

/// All consensus tunables for one chain profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusRules {
    /// Blocks between subsidy halvings
    pub subsidy_halving_interval: u32,
    /// Height at which masternode payments begin
    pub masternode_payments_start_block: u32,
    pub masternode_payments_increase_block: u32,
    /// Blocks between masternode reward increases
    pub masternode_payments_increase_period: u32,
    /// Height at which dev-fund payments begin
    pub dev_fund_payments_start_block: u32,
    /// Address the dev-fund payout is owed to
    pub dev_fund_payments_address: String,
    /// Height from which mining pools must be registered
    pub pool_registration_start_block: u32,
    /// Height from which repeat-forger penalties apply
    pub same_forger_penalty_start_block: u32,
    /// Depth an instant-confirmation lock holds inputs for
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    /// Seconds a proposal must exist before entering a budget
    pub budget_proposal_establishing_time: u64,
    pub superblock_start_block: u32,
    pub superblock_cycle: u32,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub masternode_minimum_confirmations: u32,
    /// Blocks in the majority window that enforce an upgraded version
    pub majority_enforce_block_upgrade: u32,
    /// Blocks in the majority window that reject an outdated version
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// Height from which the coinbase height commitment is enforced
    /// (`None` where it never activated)
    pub bip34_height: Option<u32>,
    /// Hash of the block at `bip34_height`
    pub bip34_hash: Hash256,
    /// Proof-of-work ceiling (easiest permitted target)
    pub pow_limit: Hash256,
    /// Seconds per difficulty retarget period
    pub pow_target_timespan: u64,
    /// Target seconds between blocks
    pub pow_target_spacing: u64,
    /// Permit minimum-difficulty blocks after long gaps
    pub pow_allow_min_difficulty_blocks: bool,
    /// Disable retargeting entirely
    pub pow_no_retargeting: bool,
    /// Height of the first difficulty-algorithm transition
    pub pow_kgw_height: u32,
    /// Height of the second difficulty-algorithm transition
    pub pow_dgw_height: u32,
    /// Signaling blocks required within one window to lock a rule change in
    pub rule_change_activation_threshold: u32,
    /// Blocks per signaling window
    pub miner_confirmation_window: u32,
    /// Deployment descriptors, indexed by [`Deployment`]
    pub deployments: [SoftForkDeployment; MAX_DEPLOYMENTS],
    /// Hash the genesis block constructed for this profile must have
    pub genesis_hash: Hash256,
}

impl ConsensusRules {
    /// Descriptor for one tracked deployment
    pub fn deployment(&self, deployment: Deployment) -> &SoftForkDeployment {
        &self.deployments[deployment as usize]
    }

    /// Abort on any malformed deployment descriptor
    pub(crate) fn validate_deployments(&self, network: &str) {
        let mut seen_bits = [false; 32];
        for dep in &self.deployments {
            assert!(
                dep.bit < 32,
                "{network}: deployment bit {} out of range",
                dep.bit
            );
            assert!(
                dep.start_time == TIMEOUT_NEVER
                    || dep.timeout == TIMEOUT_NEVER
                    || dep.start_time <= dep.timeout,
                "{network}: deployment start {} after timeout {}",
                dep.start_time,
                dep.timeout
            );
            assert!(
                !seen_bits[dep.bit as usize],
                "{network}: deployment bit {} used twice",
                dep.bit
            );
            seen_bits[dep.bit as usize] = true;
        }
    }
}
