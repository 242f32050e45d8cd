//! Checkpoint anchors
//!
//! Hard-coded (height, hash) pairs consumed by external sync and
//! reorg-protection logic, plus coarse statistics used for progress
//! display.

use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};

/// Checkpoint anchors and sync statistics for one chain profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointData {
    /// Anchors ordered by strictly increasing height
    pub checkpoints: Vec<(u32, Hash256)>,
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Transactions between genesis and the last checkpoint
    pub total_transactions: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// Height and hash of the highest checkpoint
    pub fn last(&self) -> Option<&(u32, Hash256)> {
        self.checkpoints.last()
    }

    /// Abort unless checkpoint heights strictly increase
    pub(crate) fn validate(&self, network: &str) {
        for pair in self.checkpoints.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "{network}: checkpoint heights not strictly increasing ({} then {})",
                pair[0].0,
                pair[1].0
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256d;

    fn anchors(heights: &[u32]) -> CheckpointData {
        CheckpointData {
            checkpoints: heights
                .iter()
                .map(|&h| (h, sha256d(&h.to_le_bytes())))
                .collect(),
            last_checkpoint_time: 0,
            total_transactions: 0,
            transactions_per_day: 0.0,
        }
    }

    #[test]
    fn test_increasing_heights_accepted() {
        anchors(&[0, 5900, 6200]).validate("unit");
    }

    #[test]
    fn test_single_checkpoint_accepted() {
        anchors(&[0]).validate("unit");
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_out_of_order_rejected() {
        anchors(&[0, 6200, 5900]).validate("unit");
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_duplicate_height_rejected() {
        anchors(&[0, 5900, 5900]).validate("unit");
    }

    #[test]
    fn test_last_checkpoint() {
        let data = anchors(&[0, 5900, 6200]);
        assert_eq!(data.last().map(|(h, _)| *h), Some(6200));
        assert!(anchors(&[]).last().is_none());
    }
}
