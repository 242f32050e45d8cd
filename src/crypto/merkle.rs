//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks and for inclusion
//! proofs consumed by light sync.

use super::{hash_pair, Hash256};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// A single element is its own root.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash256]) -> Hash256 {
    if hashes.is_empty() {
        return Hash256::zero();
    }

    if hashes.len() == 1 {
        return hashes[0];
    }

    let mut current_level: Vec<Hash256> = hashes.to_vec();

    while current_level.len() > 1 {
        // If odd number, duplicate last
        if current_level.len() % 2 == 1 {
            current_level.push(*current_level.last().expect("level is non-empty"));
        }

        let mut next_level = Vec::with_capacity(current_level.len() / 2);

        for chunk in current_level.chunks(2) {
            let combined = hash_pair(&chunk[0], &chunk[1]);
            next_level.push(combined);
        }

        current_level = next_level;
    }

    current_level[0]
}

/// Merkle proof for a transaction
#[derive(Debug, Clone)]
pub struct MerkleProof {
    /// Index of the transaction in the block
    pub index: usize,
    /// Sibling hashes from leaf to root
    pub siblings: Vec<(Hash256, bool)>, // (hash, is_left)
}

impl MerkleProof {
    /// Verify this proof against a root hash
    pub fn verify(&self, tx_hash: &Hash256, root: &Hash256) -> bool {
        let mut current = *tx_hash;

        for (sibling, is_left) in &self.siblings {
            current = if *is_left {
                hash_pair(sibling, &current)
            } else {
                hash_pair(&current, sibling)
            };
        }

        current == *root
    }
}

/// Build a merkle proof for a transaction at given index
pub fn build_merkle_proof(hashes: &[Hash256], index: usize) -> Option<MerkleProof> {
    if hashes.is_empty() || index >= hashes.len() {
        return None;
    }

    if hashes.len() == 1 {
        return Some(MerkleProof {
            index,
            siblings: vec![],
        });
    }

    let mut current_level: Vec<Hash256> = hashes.to_vec();
    let mut current_index = index;
    let mut siblings = Vec::new();

    while current_level.len() > 1 {
        // If odd number, duplicate last
        if current_level.len() % 2 == 1 {
            current_level.push(*current_level.last().expect("level is non-empty"));
        }

        // Get sibling
        let sibling_index = if current_index % 2 == 0 {
            current_index + 1
        } else {
            current_index - 1
        };

        let is_left = current_index % 2 == 1;
        siblings.push((current_level[sibling_index], is_left));

        // Move to next level
        let mut next_level = Vec::with_capacity(current_level.len() / 2);
        for chunk in current_level.chunks(2) {
            next_level.push(hash_pair(&chunk[0], &chunk[1]));
        }

        current_level = next_level;
        current_index /= 2;
    }

    Some(MerkleProof { index, siblings })
}
