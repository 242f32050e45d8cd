//! LINC Blockchain Core Library
//!
//! Chain profiles for the three mutually-exclusive LINC networks
//! (main, test, regtest) and the deterministic genesis-block construction
//! every profile is anchored to.
//!
//! This crate declares the consensus rules and identifying constants the
//! rest of the node consumes; it does not validate blocks or speak the
//! network protocol.

pub mod chain;
pub mod consensus;
pub mod crypto;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    /// Reward paid by every genesis coinbase output
    pub const GENESIS_REWARD: u64 = 50 * COIN;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name
    pub const CHAIN_NAME: &str = "LINC";
}
