//! Profile registry and process-wide selection
//!
//! Three immutable profiles, each built exactly once on first use. `select`
//! publishes one of them as the active profile for the remainder of the
//! process; every later `active()` call returns that same reference.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::info;

use crate::chain::ChainParams;

/// Closed network vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    /// All supported networks
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized network identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetworkError(pub String);

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(UnknownNetworkError(other.to_string())),
        }
    }
}

static MAIN_PARAMS: OnceLock<ChainParams> = OnceLock::new();
static TEST_PARAMS: OnceLock<ChainParams> = OnceLock::new();
static REGTEST_PARAMS: OnceLock<ChainParams> = OnceLock::new();

/// Active profile, set exactly once by [`select`]
static ACTIVE_PARAMS: OnceLock<&'static ChainParams> = OnceLock::new();

/// Profile for a network, built on first use
pub fn params(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => MAIN_PARAMS.get_or_init(ChainParams::main),
        Network::Test => TEST_PARAMS.get_or_init(ChainParams::testnet),
        Network::Regtest => REGTEST_PARAMS.get_or_init(ChainParams::regtest),
    }
}

/// Resolve a network identifier to its profile
///
/// Pure and repeatable; does not touch the active-profile state.
pub fn lookup(identifier: &str) -> Result<&'static ChainParams, UnknownNetworkError> {
    Ok(params(identifier.parse()?))
}

/// Publish the profile for `identifier` as the process-wide active profile
///
/// Must be called exactly once, before any reader. An unrecognized
/// identifier is a recoverable error; selecting twice is a programming
/// error and aborts.
pub fn select(identifier: &str) -> Result<&'static ChainParams, UnknownNetworkError> {
    let network: Network = identifier.parse()?;
    let selected = params(network);
    if ACTIVE_PARAMS.set(selected).is_err() {
        panic!("chain parameters already selected for this process");
    }
    info!(%network, "selected chain parameters");
    Ok(selected)
}

/// The active profile published by [`select`]
///
/// Aborts if `select` has not run; there is no meaningful default network.
pub fn active() -> &'static ChainParams {
    ACTIVE_PARAMS
        .get()
        .expect("chain parameters read before selection")
}
