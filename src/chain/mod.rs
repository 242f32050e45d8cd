//! Chain profiles - genesis construction, per-network constants, selection

mod address;
mod checkpoints;
mod genesis;
mod params;
mod registry;

pub use address::*;
pub use checkpoints::*;
pub use genesis::*;
pub use params::*;
pub use registry::*;
