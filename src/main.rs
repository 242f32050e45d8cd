//! LINC chain-profile inspector
//!
//! Selects one of the three network profiles and prints its identifying
//! constants and genesis summary.

use linc_core::chain;
use linc_core::constants::{CHAIN_NAME, COIN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let network = std::env::args().nth(1).unwrap_or_else(|| "main".to_string());
    let params = chain::select(&network)?;

    println!("{CHAIN_NAME} chain parameters");
    println!("network:          {}", params.network);
    println!("message start:    {}", hex::encode(params.message_start));
    println!("default port:     {}", params.default_port);
    println!("genesis hash:     {}", params.genesis.hash());
    println!("merkle root:      {}", params.genesis.header.merkle_root);
    println!("genesis time:     {}", params.genesis.header.time);
    println!("genesis nonce:    {}", params.genesis.header.nonce);
    println!(
        "genesis reward:   {} LINC",
        params.genesis.transactions[0].total_output_value() / COIN
    );
    println!("pow spacing:      {}s", params.consensus.pow_target_spacing);
    println!(
        "halving interval: {} blocks",
        params.consensus.subsidy_halving_interval
    );
    println!("checkpoints:      {}", params.checkpoints.checkpoints.len());
    println!("dns seeds:        {}", params.dns_seeds.len());
    println!("fixed seeds:      {}", params.fixed_seeds.len());

    Ok(())
}
