use anyhow::{bail, Context, Result};
use chain_token_core::infrastructure::logger::init_logging;
use chain_token_core::{address_collisions, wrapped_native_tokens, CoreConfig, DESCRIPTION, NAME, VERSION};

fn main() -> Result<()> {
    let config = CoreConfig::load().context("Failed to load configuration")?;
    init_logging(&config.log_level);
    let default_chain = config
        .default_chain_id()
        .context("Invalid CHAIN_TOKEN_DEFAULT_CHAIN")?;

    println!("{} {} - {}\n", NAME, VERSION, DESCRIPTION);
    println!("Wrapped native tokens:\n");
    for token in wrapped_native_tokens() {
        let chain = token.chain_id();
        let marker = if chain == default_chain { "*" } else { " " };
        println!(
            "{} {:<18} {:>6}  {:<8} {:<18} {}  {}",
            marker,
            chain.key(),
            chain.id(),
            token.symbol().unwrap_or("-"),
            token.name().unwrap_or("-"),
            token.address(),
            token.project_link().unwrap_or("(no link)"),
        );
    }

    let collisions = address_collisions();
    if collisions.is_empty() {
        println!("\nNo shared addresses.");
        return Ok(());
    }

    println!("\nShared addresses:");
    for collision in &collisions {
        let chains: Vec<&str> = collision.chains.iter().map(|c| c.key()).collect();
        println!("  {} -> {}", collision.address, chains.join(", "));
    }

    if config.strict_registry {
        bail!("{} registry address(es) shared across chains", collisions.len());
    }
    Ok(())
}
