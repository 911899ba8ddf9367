//! Canonical wrapped-native token registry
//!
//! Maps each chain to the ERC20 token wrapping its native coin. The map is
//! built once from `WRAPPED_TOKEN_CONFIGS` on first access and never changes
//! afterwards, so lookups need no synchronization.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::token::Token;
use crate::shared::constants::{TokenConfig, WRAPPED_TOKEN_CONFIGS};
use crate::shared::error::{TokenError, TokenResult};
use crate::shared::types::ChainId;

lazy_static! {
    static ref WRAPPED_TOKENS: HashMap<ChainId, Token> = build_registry(WRAPPED_TOKEN_CONFIGS);
}

fn build_registry(configs: &[TokenConfig]) -> HashMap<ChainId, Token> {
    let mut tokens = HashMap::with_capacity(configs.len());
    for config in configs {
        let token = Token::new(
            config.chain_id,
            config.address,
            config.decimals,
            Some(config.symbol.to_string()),
            Some(config.name.to_string()),
            Some(config.project_link.to_string()),
        );
        match token {
            Ok(token) => {
                tokens.insert(config.chain_id, token);
            }
            Err(e) => log::error!("Skipping wrapped token for {}: {}", config.chain_id, e),
        }
    }

    for collision in find_collisions(tokens.values()) {
        log::warn!("Wrapped token address {} is shared by {:?}", collision.address, collision.chains);
    }
    log::debug!("Wrapped token registry built with {} entries", tokens.len());

    tokens
}

/// The canonical wrapped native token for a chain
pub fn wrapped_native_token(chain_id: ChainId) -> Option<&'static Token> {
    WRAPPED_TOKENS.get(&chain_id)
}

/// Lookup by numeric EVM chain id; unknown ids yield `None`
pub fn wrapped_native_token_by_id(id: u64) -> Option<&'static Token> {
    ChainId::from_id(id).and_then(wrapped_native_token)
}

/// Every registered token in `ChainId::ALL` order
pub fn wrapped_native_tokens() -> impl Iterator<Item = &'static Token> {
    ChainId::ALL.into_iter().filter_map(wrapped_native_token)
}

/// A contract address registered for more than one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressCollision {
    pub address: String,
    pub chains: Vec<ChainId>,
}

fn find_collisions<'a>(tokens: impl Iterator<Item = &'a Token>) -> Vec<AddressCollision> {
    let mut by_address: BTreeMap<&str, Vec<ChainId>> = BTreeMap::new();
    for token in tokens {
        by_address.entry(token.address()).or_default().push(token.chain_id());
    }

    by_address
        .into_iter()
        .filter(|(_, chains)| chains.len() > 1)
        .map(|(address, mut chains)| {
            chains.sort();
            AddressCollision { address: address.to_string(), chains }
        })
        .collect()
}

/// Addresses shared by more than one chain in the registry
pub fn address_collisions() -> Vec<AddressCollision> {
    find_collisions(wrapped_native_tokens())
}

/// Fails if any wrapped token address is registered for more than one chain
pub fn validate_registry() -> TokenResult<()> {
    let collisions = address_collisions();
    if collisions.is_empty() {
        return Ok(());
    }

    let report = collisions
        .iter()
        .map(|c| {
            let chains: Vec<&str> = c.chains.iter().map(|chain| chain.key()).collect();
            format!("{} on {}", c.address, chains.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ");
    Err(TokenError::duplicate_registry_address(report))
}
