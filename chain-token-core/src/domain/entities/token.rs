//! Token entity for the token core

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::domain::entities::currency::CurrencyInfo;
use crate::shared::error::{TokenError, TokenResult};
use crate::shared::types::{Address, ChainId, Decimals};
use crate::shared::utils::validate_and_parse_address;

/// An ERC20 token with a unique address and some metadata
///
/// Identity is the pair (chain, checksummed address). Symbol, name, decimals
/// and project link are metadata and take no part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TokenRecord", into = "TokenRecord")]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    info: CurrencyInfo,
    project_link: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: &str,
        decimals: Decimals,
        symbol: Option<String>,
        name: Option<String>,
        project_link: Option<String>,
    ) -> TokenResult<Self> {
        let address = validate_and_parse_address(address).map_err(|e| {
            log::debug!("Rejected token on {}: {}", chain_id, e);
            e
        })?;

        Ok(Self {
            chain_id,
            address,
            info: CurrencyInfo::new(decimals, symbol, name),
            project_link,
        })
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Checksummed contract address
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn decimals(&self) -> Decimals {
        self.info.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.info.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    pub fn project_link(&self) -> Option<&str> {
        self.project_link.as_deref()
    }

    pub fn info(&self) -> &CurrencyInfo {
        &self.info
    }

    /// Returns true if the two tokens have the same chain and address
    pub fn equals(&self, other: &Token) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.chain_id == other.chain_id && self.address == other.address
    }

    /// Returns true if the address of this token sorts before the address of the other token
    ///
    /// Fails with `ChainMismatch` for tokens on different chains and with
    /// `IdenticalAddress` when both tokens share an address.
    pub fn sorts_before(&self, other: &Token) -> TokenResult<bool> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::chain_mismatch(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            return Err(TokenError::identical_address(self.address.clone()));
        }
        Ok(self.address.to_ascii_lowercase() < other.address.to_ascii_lowercase())
    }
}

/// Orders two tokens by address, lower address first
pub fn sort_pair(token_a: Token, token_b: Token) -> TokenResult<(Token, Token)> {
    if token_a.sorts_before(&token_b)? {
        Ok((token_a, token_b))
    } else {
        Ok((token_b, token_a))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// Wire form of a token; deserializing goes back through `Token::new`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRecord {
    chain_id: ChainId,
    address: Address,
    decimals: Decimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project_link: Option<String>,
}

impl TryFrom<TokenRecord> for Token {
    type Error = TokenError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        Token::new(
            record.chain_id,
            &record.address,
            record.decimals,
            record.symbol,
            record.name,
            record.project_link,
        )
    }
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            chain_id: token.chain_id,
            address: token.address,
            decimals: token.info.decimals,
            symbol: token.info.symbol,
            name: token.info.name,
            project_link: token.project_link,
        }
    }
}
