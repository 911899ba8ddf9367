//! Currency entity for the token core
//!
//! A currency is either a chain's native coin or an ERC20 [`Token`]. The
//! fields both share live in [`CurrencyInfo`]; only tokens carry an address.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::Token;
use crate::domain::registry;
use crate::shared::constants::{NATIVE_CURRENCY_CONFIGS, NATIVE_DECIMALS};
use crate::shared::types::{ChainId, Decimals};

/// Fields common to every currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub decimals: Decimals,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl CurrencyInfo {
    pub fn new(decimals: Decimals, symbol: Option<String>, name: Option<String>) -> Self {
        Self { decimals, symbol, name }
    }
}

/// A chain's native coin, e.g. ether on Ethereum
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    chain_id: ChainId,
    #[serde(flatten)]
    info: CurrencyInfo,
}

impl NativeCurrency {
    pub fn for_chain(chain_id: ChainId) -> Self {
        let (symbol, name) = NATIVE_CURRENCY_CONFIGS
            .iter()
            .find(|config| config.chain_id == chain_id)
            .map(|config| (Some(config.symbol.to_string()), Some(config.name.to_string())))
            .unwrap_or((None, None));

        Self {
            chain_id,
            info: CurrencyInfo::new(NATIVE_DECIMALS, symbol, name),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn info(&self) -> &CurrencyInfo {
        &self.info
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn native(chain_id: ChainId) -> Self {
        Currency::Native(NativeCurrency::for_chain(chain_id))
    }

    fn info(&self) -> &CurrencyInfo {
        match self {
            Currency::Native(native) => native.info(),
            Currency::Token(token) => token.info(),
        }
    }

    pub fn decimals(&self) -> Decimals {
        self.info().decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.info().symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.info().name.as_deref()
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            Currency::Native(native) => native.chain_id(),
            Currency::Token(token) => token.chain_id(),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Native(_) => None,
        }
    }

    /// The token form of this currency: a token is its own wrapped form, a
    /// native coin maps to its chain's registered wrapped token.
    pub fn wrapped(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Native(native) => registry::wrapped_native_token(native.chain_id()),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

/// Compares two currencies for equality
///
/// Tokens compare by chain and address; a token never equals a native coin.
pub fn currency_equals(currency_a: &Currency, currency_b: &Currency) -> bool {
    match (currency_a, currency_b) {
        (Currency::Token(a), Currency::Token(b)) => a.equals(b),
        (Currency::Native(a), Currency::Native(b)) => a == b,
        _ => false,
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        currency_equals(self, other)
    }
}

impl Eq for Currency {}
