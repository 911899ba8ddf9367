use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::TokenError;

// Basic types for token operations
pub type Address = String;
pub type Decimals = u8;

// Chain types - every chain with a canonical wrapped native token
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ChainId {
    BscTestnet,
    BitgertMainnet,
    BscMainnet,
    GatechainMainnet,
    OmaxMainnet,
    WanchainMainnet,
    OkxMainnet,
    EthMainnet,
    MaticMainnet,
    TelosMainnet,
    AstarMainnet,
}

impl ChainId {
    pub const ALL: [ChainId; 11] = [
        ChainId::BscTestnet,
        ChainId::BitgertMainnet,
        ChainId::BscMainnet,
        ChainId::GatechainMainnet,
        ChainId::OmaxMainnet,
        ChainId::WanchainMainnet,
        ChainId::OkxMainnet,
        ChainId::EthMainnet,
        ChainId::MaticMainnet,
        ChainId::TelosMainnet,
        ChainId::AstarMainnet,
    ];

    /// EVM chain id (EIP-155)
    pub fn id(&self) -> u64 {
        match self {
            ChainId::BscTestnet => 97,
            ChainId::BitgertMainnet => 32520,
            ChainId::BscMainnet => 56,
            ChainId::GatechainMainnet => 86,
            ChainId::OmaxMainnet => 311,
            ChainId::WanchainMainnet => 888,
            ChainId::OkxMainnet => 66,
            ChainId::EthMainnet => 1,
            ChainId::MaticMainnet => 137,
            ChainId::TelosMainnet => 40,
            ChainId::AstarMainnet => 592,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::BscTestnet => "BNB Smart Chain Testnet",
            ChainId::BitgertMainnet => "Bitgert",
            ChainId::BscMainnet => "BNB Smart Chain",
            ChainId::GatechainMainnet => "GateChain",
            ChainId::OmaxMainnet => "OMAX Chain",
            ChainId::WanchainMainnet => "Wanchain",
            ChainId::OkxMainnet => "OKXChain",
            ChainId::EthMainnet => "Ethereum",
            ChainId::MaticMainnet => "Polygon",
            ChainId::TelosMainnet => "Telos EVM",
            ChainId::AstarMainnet => "Astar",
        }
    }

    /// Stable snake_case key used in configuration and serialized forms
    pub fn key(&self) -> &'static str {
        match self {
            ChainId::BscTestnet => "bsc_testnet",
            ChainId::BitgertMainnet => "bitgert_mainnet",
            ChainId::BscMainnet => "bsc_mainnet",
            ChainId::GatechainMainnet => "gatechain_mainnet",
            ChainId::OmaxMainnet => "omax_mainnet",
            ChainId::WanchainMainnet => "wanchain_mainnet",
            ChainId::OkxMainnet => "okx_mainnet",
            ChainId::EthMainnet => "eth_mainnet",
            ChainId::MaticMainnet => "matic_mainnet",
            ChainId::TelosMainnet => "telos_mainnet",
            ChainId::AstarMainnet => "astar_mainnet",
        }
    }

    pub fn from_id(id: u64) -> Option<ChainId> {
        ChainId::ALL.iter().copied().find(|chain| chain.id() == id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<u64> for ChainId {
    type Error = TokenError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ChainId::from_id(id).ok_or_else(|| TokenError::unknown_chain(id.to_string()))
    }
}

/// Accepts either the snake_case key or the decimal chain id
impl FromStr for ChainId {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(chain) = ChainId::ALL
            .iter()
            .copied()
            .find(|chain| chain.key().eq_ignore_ascii_case(trimmed))
        {
            return Ok(chain);
        }
        match trimmed.parse::<u64>() {
            Ok(id) => ChainId::try_from(id),
            Err(_) => Err(TokenError::unknown_chain(trimmed)),
        }
    }
}
