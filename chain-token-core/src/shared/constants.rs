//! Constants for the token core
//!
//! This module contains all constants used throughout the token core,
//! including the literal wrapped-native token table the registry is built from.

use crate::shared::types::ChainId;

// Address constants
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_HEX_LENGTH: usize = 40;
pub const ADDRESS_BYTE_LENGTH: usize = 20;

pub const NATIVE_DECIMALS: u8 = 18;

// Configuration
pub const CONFIG_ENV_PREFIX: &str = "CHAIN_TOKEN";
pub const DEFAULT_CHAIN_KEY: &str = "eth_mainnet";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Token configurations
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub chain_id: ChainId,
    pub address: &'static str,
    pub decimals: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub project_link: &'static str,
}

// Native currency configurations
#[derive(Debug, Clone)]
pub struct NativeCurrencyConfig {
    pub chain_id: ChainId,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub static WRAPPED_TOKEN_CONFIGS: &[TokenConfig] = &[
    TokenConfig {
        chain_id: ChainId::BscTestnet,
        address: "0x69c5207A60C8e34311E44A2E10afa0CB4dbFC8df",
        decimals: 18,
        symbol: "WtBNB",
        name: "Wrapped tBNB",
        project_link: "https://www.binance.org",
    },
    TokenConfig {
        chain_id: ChainId::BitgertMainnet,
        address: "0xD75411C6A3fEf2278E51EEaa73cdE8352c59eFEd",
        decimals: 18,
        symbol: "WBRISE",
        name: "Wrapped Brise",
        project_link: "https://bitgert.com",
    },
    TokenConfig {
        chain_id: ChainId::BscMainnet,
        address: "0x2F856544d28c793F4461CE639709AA8C01D12745",
        decimals: 18,
        symbol: "WBNB",
        name: "Wrapped BNB",
        project_link: "https://www.binance.org",
    },
    TokenConfig {
        chain_id: ChainId::GatechainMainnet,
        address: "0x5CaD84E500d73A9bcCdeB21eDD9720FFb7531c56",
        decimals: 18,
        symbol: "WGATE",
        name: "Wrapped Gatecoin",
        project_link: "https://www.gatechain.io",
    },
    TokenConfig {
        chain_id: ChainId::OmaxMainnet,
        address: "0x2e19F01B81628CCd8cFce9F7d9F2fACC77343b7c",
        decimals: 18,
        symbol: "WOMAX",
        name: "Wrapped OMAX",
        project_link: "https://www.omaxcoin.com",
    },
    // Same literal as OMAX; reported by registry::address_collisions
    TokenConfig {
        chain_id: ChainId::WanchainMainnet,
        address: "0x2e19F01B81628CCd8cFce9F7d9F2fACC77343b7c",
        decimals: 18,
        symbol: "WWAN",
        name: "Wrapped WAN",
        project_link: "https://www.wanchain.org",
    },
    TokenConfig {
        chain_id: ChainId::OkxMainnet,
        address: "0xf886ABaCe837E5EC0CF7037B4d2198F7a1bf35B5",
        decimals: 18,
        symbol: "WOKX",
        name: "Wrapped OKX",
        project_link: "https://www.okx.com",
    },
    TokenConfig {
        chain_id: ChainId::EthMainnet,
        address: "0xfbAE861cbDFBB11AC0bC64c27AE7fEd3f99B8737",
        decimals: 18,
        symbol: "WETH",
        name: "Wrapped Ether",
        project_link: "https://ethereum.org",
    },
    TokenConfig {
        chain_id: ChainId::MaticMainnet,
        address: "0x15EDEa3D3b4C59E8d76B8BF9374ed4f60F58e3b7",
        decimals: 18,
        symbol: "WMATIC",
        name: "Wrapped Matic",
        project_link: "https://polygon.technology",
    },
    TokenConfig {
        chain_id: ChainId::TelosMainnet,
        address: "0x61F2ddAa57B328feE381D13D2E0E91C604a43fF7",
        decimals: 18,
        symbol: "WTLOS",
        name: "Wrapped Telos",
        project_link: "https://telos.net",
    },
    // Same literal as Ethereum; reported by registry::address_collisions
    TokenConfig {
        chain_id: ChainId::AstarMainnet,
        address: "0xfbAE861cbDFBB11AC0bC64c27AE7fEd3f99B8737",
        decimals: 18,
        symbol: "WASTR",
        name: "Wrapped Astar",
        project_link: "https://astar.network",
    },
];

pub static NATIVE_CURRENCY_CONFIGS: &[NativeCurrencyConfig] = &[
    NativeCurrencyConfig { chain_id: ChainId::BscTestnet, symbol: "tBNB", name: "Test BNB" },
    NativeCurrencyConfig { chain_id: ChainId::BitgertMainnet, symbol: "BRISE", name: "Brise" },
    NativeCurrencyConfig { chain_id: ChainId::BscMainnet, symbol: "BNB", name: "BNB" },
    NativeCurrencyConfig { chain_id: ChainId::GatechainMainnet, symbol: "GT", name: "GateToken" },
    NativeCurrencyConfig { chain_id: ChainId::OmaxMainnet, symbol: "OMAX", name: "OMAX" },
    NativeCurrencyConfig { chain_id: ChainId::WanchainMainnet, symbol: "WAN", name: "Wancoin" },
    NativeCurrencyConfig { chain_id: ChainId::OkxMainnet, symbol: "OKT", name: "OKT" },
    NativeCurrencyConfig { chain_id: ChainId::EthMainnet, symbol: "ETH", name: "Ether" },
    NativeCurrencyConfig { chain_id: ChainId::MaticMainnet, symbol: "MATIC", name: "Matic" },
    NativeCurrencyConfig { chain_id: ChainId::TelosMainnet, symbol: "TLOS", name: "Telos" },
    NativeCurrencyConfig { chain_id: ChainId::AstarMainnet, symbol: "ASTR", name: "Astar" },
];

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_has_one_wrapped_config() {
        for chain in ChainId::ALL {
            let count = WRAPPED_TOKEN_CONFIGS.iter().filter(|c| c.chain_id == chain).count();
            assert_eq!(count, 1, "{} should have exactly one wrapped token", chain);
        }
        assert_eq!(WRAPPED_TOKEN_CONFIGS.len(), ChainId::ALL.len());
    }

    #[test]
    fn test_every_chain_has_one_native_config() {
        for chain in ChainId::ALL {
            let count = NATIVE_CURRENCY_CONFIGS.iter().filter(|c| c.chain_id == chain).count();
            assert_eq!(count, 1, "{} should have exactly one native currency", chain);
        }
    }

    #[test]
    fn test_wrapped_configs_use_eighteen_decimals() {
        assert!(WRAPPED_TOKEN_CONFIGS.iter().all(|c| c.decimals == NATIVE_DECIMALS));
    }

    #[test]
    fn test_address_constants() {
        assert_eq!(ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH, 42);
        assert_eq!(ADDRESS_BYTE_LENGTH * 2, ADDRESS_HEX_LENGTH);
    }
}
