//! Runtime configuration for the token core
//!
//! Values come from `CHAIN_TOKEN_*` environment variables, after an optional
//! `.env` file has been loaded. Every key has a default.

use ::config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::shared::constants::{CONFIG_ENV_PREFIX, DEFAULT_CHAIN_KEY, DEFAULT_LOG_LEVEL};
use crate::shared::error::TokenResult;
use crate::shared::types::ChainId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// Chain key or numeric id, e.g. `eth_mainnet` or `1`
    pub default_chain: String,
    /// env_logger filter, e.g. `info` or `chain_token_core=debug`
    pub log_level: String,
    /// Treat registry address collisions as fatal
    pub strict_registry: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_chain: DEFAULT_CHAIN_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            strict_registry: false,
        }
    }
}

impl CoreConfig {
    /// Load from `.env` and the process environment
    pub fn load() -> TokenResult<Self> {
        dotenv::dotenv().ok();
        Self::from_env_prefix(CONFIG_ENV_PREFIX)
    }

    /// Load from environment variables named `<prefix>_<KEY>`
    pub fn from_env_prefix(prefix: &str) -> TokenResult<Self> {
        let defaults = CoreConfig::default();
        let settings = Config::builder()
            .set_default("default_chain", defaults.default_chain)?
            .set_default("log_level", defaults.log_level)?
            .set_default("strict_registry", defaults.strict_registry)?
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?;

        let config: CoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_chain_id(&self) -> TokenResult<ChainId> {
        self.default_chain.parse()
    }

    pub fn validate(&self) -> TokenResult<()> {
        self.default_chain_id()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::TokenError;
    use std::env;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::from_env_prefix("CHAIN_TOKEN_TEST_DEFAULTS")
            .expect("Failed to load default config");
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.default_chain_id(), Ok(ChainId::EthMainnet));
    }

    #[test]
    fn test_environment_overrides() {
        env::set_var("CHAIN_TOKEN_TEST_OVERRIDES_DEFAULT_CHAIN", "bsc_mainnet");
        env::set_var("CHAIN_TOKEN_TEST_OVERRIDES_LOG_LEVEL", "debug");
        env::set_var("CHAIN_TOKEN_TEST_OVERRIDES_STRICT_REGISTRY", "true");

        let config = CoreConfig::from_env_prefix("CHAIN_TOKEN_TEST_OVERRIDES")
            .expect("Failed to load config");
        assert_eq!(config.default_chain_id(), Ok(ChainId::BscMainnet));
        assert_eq!(config.log_level, "debug");
        assert!(config.strict_registry);
    }

    #[test]
    fn test_numeric_default_chain() {
        env::set_var("CHAIN_TOKEN_TEST_NUMERIC_DEFAULT_CHAIN", "137");

        let config = CoreConfig::from_env_prefix("CHAIN_TOKEN_TEST_NUMERIC")
            .expect("Failed to load config");
        assert_eq!(config.default_chain_id(), Ok(ChainId::MaticMainnet));
    }

    #[test]
    fn test_unknown_default_chain_is_rejected() {
        env::set_var("CHAIN_TOKEN_TEST_UNKNOWN_DEFAULT_CHAIN", "solana");

        let result = CoreConfig::from_env_prefix("CHAIN_TOKEN_TEST_UNKNOWN");
        assert!(matches!(result, Err(TokenError::UnknownChain(_))));
    }
}
