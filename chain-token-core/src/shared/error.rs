//! Error handling for the token core
//!
//! This module defines the error types used throughout the token core.
//! Every variant is a precondition failure reported to the caller that
//! misused the API; nothing here is retried internally.

use thiserror::Error;

use crate::shared::types::ChainId;

/// Token error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Chain mismatch: {left} and {right}")]
    ChainMismatch { left: ChainId, right: ChainId },

    #[error("Identical address: {0}")]
    IdenticalAddress(String),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Duplicate registry address: {0}")]
    DuplicateRegistryAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create an invalid address error naming the rejected input and the rule it broke
    pub fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress(format!("{} ({})", address, reason.into()))
    }

    pub fn chain_mismatch(left: ChainId, right: ChainId) -> Self {
        Self::ChainMismatch { left, right }
    }

    pub fn identical_address(address: impl Into<String>) -> Self {
        Self::IdenticalAddress(address.into())
    }

    /// Create an unknown chain error
    pub fn unknown_chain(value: impl Into<String>) -> Self {
        Self::UnknownChain(value.into())
    }

    pub fn duplicate_registry_address(message: impl Into<String>) -> Self {
        Self::DuplicateRegistryAddress(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<config::ConfigError> for TokenError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_creation() {
        let address_error = TokenError::invalid_address("0x12", "too short");
        let chain_error = TokenError::chain_mismatch(ChainId::EthMainnet, ChainId::BscMainnet);
        let config_error = TokenError::config("missing key");

        assert!(matches!(address_error, TokenError::InvalidAddress(_)));
        assert!(matches!(chain_error, TokenError::ChainMismatch { .. }));
        assert!(matches!(config_error, TokenError::Config(_)));
    }

    #[test]
    fn test_error_conversions() {
        let config_error = config::ConfigError::Message("bad value".to_string());
        let token_error: TokenError = config_error.into();

        assert!(matches!(token_error, TokenError::Config(_)));
        assert!(token_error.to_string().contains("bad value"));
    }

    #[test]
    fn test_error_display() {
        let error = TokenError::invalid_address("0x12", "too short");
        let display = format!("{}", error);

        assert!(display.contains("Invalid address"));
        assert!(display.contains("0x12"));
        assert!(display.contains("too short"));

        let mismatch = TokenError::chain_mismatch(ChainId::EthMainnet, ChainId::BscMainnet);
        assert_eq!(mismatch.to_string(), "Chain mismatch: eth_mainnet and bsc_mainnet");
    }
}
