//! Chain Token Core
//!
//! Token value objects, currency equality and the canonical wrapped-native
//! token registry for EVM chains.
//!
//! ## Architecture
//!
//! - **Domain**: `Currency`/`Token` value objects and the wrapped token registry
//! - **Shared**: chain identifiers, errors, address validation and constants
//! - **Infrastructure**: configuration and logging
//!
//! ## Usage
//!
//! ```rust
//! use chain_token_core::{currency_equals, wrapped_native_token, ChainId, Currency, Token};
//!
//! let weth = wrapped_native_token(ChainId::EthMainnet).expect("registered");
//! assert_eq!(weth.decimals(), 18);
//!
//! let usdc = Token::new(
//!     ChainId::EthMainnet,
//!     "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
//!     6,
//!     Some("USDC".to_string()),
//!     None,
//!     None,
//! )?;
//! assert!(usdc.sorts_before(weth)?);
//!
//! let ether = Currency::native(ChainId::EthMainnet);
//! assert!(!currency_equals(&ether, &Currency::from(weth.clone())));
//! # Ok::<(), chain_token_core::TokenError>(())
//! ```

pub mod domain;
pub mod shared;
pub mod infrastructure;

// Re-export domain entities
pub use domain::entities::{currency_equals, sort_pair, Currency, CurrencyInfo, NativeCurrency, Token};
pub use domain::registry::{
    address_collisions, validate_registry, wrapped_native_token, wrapped_native_token_by_id,
    wrapped_native_tokens, AddressCollision,
};

// Re-export shared types
pub use shared::error::{TokenError, TokenResult};
pub use shared::types::ChainId;
pub use shared::utils::{to_checksum_address, validate_and_parse_address};

pub use infrastructure::config::CoreConfig;

// Version information
pub use shared::constants::{DESCRIPTION, NAME, VERSION};

/// Load configuration, initialize logging and check the registry
///
/// Registry address collisions are logged; with `strict_registry` set they
/// fail initialization instead.
pub fn init() -> TokenResult<CoreConfig> {
    init_with(CoreConfig::load()?)
}

/// Initialize with an already loaded configuration
pub fn init_with(config: CoreConfig) -> TokenResult<CoreConfig> {
    config.validate()?;
    infrastructure::logger::init_logging(&config.log_level);

    if let Err(e) = validate_registry() {
        if config.strict_registry {
            log::error!("{}", e);
            return Err(e);
        }
        log::warn!("{}", e);
    }

    log::info!("{} {} initialized, default chain {}", NAME, VERSION, config.default_chain);
    Ok(config)
}
