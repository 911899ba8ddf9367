//! Shared layer: chain ids, address checksumming and registry literals
//!
//! `types` holds the closed `ChainId` enumeration, `utils` validates addresses
//! and produces their EIP-55 form, `constants` carries the literal wrapped and
//! native currency tables, and `error` defines `TokenError`.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use constants::*;
pub use error::*;
