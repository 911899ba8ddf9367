//! Domain entities and value objects
//! 
//! This module contains the core domain entities and value objects
//! that represent currencies and tokens.

pub mod currency;
pub mod token;

// Re-export entities
pub use currency::*;
pub use token::*;
