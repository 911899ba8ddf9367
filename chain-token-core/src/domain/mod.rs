//! Domain layer - entities and the wrapped token registry
//! 
//! This module contains the value objects and the read-only registry built
//! from them.

pub mod entities;
pub mod registry;

// Re-export domain components
pub use entities::*;
pub use registry::*;
