//! Infrastructure layer - configuration and logging
//! 
//! This module wires the token core to its environment: configuration loading
//! and logger installation.

pub mod config;
pub mod logger;

// Re-export infrastructure components
pub use self::config::*;
pub use logger::*;
