//! Logging setup
//!
//! Library code logs through the `log` facade; binaries and tests call
//! [`init_logging`] once to route it through env_logger.

use env_logger::Env;

/// Initialize env_logger with `default_filter` unless `RUST_LOG` is set.
///
/// Returns false when a logger was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_logging("debug");
        assert!(!init_logging("info"));
        log::debug!("logger initialized for tests");
    }
}
