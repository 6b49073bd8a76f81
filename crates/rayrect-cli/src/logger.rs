//! Logger initialization for the test suite runner.

use env_logger::Env;

/// Initialize the logger at Info level unless `RUST_LOG` overrides it.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
