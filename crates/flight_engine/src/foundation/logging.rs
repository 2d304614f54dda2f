//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize logging inside tests
///
/// Captured by the test harness; safe to call from every test since repeat
/// initialization is ignored.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
