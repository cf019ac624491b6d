//! Unified test logging initialization.
//!
//! Single source of truth for test logging that works for both unit and
//! integration tests; a one-time guard prevents double initialization.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The log level is taken from `TEST_LOG`,
/// falling back to `RUST_LOG`, defaulting to `warn`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest output capture
            .without_time()
            .try_init()
            .ok(); // never panic if something else already initialized
    });
}
