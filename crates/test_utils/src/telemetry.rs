//! Tracing setup for tests
//!
//! Installs a subscriber that writes through the test harness so log output
//! is captured per test. `RUST_LOG` takes precedence over the given level.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initializes tracing once per test binary
///
/// # Arguments
///
/// * `log_level` - Fallback filter when `RUST_LOG` is unset (e.g. "debug")
pub fn init_test_tracing(log_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // another harness may already have installed a global subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_test_writer(),
            )
            .try_init();
    });
}
