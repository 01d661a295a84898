//! Tracing subscriber setup

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once per process.
///
/// `RUST_LOG` takes precedence over `level`. Events go to stderr so program
/// output on stdout stays clean.
pub fn init_tracing(level: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
