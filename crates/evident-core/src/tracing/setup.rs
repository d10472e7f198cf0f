//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "EVIDENT_LOG";

/// Initialize the Evident tracing/logging system.
///
/// Reads `EVIDENT_LOG` for per-module log levels, e.g.
/// `EVIDENT_LOG=evident_analysis::scanner=debug,evident_analysis::registry=trace`.
///
/// Falls back to `evident=info` if `EVIDENT_LOG` is unset or invalid.
/// Output goes to stderr so the console report on stdout stays clean.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("evident=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(filter)
            .try_init();
    });
}
