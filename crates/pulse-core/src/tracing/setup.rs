//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-module log directives.
pub const LOG_ENV_VAR: &str = "PULSE_LOG";

/// Filter used when `PULSE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pulse=info";

/// Build the log filter from `PULSE_LOG`, falling back to `pulse=info`.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the Pulse tracing/logging system.
///
/// Reads the `PULSE_LOG` environment variable for per-module log levels.
/// Format: `PULSE_LOG=pulse_analytics::forecast=debug,pulse_analytics::trend=info`
///
/// Falls back to `pulse=info` if `PULSE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber. Hosts that
/// install their own subscriber should not call this.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = build_filter();

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
