// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for safeweb.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable,
//! which takes precedence over the `debug` setting.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for safeweb and request traces
//! safeweb serve
//!
//! # Debug output, including hostname rejection reasons
//! RUST_LOG=safeweb=debug safeweb serve
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter directives used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "safeweb=debug,tower_http=debug"
    } else {
        "safeweb=info,tower_http=info"
    }
}

/// Initialize the logging subsystem.
///
/// Must be called at most once per process.
pub fn init_logging(debug: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    /// Evaluates `check` with the default filter installed as the current subscriber.
    fn with_default_filter<T>(debug: bool, check: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(default_filter(debug)));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn default_filter_enables_binary_target() {
        // Events from the `safeweb` binary itself, e.g. the missing secret key warning.
        assert!(with_default_filter(false, || tracing::enabled!(
            target: "safeweb",
            Level::WARN
        )));
        assert!(with_default_filter(false, || tracing::enabled!(
            target: "safeweb",
            Level::INFO
        )));
    }

    #[test]
    fn default_filter_covers_library_targets() {
        assert!(with_default_filter(false, || tracing::enabled!(
            target: "safeweb_core::ping",
            Level::INFO
        )));
        assert!(with_default_filter(false, || tracing::enabled!(
            target: "safeweb_server::routes",
            Level::WARN
        )));
        assert!(!with_default_filter(false, || tracing::enabled!(
            target: "safeweb_core::ping",
            Level::DEBUG
        )));
    }

    #[test]
    fn debug_flag_enables_debug_events() {
        assert!(with_default_filter(true, || tracing::enabled!(
            target: "safeweb",
            Level::DEBUG
        )));
        assert!(with_default_filter(true, || tracing::enabled!(
            target: "safeweb_core::hostname",
            Level::DEBUG
        )));
    }

    #[test]
    fn default_filters_parse() {
        for debug in [false, true] {
            assert!(EnvFilter::try_new(default_filter(debug)).is_ok());
        }
    }
}
