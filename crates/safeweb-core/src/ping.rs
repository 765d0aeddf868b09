// SPDX-License-Identifier: Apache-2.0

//! Reachability check for a validated host.

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::config::PingConfig;
use crate::error::SafewebError;
use crate::hostname::Hostname;
use crate::runner::CommandRunner;

/// Builds the fixed argument list for a single ping of `host`.
///
/// The host is always the last element and always exactly one element.
#[must_use]
pub fn ping_args(host: &Hostname) -> Vec<String> {
    vec!["-c".to_string(), "1".to_string(), host.to_string()]
}

/// Pings `host` once and returns the command's standard output.
///
/// # Errors
///
/// - `CommandTimeout` if the command exceeds `settings.timeout_seconds`
/// - `CommandFailed` on a nonzero exit, carrying stdout (or stderr when
///   stdout is empty)
/// - `CommandSpawn` if the program could not be run
#[instrument(skip(runner, settings, host), fields(host = %host))]
pub async fn ping(
    runner: &dyn CommandRunner,
    settings: &PingConfig,
    host: &Hostname,
) -> Result<String, SafewebError> {
    let args = ping_args(host);
    let timeout = Duration::from_secs(settings.timeout_seconds);

    let output = runner
        .run(&settings.program, &args, timeout)
        .await
        .map_err(|err| match err {
            SafewebError::CommandTimeout { .. } => SafewebError::CommandTimeout {
                seconds: settings.timeout_seconds,
            },
            other => other,
        })?;

    if output.success {
        info!("ping succeeded");
        return Ok(output.stdout);
    }

    warn!(code = ?output.code, "ping exited with failure");
    let captured = if output.stdout.trim().is_empty() {
        output.stderr
    } else {
        output.stdout
    };
    Err(SafewebError::CommandFailed {
        code: output.code,
        output: captured,
    })
}
