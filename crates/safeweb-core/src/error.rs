// SPDX-License-Identifier: Apache-2.0

//! Error types for safeweb.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! The server binary uses `anyhow::Result` for top-level error handling.

use thiserror::Error;

use crate::hostname::HostnameRejection;

/// Errors that can occur during safeweb operations.
#[derive(Error, Debug)]
pub enum SafewebError {
    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// SQLite error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A hostname candidate failed validation.
    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] HostnameRejection),

    /// An external command did not finish within its time budget.
    #[error("Command timed out after {seconds}s")]
    CommandTimeout {
        /// Time budget that was exceeded.
        seconds: u64,
    },

    /// An external command exited with a nonzero status.
    #[error("Command failed with exit code {code:?}")]
    CommandFailed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured output of the failed command.
        output: String,
    },

    /// An external command could not be spawned or awaited.
    #[error("Failed to run command: {0}")]
    CommandSpawn(#[source] std::io::Error),
}

impl From<config::ConfigError> for SafewebError {
    fn from(err: config::ConfigError) -> Self {
        SafewebError::Config {
            message: err.to_string(),
        }
    }
}
