// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # safeweb core
//!
//! Core library for the safeweb service: the injection-safe building blocks
//! behind its HTTP routes.
//!
//! This crate provides:
//! - Hostname validation before anything reaches an external command
//! - A `ping` operation that never involves a shell
//! - Parameterised user lookups over SQLite
//! - Layered configuration with a redacted secret key
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safeweb_core::{Hostname, TokioRunner, load_config, ping};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! let config = load_config()?;
//! let host = Hostname::parse("localhost")?;
//! let output = ping(&TokioRunner, &config.ping, &host).await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`hostname`] - Hostname validation
//! - [`ping`] - Ping a validated host
//! - [`runner`] - External process execution
//! - [`users`] - User database
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::SafewebError;

/// Convenience Result type for safeweb operations.
///
/// This is equivalent to `std::result::Result<T, SafewebError>`.
pub type Result<T> = std::result::Result<T, SafewebError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, AppSettings, DatabaseConfig, PingConfig, ServerConfig, config_dir,
    config_file_path, load_config, load_config_from,
};

// ============================================================================
// Validation
// ============================================================================

pub use hostname::{Hostname, HostnameRejection, check_hostname, is_valid_hostname};

// ============================================================================
// Execution
// ============================================================================

pub use ping::{ping, ping_args};
pub use runner::{CommandOutput, CommandRunner, TokioRunner};

// ============================================================================
// Storage
// ============================================================================

pub use users::{User, UserStore};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod hostname;
pub mod ping;
pub mod runner;
pub mod users;
