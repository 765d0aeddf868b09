// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for safeweb.
//!
//! Uses clap's derive API. Flags given here override the loaded configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// safeweb - injection-safe demo web service.
///
/// Serves a hostname-checked ping route and parameterised user lookups.
#[derive(Parser)]
#[command(name = "safeweb")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.config/safeweb/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides `app.debug`)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Check whether a hostname would be accepted by the ping route
    CheckHost {
        /// Hostname candidate to check
        candidate: String,
    },

    /// Add a user to the database and print its id
    SeedUser(SeedUserArgs),
}

/// Arguments for `serve`.
#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides `server.port`)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Arguments for `seed-user`.
#[derive(Args)]
pub struct SeedUserArgs {
    /// User name
    pub name: String,

    /// Optional email address
    #[arg(long)]
    pub email: Option<String>,
}
