// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the safeweb server.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use safeweb_core::{DatabaseConfig, TokioRunner, UserStore, check_hostname, load_config_from};
use safeweb_server::cli::{Cli, Commands, SeedUserArgs, ServeArgs};
use safeweb_server::{AppState, logging};
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = load_config_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    config.app.debug |= cli.debug;
    logging::init_logging(config.app.debug);
    debug!("Configuration loaded successfully");

    match cli.command {
        Commands::CheckHost { candidate } => Ok(check_host(&candidate)),
        Commands::SeedUser(SeedUserArgs { name, email }) => {
            let users = open_users(&config.database).await?;
            let id = users
                .insert(&name, email.as_deref())
                .await
                .context("Failed to insert user")?;
            println!("{id}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Serve(ServeArgs { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if config.app.secret_key.is_none() {
                warn!("No secret key configured; set SAFEWEB_APP__SECRET_KEY");
            }

            let users = open_users(&config.database).await?;

            let (host, port) = (config.server.host.clone(), config.server.port);
            let state = AppState::new(config, Arc::new(TokioRunner), users);
            safeweb_server::run_http(state, &host, port).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn open_users(settings: &DatabaseConfig) -> Result<UserStore> {
    UserStore::connect(settings).await.with_context(|| {
        format!(
            "Failed to open user database at {}",
            settings.path.display()
        )
    })
}

fn check_host(candidate: &str) -> ExitCode {
    match check_hostname(candidate) {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(reason) => {
            println!("invalid: {reason}");
            ExitCode::FAILURE
        }
    }
}
