// SPDX-License-Identifier: Apache-2.0

//! Shared state handed to every request handler.

use std::sync::Arc;

use safeweb_core::{AppConfig, CommandRunner, UserStore};

/// State shared by all routes. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// Executes external commands.
    pub runner: Arc<dyn CommandRunner>,
    /// User database.
    pub users: UserStore,
}

impl AppState {
    /// Bundle configuration, a command runner and a user store.
    pub fn new(config: AppConfig, runner: Arc<dyn CommandRunner>, users: UserStore) -> Self {
        Self {
            config: Arc::new(config),
            runner,
            users,
        }
    }
}
