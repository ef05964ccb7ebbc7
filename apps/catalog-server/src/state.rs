//! Application state.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{FilmService, UserService};

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// User and friendship operations.
    pub users: UserService,
    /// Film and like operations.
    pub films: FilmService,
}

impl AppState {
    /// Creates new application state.
    pub fn new(config: Config, users: UserService, films: FilmService) -> Self {
        Self {
            config,
            users,
            films,
        }
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;
