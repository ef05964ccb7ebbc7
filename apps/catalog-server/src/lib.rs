//! Reelbook catalog server.
//!
//! Serves the film and user catalogue over HTTP: entity CRUD, friendships,
//! likes and the derived views built on them.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::Router;
use catalog_store::{FilmStore, FriendGraph, LikeIndex, UserStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::services::{FilmService, UserService};
use crate::state::{AppState, SharedState};

/// Creates the application router with all routes configured.
pub fn create_app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state, wiring both services to the given stores.
pub fn create_state<U, F>(config: Config, user_store: U, film_store: F) -> SharedState
where
    U: UserStore + FriendGraph + 'static,
    F: FilmStore + LikeIndex + 'static,
{
    let user_store = Arc::new(user_store);
    let film_store = Arc::new(film_store);

    let users = UserService::new(user_store.clone(), user_store.clone());
    let films = FilmService::new(film_store.clone(), film_store, user_store);

    Arc::new(AppState::new(config, users, films))
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
