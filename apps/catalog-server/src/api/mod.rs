//! API endpoints.

pub mod films;
pub mod users;

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, put},
};
use chrono::{Local, NaiveDate};

use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        // User endpoints
        .route(
            "/users",
            get(users::list_users)
                .post(users::create_user)
                .put(users::update_user),
        )
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/friends", get(users::list_friends))
        .route(
            "/users/:id/friends/:friend_id",
            put(users::add_friend).delete(users::remove_friend),
        )
        .route(
            "/users/:id/friends/common/:other_id",
            get(users::common_friends),
        )
        // Film endpoints
        .route(
            "/films",
            get(films::list_films)
                .post(films::create_film)
                .put(films::update_film),
        )
        .route("/films/popular", get(films::popular_films))
        .route("/films/:id", get(films::get_film))
        .route(
            "/films/:id/like/:user_id",
            put(films::add_like).delete(films::remove_like),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Parses an identity taken from the request path.
fn parse_id<T: FromStr>(raw: &str, name: &str) -> ServerResult<T> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest(format!("Invalid {name}: {raw}")))
}

/// Unwraps a JSON body, reporting decode failures in the server error format.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))
}

/// Current local date, the upper bound for birthdays and release dates.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
