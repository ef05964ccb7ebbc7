//! Film and like API endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use entities::{Film, FilmDraft, FilmId, UserId, validation::validate_film};
use serde::Deserialize;

use super::{json_body, parse_id, today};
use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Body of film create and update requests.
#[derive(Debug, Deserialize)]
pub struct FilmPayload {
    /// Ignored on create, required on update.
    #[serde(default)]
    pub id: Option<FilmId>,
    #[serde(flatten)]
    pub draft: FilmDraft,
}

/// Query of the popular films listing.
#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

fn validated(payload: Result<Json<FilmPayload>, JsonRejection>) -> ServerResult<FilmPayload> {
    let payload = json_body(payload)?;
    validate_film(&payload.draft, today())?;
    Ok(payload)
}

fn like_ids(film_id: &str, user_id: &str) -> ServerResult<(FilmId, UserId)> {
    Ok((parse_id(film_id, "film id")?, parse_id(user_id, "user id")?))
}

/// Creates a film.
pub async fn create_film(
    State(state): State<SharedState>,
    payload: Result<Json<FilmPayload>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Film>)> {
    let payload = validated(payload)?;
    let film = state.films.create(payload.draft).await?;

    tracing::info!(film_id = %film.id, name = %film.name, "Film created");

    Ok((StatusCode::CREATED, Json(film)))
}

/// Updates a film.
pub async fn update_film(
    State(state): State<SharedState>,
    payload: Result<Json<FilmPayload>, JsonRejection>,
) -> ServerResult<Json<Film>> {
    let payload = validated(payload)?;
    let film = state.films.update(payload.id, payload.draft).await?;

    tracing::info!(film_id = %film.id, "Film updated");

    Ok(Json(film))
}

/// Lists all films.
pub async fn list_films(State(state): State<SharedState>) -> ServerResult<Json<Vec<Film>>> {
    Ok(Json(state.films.list().await?))
}

/// Gets a film by ID.
pub async fn get_film(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Film>> {
    let id: FilmId = parse_id(&id, "film id")?;
    Ok(Json(state.films.get(id).await?))
}

/// Records that a user likes a film.
pub async fn add_like(
    State(state): State<SharedState>,
    Path((film_id, user_id)): Path<(String, String)>,
) -> ServerResult<Json<Film>> {
    let (film_id, user_id) = like_ids(&film_id, &user_id)?;
    let film = state.films.add_like(film_id, user_id).await?;

    tracing::info!(film_id = %film_id, user_id = %user_id, likes = film.likes, "Like added");

    Ok(Json(film))
}

/// Withdraws a user's like.
pub async fn remove_like(
    State(state): State<SharedState>,
    Path((film_id, user_id)): Path<(String, String)>,
) -> ServerResult<Json<Film>> {
    let (film_id, user_id) = like_ids(&film_id, &user_id)?;
    let film = state.films.remove_like(film_id, user_id).await?;

    tracing::info!(film_id = %film_id, user_id = %user_id, likes = film.likes, "Like removed");

    Ok(Json(film))
}

/// Lists the most liked films.
pub async fn popular_films(
    State(state): State<SharedState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<Film>>> {
    let Query(query) = query.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
    let count = query.count.unwrap_or(state.config.popular_default_count);
    Ok(Json(state.films.popular(count).await?))
}
