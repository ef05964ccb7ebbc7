//! User and friendship API endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use entities::{User, UserDraft, UserId, validation::validate_user};
use serde::Deserialize;

use super::{json_body, parse_id, today};
use crate::error::ServerResult;
use crate::state::SharedState;

/// Body of user create and update requests.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    /// Ignored on create, required on update.
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(flatten)]
    pub draft: UserDraft,
}

fn validated(payload: Result<Json<UserPayload>, JsonRejection>) -> ServerResult<UserPayload> {
    let payload = json_body(payload)?;
    validate_user(&payload.draft, today())?;
    Ok(payload)
}

/// Creates a user.
pub async fn create_user(
    State(state): State<SharedState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<User>)> {
    let payload = validated(payload)?;
    let user = state.users.create(payload.draft).await?;

    tracing::info!(user_id = %user.id, login = %user.login, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Updates a user.
pub async fn update_user(
    State(state): State<SharedState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ServerResult<Json<User>> {
    let payload = validated(payload)?;
    let user = state.users.update(payload.id, payload.draft).await?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(user))
}

/// Lists all users.
pub async fn list_users(State(state): State<SharedState>) -> ServerResult<Json<Vec<User>>> {
    Ok(Json(state.users.list().await?))
}

/// Gets a user by ID.
pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<User>> {
    let id: UserId = parse_id(&id, "user id")?;
    Ok(Json(state.users.get(id).await?))
}

/// Makes two users friends.
pub async fn add_friend(
    State(state): State<SharedState>,
    Path((id, friend_id)): Path<(String, String)>,
) -> ServerResult<StatusCode> {
    let id: UserId = parse_id(&id, "user id")?;
    let friend_id: UserId = parse_id(&friend_id, "friend id")?;

    state.users.add_friend(id, friend_id).await?;

    tracing::info!(user_id = %id, friend_id = %friend_id, "Friendship added");

    Ok(StatusCode::OK)
}

/// Ends a friendship.
pub async fn remove_friend(
    State(state): State<SharedState>,
    Path((id, friend_id)): Path<(String, String)>,
) -> ServerResult<StatusCode> {
    let id: UserId = parse_id(&id, "user id")?;
    let friend_id: UserId = parse_id(&friend_id, "friend id")?;

    state.users.remove_friend(id, friend_id).await?;

    tracing::info!(user_id = %id, friend_id = %friend_id, "Friendship removed");

    Ok(StatusCode::OK)
}

/// Lists a user's friends.
pub async fn list_friends(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Vec<User>>> {
    let id: UserId = parse_id(&id, "user id")?;
    Ok(Json(state.users.friends_of(id).await?))
}

/// Lists the friends two users share.
pub async fn common_friends(
    State(state): State<SharedState>,
    Path((id, other_id)): Path<(String, String)>,
) -> ServerResult<Json<Vec<User>>> {
    let id: UserId = parse_id(&id, "user id")?;
    let other_id: UserId = parse_id(&other_id, "other user id")?;
    Ok(Json(state.users.common_friends(id, other_id).await?))
}
