//! User and friendship orchestration.

use std::sync::Arc;

use catalog_store::{CatalogError, CatalogResult, FriendGraph, UserStore};
use entities::{User, UserDraft, UserId};

/// Resolves users and applies friendship changes.
pub struct UserService {
    users: Arc<dyn UserStore>,
    friends: Arc<dyn FriendGraph>,
}

impl UserService {
    /// Creates a user service over the given store and friendship graph.
    pub fn new(users: Arc<dyn UserStore>, friends: Arc<dyn FriendGraph>) -> Self {
        Self { users, friends }
    }

    pub async fn create(&self, draft: UserDraft) -> CatalogResult<User> {
        self.users.create_user(draft).await
    }

    /// Updates an existing user. The identity is mandatory.
    pub async fn update(&self, id: Option<UserId>, draft: UserDraft) -> CatalogResult<User> {
        let id = id.ok_or_else(|| CatalogError::invalid_argument("user id must be provided"))?;
        self.users.update_user(id, draft).await
    }

    /// Gets a user, treating absence as an error.
    pub async fn get(&self, id: UserId) -> CatalogResult<User> {
        self.users
            .get_user(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("User", id))
    }

    pub async fn list(&self) -> CatalogResult<Vec<User>> {
        self.users.list_users().await
    }

    pub async fn add_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()> {
        if user_id == friend_id {
            return Err(CatalogError::invalid_argument(
                "a user cannot befriend themselves",
            ));
        }
        self.get(user_id).await?;
        self.get(friend_id).await?;
        self.friends.add_friend(user_id, friend_id).await
    }

    pub async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()> {
        if user_id == friend_id {
            return Err(CatalogError::not_allowed(
                "a user cannot remove themselves from friends",
            ));
        }
        self.get(user_id).await?;
        self.get(friend_id).await?;
        self.friends.remove_friend(user_id, friend_id).await
    }

    /// Lists a user's friends ordered by ID.
    pub async fn friends_of(&self, user_id: UserId) -> CatalogResult<Vec<User>> {
        self.get(user_id).await?;
        self.friends.friends_of(user_id).await
    }

    /// Lists the friends two users have in common.
    pub async fn common_friends(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> CatalogResult<Vec<User>> {
        if user_id == other_id {
            return Err(CatalogError::not_allowed(
                "a user cannot have common friends with themselves",
            ));
        }
        self.get(user_id).await?;
        self.get(other_id).await?;
        self.friends.common_friends(user_id, other_id).await
    }
}
