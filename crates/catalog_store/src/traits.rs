//! Storage capability traits.
//!
//! Each relation and each entity kind is exposed as its own capability so the
//! service layer can be wired to any backing implementation.

use async_trait::async_trait;
use entities::{Film, FilmDraft, FilmId, User, UserDraft, UserId};

use crate::CatalogResult;

/// Storage for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a new user under a freshly assigned identity.
    async fn create_user(&self, draft: UserDraft) -> CatalogResult<User>;

    /// Copies the draft's fields onto an existing user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> CatalogResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> CatalogResult<Option<User>>;

    /// Lists all users ordered by ID.
    async fn list_users(&self) -> CatalogResult<Vec<User>>;
}

/// Symmetric friendship relation between users.
#[async_trait]
pub trait FriendGraph: Send + Sync {
    /// Records a friendship in both directions.
    async fn add_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()>;

    /// Removes a friendship in both directions. Missing edges are ignored.
    async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()>;

    /// Lists the friends of a user ordered by ID.
    async fn friends_of(&self, user_id: UserId) -> CatalogResult<Vec<User>>;

    /// Lists the users who are friends with both users, ordered by ID.
    async fn common_friends(&self, user_id: UserId, other_id: UserId) -> CatalogResult<Vec<User>>;
}

/// Storage for film records.
#[async_trait]
pub trait FilmStore: Send + Sync {
    /// Creates a new film under a freshly assigned identity.
    async fn create_film(&self, draft: FilmDraft) -> CatalogResult<Film>;

    /// Replaces the mutable fields of an existing film.
    async fn update_film(&self, id: FilmId, draft: FilmDraft) -> CatalogResult<Film>;

    /// Gets a film by ID.
    async fn get_film(&self, id: FilmId) -> CatalogResult<Option<Film>>;

    /// Lists all films ordered by ID.
    async fn list_films(&self) -> CatalogResult<Vec<Film>>;
}

/// Which users liked which films.
#[async_trait]
pub trait LikeIndex: Send + Sync {
    /// Records a like and returns the film with its updated like count.
    async fn add_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film>;

    /// Removes a like and returns the film with its updated like count.
    async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film>;

    /// Lists liked films by descending like count, at most `limit` of them.
    async fn popular_films(&self, limit: usize) -> CatalogResult<Vec<Film>>;
}
