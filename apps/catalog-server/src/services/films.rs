//! Film and like orchestration.

use std::sync::Arc;

use catalog_store::{CatalogError, CatalogResult, FilmStore, LikeIndex, UserStore};
use entities::{Film, FilmDraft, FilmId, UserId};

/// Resolves films and users before touching the like index.
pub struct FilmService {
    films: Arc<dyn FilmStore>,
    likes: Arc<dyn LikeIndex>,
    users: Arc<dyn UserStore>,
}

impl FilmService {
    /// Creates a film service over the given stores and like index.
    pub fn new(
        films: Arc<dyn FilmStore>,
        likes: Arc<dyn LikeIndex>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            films,
            likes,
            users,
        }
    }

    pub async fn create(&self, draft: FilmDraft) -> CatalogResult<Film> {
        self.films.create_film(draft).await
    }

    /// Updates an existing film. The identity is mandatory.
    pub async fn update(&self, id: Option<FilmId>, draft: FilmDraft) -> CatalogResult<Film> {
        let id = id.ok_or_else(|| CatalogError::invalid_argument("film id must be provided"))?;
        self.films.update_film(id, draft).await
    }

    /// Gets a film, treating absence as an error.
    pub async fn get(&self, id: FilmId) -> CatalogResult<Film> {
        self.films
            .get_film(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Film", id))
    }

    pub async fn list(&self) -> CatalogResult<Vec<Film>> {
        self.films.list_films().await
    }

    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film> {
        self.ensure_exists(film_id, user_id).await?;
        self.likes.add_like(film_id, user_id).await
    }

    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film> {
        self.ensure_exists(film_id, user_id).await?;
        self.likes.remove_like(film_id, user_id).await
    }

    /// Lists the most liked films. A negative count is rejected.
    pub async fn popular(&self, count: i64) -> CatalogResult<Vec<Film>> {
        let limit = usize::try_from(count).map_err(|_| {
            CatalogError::invalid_argument(format!("count must not be negative, got {count}"))
        })?;
        self.likes.popular_films(limit).await
    }

    async fn ensure_exists(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<()> {
        self.get(film_id).await?;
        if self.users.get_user(user_id).await?.is_none() {
            return Err(CatalogError::not_found("User", user_id));
        }
        Ok(())
    }
}
