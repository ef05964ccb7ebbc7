//! In-memory film store and like index.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use entities::{Film, FilmDraft, FilmId, UserId};
use tokio::sync::RwLock;

use super::table::EntityTable;
use crate::{CatalogError, CatalogResult, FilmStore, LikeIndex};

/// Films plus the users who liked them.
///
/// A film with no likes has no entry in `likes`, and every film's cached
/// `likes` count equals the size of its entry.
#[derive(Debug, Default)]
struct FilmTable {
    films: EntityTable<Film>,
    likes: HashMap<FilmId, BTreeSet<UserId>>,
}

impl FilmTable {
    fn film_mut(&mut self, id: FilmId) -> CatalogResult<&mut Film> {
        self.films
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found("Film", id))
    }
}

/// In-memory film store that also owns the like relation.
#[derive(Debug, Default, Clone)]
pub struct MemoryFilmStore {
    inner: Arc<RwLock<FilmTable>>,
}

impl MemoryFilmStore {
    /// Creates a new in-memory film store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilmStore for MemoryFilmStore {
    async fn create_film(&self, draft: FilmDraft) -> CatalogResult<Film> {
        let mut table = self.inner.write().await;
        let film = table.films.insert_new(|id| Film::from_draft(id, draft)).clone();
        tracing::debug!(film_id = %film.id, "Film stored");
        Ok(film)
    }

    async fn update_film(&self, id: FilmId, draft: FilmDraft) -> CatalogResult<Film> {
        let mut table = self.inner.write().await;
        let film = table.film_mut(id)?;
        film.apply(draft);
        Ok(film.clone())
    }

    async fn get_film(&self, id: FilmId) -> CatalogResult<Option<Film>> {
        let table = self.inner.read().await;
        Ok(table.films.get(id).cloned())
    }

    async fn list_films(&self) -> CatalogResult<Vec<Film>> {
        let table = self.inner.read().await;
        Ok(table.films.values().cloned().collect())
    }
}

#[async_trait]
impl LikeIndex for MemoryFilmStore {
    async fn add_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film> {
        let mut table = self.inner.write().await;
        if !table.films.contains(film_id) {
            return Err(CatalogError::not_found("Film", film_id));
        }

        if !table.likes.entry(film_id).or_default().insert(user_id) {
            tracing::debug!(%film_id, %user_id, "Like already recorded");
            return Err(CatalogError::conflict(format!(
                "user {user_id} already liked film {film_id}"
            )));
        }

        let film = table.film_mut(film_id)?;
        film.likes += 1;
        Ok(film.clone())
    }

    async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> CatalogResult<Film> {
        let mut table = self.inner.write().await;
        if !table.films.contains(film_id) {
            return Err(CatalogError::not_found("Film", film_id));
        }

        let Some(users) = table.likes.get_mut(&film_id) else {
            tracing::debug!(%film_id, "Film has no likes to remove");
            return Err(CatalogError::conflict(format!(
                "film {film_id} has no likes"
            )));
        };
        if !users.remove(&user_id) {
            return Err(CatalogError::conflict(format!(
                "user {user_id} has not liked film {film_id}"
            )));
        }
        if users.is_empty() {
            table.likes.remove(&film_id);
        }

        let film = table.film_mut(film_id)?;
        film.likes = film.likes.saturating_sub(1);
        Ok(film.clone())
    }

    async fn popular_films(&self, limit: usize) -> CatalogResult<Vec<Film>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let table = self.inner.read().await;
        let mut films: Vec<Film> = table
            .films
            .values()
            .filter(|f| f.likes > 0)
            .cloned()
            .collect();

        films.sort_by(|a, b| b.likes.cmp(&a.likes).then(a.id.cmp(&b.id)));
        films.truncate(limit);
        Ok(films)
    }
}
