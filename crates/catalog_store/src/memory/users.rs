//! In-memory user store and friendship graph.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use entities::{User, UserDraft, UserId};
use tokio::sync::RwLock;

use super::table::EntityTable;
use crate::{CatalogError, CatalogResult, FriendGraph, UserStore};

#[derive(Debug, Default)]
struct UserTable {
    users: EntityTable<User>,
    friends: HashMap<UserId, BTreeSet<UserId>>,
}

impl UserTable {
    /// Rejects an email or login already held by a user other than `except`.
    fn ensure_unique(&self, draft: &UserDraft, except: Option<UserId>) -> CatalogResult<()> {
        for user in self.users.values() {
            if Some(user.id) == except {
                continue;
            }
            if user.email == draft.email {
                tracing::warn!(email = %draft.email, "Email already registered");
                return Err(CatalogError::conflict(format!(
                    "email {} is already registered",
                    draft.email
                )));
            }
            if user.login == draft.login {
                tracing::warn!(login = %draft.login, "Login already taken");
                return Err(CatalogError::conflict(format!(
                    "login {} is already taken",
                    draft.login
                )));
            }
        }
        Ok(())
    }

    fn ensure_exists(&self, id: UserId) -> CatalogResult<()> {
        if self.users.contains(id) {
            Ok(())
        } else {
            Err(CatalogError::not_found("User", id))
        }
    }

    fn friend_ids(&self, id: UserId) -> Option<&BTreeSet<UserId>> {
        self.friends.get(&id)
    }

    fn materialize<'a>(&self, ids: impl Iterator<Item = &'a UserId>) -> Vec<User> {
        ids.filter_map(|id| self.users.get(*id).cloned()).collect()
    }
}

/// In-memory user store that also owns the friendship relation.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<UserTable>>,
}

impl MemoryUserStore {
    /// Creates a new in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, draft: UserDraft) -> CatalogResult<User> {
        let mut table = self.inner.write().await;
        table.ensure_unique(&draft, None)?;
        let user = table.users.insert_new(|id| User::from_draft(id, draft)).clone();
        tracing::debug!(user_id = %user.id, "User stored");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> CatalogResult<User> {
        let mut table = self.inner.write().await;
        table.ensure_exists(id)?;
        table.ensure_unique(&draft, Some(id))?;
        let user = table
            .users
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found("User", id))?;
        user.apply(draft);
        Ok(user.clone())
    }

    async fn get_user(&self, id: UserId) -> CatalogResult<Option<User>> {
        let table = self.inner.read().await;
        Ok(table.users.get(id).cloned())
    }

    async fn list_users(&self) -> CatalogResult<Vec<User>> {
        let table = self.inner.read().await;
        Ok(table.users.values().cloned().collect())
    }
}

#[async_trait]
impl FriendGraph for MemoryUserStore {
    async fn add_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()> {
        if user_id == friend_id {
            return Err(CatalogError::invalid_argument(
                "a user cannot befriend themselves",
            ));
        }

        let mut table = self.inner.write().await;
        table.ensure_exists(user_id)?;
        table.ensure_exists(friend_id)?;

        if table
            .friend_ids(user_id)
            .is_some_and(|ids| ids.contains(&friend_id))
        {
            tracing::debug!(%user_id, %friend_id, "Friendship already exists");
            return Err(CatalogError::conflict(format!(
                "users {user_id} and {friend_id} are already friends"
            )));
        }

        table.friends.entry(user_id).or_default().insert(friend_id);
        table.friends.entry(friend_id).or_default().insert(user_id);
        Ok(())
    }

    async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> CatalogResult<()> {
        let mut table = self.inner.write().await;

        for (from, to) in [(user_id, friend_id), (friend_id, user_id)] {
            if let Some(ids) = table.friends.get_mut(&from) {
                ids.remove(&to);
                if ids.is_empty() {
                    table.friends.remove(&from);
                }
            }
        }
        Ok(())
    }

    async fn friends_of(&self, user_id: UserId) -> CatalogResult<Vec<User>> {
        let table = self.inner.read().await;
        Ok(match table.friend_ids(user_id) {
            Some(ids) => table.materialize(ids.iter()),
            None => Vec::new(),
        })
    }

    async fn common_friends(&self, user_id: UserId, other_id: UserId) -> CatalogResult<Vec<User>> {
        let table = self.inner.read().await;
        Ok(match (table.friend_ids(user_id), table.friend_ids(other_id)) {
            (Some(a), Some(b)) => table.materialize(a.intersection(b)),
            _ => Vec::new(),
        })
    }
}
