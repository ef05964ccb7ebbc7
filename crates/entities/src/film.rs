//! Film-related entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::FilmId;

/// A catalogued film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Store-assigned identifier.
    pub id: FilmId,
    /// Title.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Release date.
    pub release_date: NaiveDate,
    /// Running time.
    pub duration: i32,
    /// Number of users who liked this film.
    #[serde(default)]
    pub likes: u64,
}

impl Film {
    /// Materializes a stored film from a draft under the given identity.
    pub fn from_draft(id: FilmId, draft: FilmDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            likes: 0,
        }
    }

    /// Replaces every mutable field with the draft's values.
    ///
    /// The like count belongs to the like index and is left untouched.
    pub fn apply(&mut self, draft: FilmDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.release_date = draft.release_date;
        self.duration = draft.duration;
    }
}

/// Mutable film fields, used to create or update a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
}

impl FilmDraft {
    /// Creates a draft with the required fields.
    pub fn new(name: impl Into<String>, release_date: NaiveDate, duration: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            release_date,
            duration,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
