//! User-related entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Email address, unique across users (exact match).
    pub email: String,
    /// Login, unique across users.
    pub login: String,
    /// Display name.
    pub name: String,
    /// Date of birth.
    pub birthday: Option<NaiveDate>,
}

impl User {
    /// Materializes a stored user from a draft under the given identity.
    ///
    /// A blank display name falls back to the login.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let name = draft.display_name().to_string();
        Self {
            id,
            email: draft.email,
            login: draft.login,
            name,
            birthday: draft.birthday,
        }
    }

    /// Copies the fields of `draft` onto this user.
    ///
    /// A blank name keeps the current name and a missing birthday keeps the
    /// current birthday.
    pub fn apply(&mut self, draft: UserDraft) {
        self.email = draft.email;
        self.login = draft.login;
        if let Some(name) = draft.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if draft.birthday.is_some() {
            self.birthday = draft.birthday;
        }
    }
}

/// Mutable user fields, used to create or update a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl UserDraft {
    /// Creates a draft with the required fields.
    pub fn new(email: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            login: login.into(),
            name: None,
            birthday: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the date of birth.
    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Returns the name to display, falling back to the login when blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}
