//! Field-level validation for incoming user and film data.
//!
//! These checks run at the boundary, before a draft is handed to a store.
//! Every violated rule is reported, not just the first one.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::{FilmDraft, UserDraft};

/// Maximum length of a film description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Earliest accepted film release date.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

/// A single violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

/// All rule violations found in one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "Validation failed ({})", fields.join("; "))
    }
}

impl ValidationErrors {
    /// Returns true if the given field has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn check(&mut self, ok: bool, field: &'static str, message: &str) {
        if !ok {
            self.errors.push(FieldError {
                field,
                message: message.to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

/// Loose email shape check: one `@`, a non-empty local part and a domain,
/// no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validates a user draft against the given current date.
pub fn validate_user(draft: &UserDraft, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();

    if draft.email.trim().is_empty() {
        c.check(false, "email", "email must not be blank");
    } else {
        c.check(
            is_email(&draft.email),
            "email",
            "email must contain '@' and a domain",
        );
    }

    if draft.login.trim().is_empty() {
        c.check(false, "login", "login must not be blank");
    } else {
        c.check(
            !draft.login.chars().any(char::is_whitespace),
            "login",
            "login must not contain whitespace",
        );
    }

    if let Some(birthday) = draft.birthday {
        c.check(birthday <= today, "birthday", "birthday must not be in the future");
    }

    c.finish()
}

/// Validates a film draft against the given current date.
pub fn validate_film(draft: &FilmDraft, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();

    c.check(!draft.name.trim().is_empty(), "name", "name must not be blank");

    if let Some(description) = &draft.description {
        c.check(
            description.chars().count() <= MAX_DESCRIPTION_LEN,
            "description",
            "description must be at most 200 characters",
        );
    }

    c.check(
        draft.release_date >= earliest_release_date() && draft.release_date <= today,
        "releaseDate",
        "release date must be between 1895-12-28 and today",
    );

    c.check(draft.duration > 0, "duration", "duration must be positive");

    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    #[test]
    fn test_valid_user() {
        let draft = UserDraft::new("user@example.com", "alice").with_birthday(date(1990, 5, 4));
        assert!(validate_user(&draft, today()).is_ok());
    }

    #[test]
    fn test_login_rules() {
        let err = validate_user(&UserDraft::new("a@b.com", ""), today()).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert!(err.has_field("login"));

        let err = validate_user(&UserDraft::new("a@b.com", "ali ce"), today()).unwrap_err();
        assert_eq!(err.errors[0].message, "login must not contain whitespace");
    }

    #[test]
    fn test_email_rules() {
        for email in ["", "   ", "no-at-sign", "@example.com", "user@", "us er@x.com"] {
            let err = validate_user(&UserDraft::new(email, "alice"), today()).unwrap_err();
            assert!(err.has_field("email"), "accepted {email:?}");
        }
    }

    #[test]
    fn test_birthday_in_future() {
        let draft = UserDraft::new("a@b.com", "alice").with_birthday(date(2024, 6, 2));
        let err = validate_user(&draft, today()).unwrap_err();
        assert!(err.has_field("birthday"));

        let draft = UserDraft::new("a@b.com", "alice").with_birthday(today());
        assert!(validate_user(&draft, today()).is_ok());
    }

    #[test]
    fn test_valid_film() {
        let draft = FilmDraft::new("Inception", date(2010, 7, 16), 148).with_description("Dreams");
        assert!(validate_film(&draft, today()).is_ok());
    }

    #[test]
    fn test_release_date_bounds_are_inclusive() {
        let draft = FilmDraft::new("Arrival of a Train", earliest_release_date(), 1);
        assert!(validate_film(&draft, today()).is_ok());

        let draft = FilmDraft::new("Too early", date(1895, 12, 27), 1);
        assert!(validate_film(&draft, today()).unwrap_err().has_field("releaseDate"));

        let draft = FilmDraft::new("Today", today(), 1);
        assert!(validate_film(&draft, today()).is_ok());

        let draft = FilmDraft::new("Tomorrow", date(2024, 6, 2), 1);
        assert!(validate_film(&draft, today()).unwrap_err().has_field("releaseDate"));
    }

    #[test]
    fn test_description_length() {
        let draft = FilmDraft::new("Film", date(2000, 1, 1), 90).with_description("x".repeat(200));
        assert!(validate_film(&draft, today()).is_ok());

        let draft = FilmDraft::new("Film", date(2000, 1, 1), 90).with_description("x".repeat(201));
        assert!(validate_film(&draft, today()).unwrap_err().has_field("description"));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let draft = FilmDraft::new("Film", date(2000, 1, 1), -200);
        let err = validate_film(&draft, today()).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert!(err.has_field("duration"));
    }

    #[test]
    fn test_all_film_violations_reported() {
        let mut draft = FilmDraft::new("  ", date(1800, 1, 1), 0);
        draft.description = Some("y".repeat(300));

        let err = validate_film(&draft, today()).unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.to_string().starts_with("Validation failed"));
    }
}
