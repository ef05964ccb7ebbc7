//! Core entity definitions for Reelbook.
//!
//! This crate defines the records tracked by the catalogue (users and films),
//! their identity types, and the field-level validation applied to incoming
//! data before it reaches a store.

mod film;
mod id;
mod user;
pub mod validation;

pub use film::*;
pub use id::*;
pub use user::*;
