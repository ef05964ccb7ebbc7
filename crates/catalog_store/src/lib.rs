//! User, film and relationship storage for Reelbook.
//!
//! This crate defines the storage capabilities the service layer depends on
//! (entity stores, the friendship graph and the like index) and provides
//! in-memory implementations of them.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
