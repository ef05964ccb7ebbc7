//! In-memory store implementations.
//!
//! Each store keeps its records and the relation keyed by those records
//! behind a single lock, so a relation change and the record data derived
//! from it are always updated together.

mod films;
mod table;
mod users;

pub use films::MemoryFilmStore;
pub use users::MemoryUserStore;
