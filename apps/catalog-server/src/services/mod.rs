//! Services that enforce cross-entity rules on top of the catalog stores.

pub mod films;
pub mod users;

pub use films::FilmService;
pub use users::UserService;
