//! Identity types.

use std::{fmt, hash::Hash, str::FromStr};

use serde::{Deserialize, Serialize};

/// Common behaviour of store-assigned identities.
///
/// Identities are positive integers handed out by a store; callers treat them
/// as opaque values.
pub trait EntityId: Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Wraps a raw identity value.
    fn from_raw(raw: u64) -> Self;

    /// Returns the raw identity value.
    fn get(self) -> u64;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl EntityId for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identity of a user record.
    UserId
);

entity_id!(
    /// Identity of a film record.
    FilmId
);
