//! Generic identity-keyed record table.

use std::collections::BTreeMap;

use entities::{EntityId, Film, FilmId, User, UserId};

/// A record kept in an [`EntityTable`].
pub(crate) trait Record: Clone {
    type Id: EntityId;

    fn id(&self) -> Self::Id;
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl Record for Film {
    type Id = FilmId;

    fn id(&self) -> FilmId {
        self.id
    }
}

/// Records ordered by identity, with identities handed out by a counter that
/// only moves forward.
#[derive(Debug)]
pub(crate) struct EntityTable<T: Record> {
    rows: BTreeMap<T::Id, T>,
    last_id: u64,
}

impl<T: Record> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> EntityTable<T> {
    /// Stores a record built under a fresh identity and returns it.
    pub fn insert_new(&mut self, build: impl FnOnce(T::Id) -> T) -> &T {
        self.last_id += 1;
        let id = T::Id::from_raw(self.last_id);
        self.rows.entry(id).or_insert_with(|| build(id))
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.rows.contains_key(&id)
    }

    /// Iterates over records in ascending identity order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entities::FilmDraft;

    use super::*;

    fn film(name: &str) -> FilmDraft {
        FilmDraft::new(name, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 100)
    }

    #[test]
    fn test_identities_start_at_one_and_increase() {
        let mut table = EntityTable::<Film>::default();

        let first = table.insert_new(|id| Film::from_draft(id, film("A"))).id;
        let second = table.insert_new(|id| Film::from_draft(id, film("B"))).id;

        assert_eq!(first, FilmId(1));
        assert_eq!(second, FilmId(2));
        assert!(table.contains(FilmId(2)));
        assert!(!table.contains(FilmId(3)));
    }

    #[test]
    fn test_values_ordered_by_identity() {
        let mut table = EntityTable::<Film>::default();
        for name in ["C", "A", "B"] {
            table.insert_new(|id| Film::from_draft(id, film(name)));
        }

        let ids: Vec<FilmId> = table.values().map(|f| f.id).collect();
        assert_eq!(ids, vec![FilmId(1), FilmId(2), FilmId(3)]);
    }
}
