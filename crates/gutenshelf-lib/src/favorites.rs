use crate::{
    error::Result,
    storage::{load_json, save_json, KeyValueStore},
};

/// Storage key holding the JSON array of favorited book ids
pub const WISHLIST_KEY: &str = "wishlist";

/// The persisted set of favorited book ids.
///
/// Nothing else keeps a copy: every "is this a favorite" question is answered
/// by reading the backing store again.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Favorited ids in the order they were added, without duplicates.
    pub fn get_favorites(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = load_json(&self.store, WISHLIST_KEY).unwrap_or_default();
        let mut seen = std::collections::HashSet::with_capacity(ids.len());
        ids.retain(|id| seen.insert(*id));
        ids
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.get_favorites().contains(&id)
    }

    pub fn count(&self) -> usize {
        self.get_favorites().len()
    }

    /// Adds `id` if absent, removes it if present, and writes the whole set back.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&self, id: i64) -> Result<bool> {
        let mut ids = self.get_favorites();
        let favorited = match ids.iter().position(|x| *x == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        save_json(&self.store, WISHLIST_KEY, &ids)?;
        info!("book {} favorited: {}", id, favorited);

        Ok(favorited)
    }

    /// Toggles `id` off when it is a favorite, otherwise does nothing.
    pub fn remove(&self, id: i64) -> Result<()> {
        if self.is_favorite(id) {
            self.toggle_favorite(id)?;
        }
        Ok(())
    }

    /// Removes every favorite, one toggle at a time.
    pub fn clear(&self) -> Result<()> {
        for id in self.get_favorites() {
            self.toggle_favorite(id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::Error, storage::MemoryStore};

    #[test]
    fn test_missing_key_is_empty() {
        let favorites = Favorites::new(MemoryStore::new());
        assert!(favorites.get_favorites().is_empty());
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_malformed_value_is_empty() {
        let favorites = Favorites::new(MemoryStore::with_items([(WISHLIST_KEY, "{not json")]));
        assert!(favorites.get_favorites().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_empty_set() {
        let favorites = Favorites::new(MemoryStore::new());

        assert!(favorites.toggle_favorite(42).unwrap());
        assert!(favorites.is_favorite(42));
        assert!(!favorites.toggle_favorite(42).unwrap());

        assert!(!favorites.is_favorite(42));
        assert!(favorites.get_favorites().is_empty());
        assert_eq!(favorites.store().get_item(WISHLIST_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let favorites = Favorites::new(MemoryStore::new());
        for id in [7, 3, 11] {
            favorites.toggle_favorite(id).unwrap();
        }
        favorites.toggle_favorite(3).unwrap();

        assert_eq!(favorites.get_favorites(), vec![7, 11]);
        assert_eq!(favorites.store().get_item(WISHLIST_KEY).as_deref(), Some("[7,11]"));
    }

    #[test]
    fn test_duplicates_in_storage_are_collapsed() {
        let favorites = Favorites::new(MemoryStore::with_items([(WISHLIST_KEY, "[5,5,9,5]")]));
        assert_eq!(favorites.get_favorites(), vec![5, 9]);

        assert!(!favorites.toggle_favorite(5).unwrap());
        assert_eq!(favorites.get_favorites(), vec![9]);
    }

    #[test]
    fn test_remove_and_clear() {
        let favorites = Favorites::new(MemoryStore::with_items([(WISHLIST_KEY, "[1,2,3]")]));

        favorites.remove(4).unwrap();
        assert_eq!(favorites.get_favorites(), vec![1, 2, 3]);

        favorites.remove(2).unwrap();
        assert_eq!(favorites.get_favorites(), vec![1, 3]);

        favorites.clear().unwrap();
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_failed_write_leaves_set_untouched() {
        let favorites = Favorites::new(MemoryStore::read_only());
        assert!(matches!(favorites.toggle_favorite(1), Err(Error::Storage(_))));
        assert!(!favorites.is_favorite(1));
    }
}
