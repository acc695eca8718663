use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Synchronous string-keyed store, shaped after the browser's `localStorage`.
///
/// Access is single threaded, so a read-modify-write through one handle can
/// never interleave with another.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Reads a JSON value stored under `key`.
///
/// A missing key and an unparsable value are both reported as `None`.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring malformed value under {:?}: {}", key, e);
            None
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// In-process store, lost when the process ends
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RefCell::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            read_only: false,
        }
    }

    /// A store that rejects every write, like a browser with storage quota exhausted.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage(format!("store is read only, cannot set {key}")));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage(format!("store is read only, cannot remove {key}")));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_json_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<i64>, _>(&store, "wishlist"), None);
    }

    #[test]
    fn test_load_json_malformed_is_absent() {
        let store = MemoryStore::with_items([("wishlist", "[1, 2")]);
        assert_eq!(load_json::<Vec<i64>, _>(&store, "wishlist"), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, "title", "moby").unwrap();

        assert_eq!(store.get_item("title").as_deref(), Some("\"moby\""));
        assert_eq!(load_json::<String, _>(&store, "title").as_deref(), Some("moby"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let store = MemoryStore::read_only();
        assert!(matches!(store.set_item("genre", "\"\""), Err(Error::Storage(_))));
        assert!(store.is_empty());
    }
}
