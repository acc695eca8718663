use std::{
    cell::RefCell,
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use gutenshelf_lib::{
    error::{Error, Result},
    storage::KeyValueStore,
};

/// Key-value store persisted as one JSON object on disk.
///
/// Every write rewrites the whole file, so readers never see half an update.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: RefCell<BTreeMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("ignoring malformed store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read store at {}", path.display()));
            }
        };

        Ok(Self {
            path,
            items: RefCell::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&*self.items.borrow())
            .map_err(|e| Error::Storage(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }
        fs::write(&self.path, raw)
            .map_err(|e| Error::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        self.flush()
    }
}
