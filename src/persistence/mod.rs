use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use crate::core::LexiloopError;

const APP_NAME: &str = "lexiloop";

/// Minimal key-value capability the stores are written against. Keys are
/// logical names; values are serialized blobs. Backends decide where the
/// bytes actually live.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, LexiloopError>;
    fn write(&self, key: &str, value: &str) -> Result<(), LexiloopError>;
    fn remove(&self, key: &str) -> Result<(), LexiloopError>;
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// File-per-key storage in the per-user app data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        FileStorage { dir: get_app_data_dir() }
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&dir);
        FileStorage { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, LexiloopError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), LexiloopError> {
        if let Some(parent) = self.path_for(key).parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), LexiloopError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory backend, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, LexiloopError> {
        let map = self
            .map
            .lock()
            .map_err(|_| LexiloopError::Custom("Failed to lock memory storage".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), LexiloopError> {
        let mut map = self
            .map
            .lock()
            .map_err(|_| LexiloopError::Custom("Failed to lock memory storage".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), LexiloopError> {
        let mut map = self
            .map
            .lock()
            .map_err(|_| LexiloopError::Custom("Failed to lock memory storage".to_string()))?;
        map.remove(key);
        Ok(())
    }
}

pub fn save_json<T: serde::Serialize>(
    storage: &impl Storage,
    key: &str,
    data: &T,
) -> Result<(), LexiloopError> {
    let json = serde_json::to_string_pretty(data)?;
    storage.write(key, &json)
}

pub fn load_json<T: for<'de> serde::Deserialize<'de>>(
    storage: &impl Storage,
    key: &str,
) -> Result<Option<T>, LexiloopError> {
    match storage.read(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
