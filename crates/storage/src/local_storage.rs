use anyhow::anyhow;
use gloo_storage::Storage as GlooStorage;

use crate::{KeyValueStore, domain};

/// The browser's local storage. Values are stored as they are, without additional encoding.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|err| other(anyhow!("failed to read {key}: {err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| domain::StorageError::Unavailable(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, domain::StorageError> {
        let storage = gloo_storage::LocalStorage::raw();
        let length = gloo_storage::LocalStorage::length();
        let mut keys = Vec::new();
        for index in 0..length {
            if let Some(key) = storage
                .key(index)
                .map_err(|err| other(anyhow!("failed to read key {index}: {err:?}")))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

fn other(err: anyhow::Error) -> domain::StorageError {
    domain::StorageError::Other(err.into())
}
