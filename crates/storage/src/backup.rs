use std::collections::BTreeMap;

use log::{debug, warn};

use crate::{KeyValueStore, PREFIX, domain};

/// Serialize all values owned by the application into a single JSON document.
pub fn export<S: KeyValueStore>(store: &S) -> Result<String, domain::StorageError> {
    let mut data = BTreeMap::new();
    for key in store.keys()? {
        if !key.starts_with(PREFIX) {
            continue;
        }
        if let Some(value) = store.read(&key)? {
            data.insert(key, value);
        }
    }
    serde_json::to_string_pretty(&data).map_err(|err| domain::StorageError::Other(Box::new(err)))
}

/// Overwrite the stored values by the ones contained in an exported document.
///
/// Only entries with the application prefix and a string value are written. Keys missing in the
/// document keep their value. Nothing is rolled back if writing fails in between.
///
/// Returns the number of written entries.
pub fn import<S: KeyValueStore>(store: &S, document: &str) -> Result<usize, ImportError> {
    let serde_json::Value::Object(data) = serde_json::from_str::<serde_json::Value>(document)? else {
        return Err(ImportError::NotAnObject);
    };

    let mut count = 0;
    for (key, value) in data {
        match value {
            serde_json::Value::String(value) if key.starts_with(PREFIX) => {
                store.write(&key, &value)?;
                count += 1;
            }
            _ => debug!("skipped {key} during import"),
        }
    }

    if count == 0 {
        warn!("import did not contain any entries");
    }

    Ok(count)
}

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Storage(#[from] domain::StorageError),
}
