use std::{cell::RefCell, collections::VecDeque};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

use crate::{Key, KeyValueStore, domain};

/// Number of entries kept by [`KeyValueLog`].
pub const MAX_ENTRIES: usize = 100;

thread_local! {
    static LOG: RefCell<Option<Box<dyn Repository>>> = const { RefCell::new(None) };
}

pub trait Repository {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] domain::StorageError),
    #[error("failed to encode log entries: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Install the logger. Entries logged on the calling thread are persisted in `repository`.
///
/// # Errors
///
/// Fails if a logger is already installed in this process.
pub fn init(repository: impl Repository + 'static) -> Result<(), SetLoggerError> {
    LOG.with(|log| *log.borrow_mut() = Some(Box::new(repository)));
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();

        #[cfg(target_arch = "wasm32")]
        match record.level() {
            Level::Error => gloo_console::error!(message.clone()),
            Level::Warn => gloo_console::warn!(message.clone()),
            Level::Info => gloo_console::info!(message.clone()),
            Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
        }

        LOG.with(|log| {
            // Entries emitted while an entry is written are dropped.
            if let Ok(log) = log.try_borrow() {
                if let Some(ref log) = *log {
                    let _ = log.write_entry(Entry {
                        time: Utc::now().format("%b %d %H:%M:%S").to_string(),
                        level: record.level(),
                        message,
                    });
                }
            }
        });
    }

    fn flush(&self) {}
}

/// Log repository keeping the most recent entries as a JSON array in a key-value store.
pub struct KeyValueLog<S> {
    store: S,
}

impl<S: KeyValueStore> KeyValueLog<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> Repository for KeyValueLog<S> {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        match self.store.read(Key::Log.as_ref())? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(VecDeque::new()),
        }
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.push_back(entry);
        while entries.len() > MAX_ENTRIES {
            entries.pop_front();
        }
        let json = serde_json::to_string(&entries)?;
        Ok(self.store.write(Key::Log.as_ref(), &json)?)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryStore;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Mar 03 10:00:00".to_string(),
            level: Level::Warn,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_key_value_log() {
        let log = KeyValueLog::new(MemoryStore::new());
        assert_eq!(log.read_entries().unwrap(), VecDeque::new());

        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();
        assert_eq!(
            log.read_entries().unwrap(),
            VecDeque::from([entry("a"), entry("b")])
        );
        assert_eq!(
            log.store.read("hybridLog").unwrap(),
            Some(
                r#"[{"time":"Mar 03 10:00:00","level":"Warn","message":"a"},{"time":"Mar 03 10:00:00","level":"Warn","message":"b"}]"#
                    .to_string()
            )
        );
    }

    #[test]
    fn test_key_value_log_truncate() {
        let log = KeyValueLog::new(MemoryStore::new());
        for i in 0..=MAX_ENTRIES {
            log.write_entry(entry(&i.to_string())).unwrap();
        }
        let entries = log.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry("1")));
        assert_eq!(entries.back(), Some(&entry(&MAX_ENTRIES.to_string())));
    }

    #[test]
    fn test_key_value_log_malformed() {
        let log = KeyValueLog::new(MemoryStore::from_iter([("hybridLog", "{")]));
        assert!(matches!(log.read_entries(), Err(Error::Format(_))));

        log.write_entry(entry("a")).unwrap();
        assert_eq!(log.read_entries().unwrap(), VecDeque::from([entry("a")]));
    }

    #[test]
    fn test_key_value_log_unavailable() {
        let log = KeyValueLog::new(MemoryStore::new());
        log.store.set_unavailable(true);
        assert!(matches!(
            log.write_entry(entry("a")),
            Err(Error::Storage(domain::StorageError::Unavailable(_)))
        ));
    }

    struct SharedStore(Rc<MemoryStore>);

    impl KeyValueStore for SharedStore {
        fn read(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
            self.0.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), domain::StorageError> {
            self.0.write(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), domain::StorageError> {
            self.0.remove(key)
        }

        fn keys(&self) -> Result<Vec<String>, domain::StorageError> {
            self.0.keys()
        }
    }

    // The only test installing the global logger.
    #[test]
    fn test_init() {
        let store = Rc::new(MemoryStore::new());
        init(KeyValueLog::new(SharedStore(Rc::clone(&store)))).unwrap();

        log::warn!("storage almost full");
        log::debug!("loaded {} records", 3);

        let entries = KeyValueLog::new(SharedStore(store)).read_entries().unwrap();
        assert_eq!(
            entries
                .iter()
                .map(|e| (e.level, e.message.as_str()))
                .collect::<Vec<_>>(),
            vec![
                (Level::Warn, "storage almost full"),
                (Level::Debug, "loaded 3 records"),
            ]
        );
        assert!(entries.iter().all(|e| !e.time.is_empty()));
    }
}
