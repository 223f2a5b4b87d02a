#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use hybrid_strength_domain as domain;
use strum::AsRefStr;

pub mod backup;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
pub mod repository;

pub use repository::Repository;

/// Prefix shared by all keys owned by the application.
pub const PREFIX: &str = "hybrid";

/// Flat string store such as the browser's local storage.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, domain::StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), domain::StorageError>;
    fn remove(&self, key: &str) -> Result<(), domain::StorageError>;
    fn keys(&self) -> Result<Vec<String>, domain::StorageError>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "hybridStrengthSettings")]
    Settings,
    #[strum(serialize = "hybridExerciseReplacements")]
    ExerciseOverrides,
    #[strum(serialize = "hybridAvailableEquipment")]
    Equipment,
    #[strum(serialize = "hybridCustomProgram")]
    CustomProgram,
    #[strum(serialize = "hybridLog")]
    Log,
}

const SESSION_KEY_PREFIX: &str = "hybridStrengthLog_";
const DONE_FLAG_KEY_PREFIX: &str = "hybridPlanDone_";

#[must_use]
pub fn session_key(key: domain::SessionKey) -> String {
    format!("{SESSION_KEY_PREFIX}{}_{}", key.week, key.day)
}

/// Inverse of [`session_key`]. Keys not in the form produced by it are rejected.
#[must_use]
pub fn parse_session_key(key: &str) -> Option<domain::SessionKey> {
    let (week, day) = key.strip_prefix(SESSION_KEY_PREFIX)?.split_once('_')?;
    Some(domain::SessionKey {
        week: week.parse().ok()?,
        day: day.parse().ok()?,
    })
    .filter(|parsed| session_key(*parsed) == key)
}

#[must_use]
pub fn done_flag_key(key: domain::DoneFlagKey) -> String {
    format!(
        "{DONE_FLAG_KEY_PREFIX}{}_{}_{}",
        key.week, key.day, key.slot
    )
}
