use chrono::{DateTime, Utc};
use derive_more::Deref;

use crate::{Day, Loaded, ReadError, Summary, ValidationError, WriteError, parse_load_to_kg};

pub trait SessionService {
    fn get_session_records(&self) -> Result<Vec<SessionRecord>, ReadError>;
    fn get_session_record(&self, key: SessionKey) -> Result<Option<SessionRecord>, ReadError>;
    fn save_session_record(&self, record: &SessionRecord) -> Result<(), WriteError>;

    fn get_done_flag(&self, key: DoneFlagKey) -> Result<bool, ReadError>;
    fn set_done_flag(&self, key: DoneFlagKey, done: bool) -> Result<(), WriteError>;

    fn get_weekly_completion_counts(&self, week_count: u32) -> Result<Vec<u32>, ReadError>;
    fn get_weekly_volume(&self, week_count: u32) -> Result<Vec<f64>, ReadError>;
    fn get_summary(&self) -> Result<Summary, ReadError>;
}

pub trait SessionRepository {
    /// All stored records. Malformed records are left out of the returned value.
    fn read_session_records(&self) -> Result<Loaded<Vec<SessionRecord>>, ReadError>;
    fn read_session_record(&self, key: SessionKey)
    -> Result<Loaded<Option<SessionRecord>>, ReadError>;
    fn write_session_record(&self, record: &SessionRecord) -> Result<(), WriteError>;
}

/// Flags marking a single planned exercise as done, independent of any session record.
pub trait DoneFlagRepository {
    fn read_done_flag(&self, key: DoneFlagKey) -> Result<bool, ReadError>;
    fn write_done_flag(&self, key: DoneFlagKey, done: bool) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionKey {
    pub week: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DoneFlagKey {
    pub week: u32,
    pub day: u32,
    pub slot: u32,
}

/// Perceived effort of a session on a scale from 1 to 10.
#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Effort(u8);

impl Effort {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::Invalid(
                "Effort must be in the range 1 to 10".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Effort {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed) => Self::new(parsed),
            Err(_) => Err(ValidationError::Invalid(
                "Effort must be an integer".to_string(),
            )),
        }
    }
}

/// Logged training day. Saving again for the same week and day replaces the record.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub week: u32,
    pub day: u32,
    pub notes: String,
    pub effort: Option<Effort>,
    pub session: LoggedSession,
    pub saved_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// Record a realized day of the schedule.
    ///
    /// `per_set_done` holds the completed sets per exercise. Missing entries count as not done,
    /// surplus entries are dropped.
    #[must_use]
    pub fn capture(
        week: u32,
        day: &Day,
        notes: &str,
        effort: Option<Effort>,
        per_set_done: &[Vec<bool>],
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            week,
            day: day.number,
            notes: notes.to_string(),
            effort,
            session: LoggedSession {
                day_name: day.name.clone(),
                exercises: day
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(i, e)| {
                        let mut done = per_set_done.get(i).cloned().unwrap_or_default();
                        done.resize(e.sets as usize, false);
                        LoggedExercise {
                            name: e.exercise.clone(),
                            sets: e.sets,
                            reps: e.reps,
                            load_label: e.load.to_string(),
                            load_kg: Some(e.load.kg()),
                            per_set_done: done,
                        }
                    })
                    .collect(),
            },
            saved_at: Some(saved_at),
        }
    }

    #[must_use]
    pub fn key(&self) -> SessionKey {
        SessionKey {
            week: self.week,
            day: self.day,
        }
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.saved_at.is_some()
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.session.exercises.iter().map(LoggedExercise::volume).sum()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoggedSession {
    pub day_name: String,
    pub exercises: Vec<LoggedExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub load_label: String,
    pub load_kg: Option<f64>,
    pub per_set_done: Vec<bool>,
}

impl LoggedExercise {
    /// Load in kilograms, recovered from the label for records without numeric load.
    #[must_use]
    pub fn kg(&self) -> f64 {
        self.load_kg
            .unwrap_or_else(|| parse_load_to_kg(&self.load_label))
    }

    /// Estimated lifted volume. Loads given as cue contribute nothing.
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.kg()
    }

    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.per_set_done.iter().filter(|done| **done).count()
    }
}
