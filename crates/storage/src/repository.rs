use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Key, KeyValueStore, domain, done_flag_key, parse_session_key, session_key};

/// Typed access to all persisted values on top of a key-value store.
///
/// Stored values that cannot be decoded are replaced by their default and reported as
/// [`domain::Loaded::Malformed`].
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<domain::Loaded<Option<T>>, domain::ReadError> {
        let Some(raw) = self.store.read(key)? else {
            return Ok(domain::Loaded::Missing(None));
        };
        Ok(match serde_json::from_str(&raw) {
            Ok(value) => domain::Loaded::Stored(Some(value)),
            Err(err) => {
                debug!("failed to decode {key}: {err}");
                domain::Loaded::Malformed {
                    value: None,
                    error: err.to_string(),
                }
            }
        })
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), domain::WriteError> {
        let json = serde_json::to_string(value)
            .map_err(|err| domain::WriteError::Other(Box::new(err)))?;
        Ok(self.store.write(key, &json)?)
    }
}

/// Decode the JSON text of a custom program as entered by the user.
///
/// The result is not validated yet.
pub fn parse_custom_program(json: &str) -> Result<Vec<domain::TrainingDay>, serde_json::Error> {
    Ok(serde_json::from_str::<Vec<TrainingDay>>(json)?
        .into_iter()
        .map(domain::TrainingDay::from)
        .collect())
}

/// Encode a program in the format accepted by [`parse_custom_program`].
pub fn format_custom_program(
    program: &domain::ProgramStructure,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&program.iter().map(TrainingDay::from).collect::<Vec<_>>())
}

impl<S: KeyValueStore> domain::SettingsRepository for Repository<S> {
    fn read_settings(&self) -> Result<domain::Loaded<domain::Settings>, domain::ReadError> {
        Ok(self
            .read_json::<Settings>(Key::Settings.as_ref())?
            .map(|settings| settings.map(domain::Settings::from).unwrap_or_default()))
    }

    fn write_settings(&self, settings: &domain::Settings) -> Result<(), domain::WriteError> {
        self.write_json(Key::Settings.as_ref(), &Settings::from(settings))
    }
}

impl<S: KeyValueStore> domain::EquipmentRepository for Repository<S> {
    fn read_equipment(&self) -> Result<domain::Loaded<domain::EquipmentSet>, domain::ReadError> {
        Ok(self
            .read_json::<Vec<String>>(Key::Equipment.as_ref())?
            .map(|equipment| equipment.unwrap_or_default().into_iter().collect()))
    }

    fn write_equipment(&self, equipment: &domain::EquipmentSet) -> Result<(), domain::WriteError> {
        self.write_json(Key::Equipment.as_ref(), &equipment.iter().collect::<Vec<_>>())
    }
}

impl<S: KeyValueStore> domain::ExerciseOverrideRepository for Repository<S> {
    fn read_exercise_overrides(
        &self,
    ) -> Result<domain::Loaded<domain::ExerciseOverrides>, domain::ReadError> {
        Ok(self
            .read_json::<BTreeMap<String, String>>(Key::ExerciseOverrides.as_ref())?
            .map(|overrides| overrides.unwrap_or_default().into_iter().collect()))
    }

    fn write_exercise_overrides(
        &self,
        overrides: &domain::ExerciseOverrides,
    ) -> Result<(), domain::WriteError> {
        self.write_json(Key::ExerciseOverrides.as_ref(), &**overrides)
    }
}

impl<S: KeyValueStore> domain::ProgramRepository for Repository<S> {
    fn read_custom_program(
        &self,
    ) -> Result<domain::Loaded<Option<domain::ProgramStructure>>, domain::ReadError> {
        let days = match self.read_json::<Vec<TrainingDay>>(Key::CustomProgram.as_ref())? {
            domain::Loaded::Stored(Some(days)) => days,
            other => return Ok(other.map(|_| None)),
        };
        Ok(
            match domain::ProgramStructure::new(
                days.into_iter().map(domain::TrainingDay::from).collect(),
            ) {
                Ok(program) => domain::Loaded::Stored(Some(program)),
                Err(err) => domain::Loaded::Malformed {
                    value: None,
                    error: err.to_string(),
                },
            },
        )
    }

    fn write_custom_program(
        &self,
        program: &domain::ProgramStructure,
    ) -> Result<(), domain::WriteError> {
        self.write_json(
            Key::CustomProgram.as_ref(),
            &program.iter().map(TrainingDay::from).collect::<Vec<_>>(),
        )
    }

    fn delete_custom_program(&self) -> Result<(), domain::WriteError> {
        Ok(self.store.remove(Key::CustomProgram.as_ref())?)
    }
}

impl<S: KeyValueStore> domain::SessionRepository for Repository<S> {
    fn read_session_records(
        &self,
    ) -> Result<domain::Loaded<Vec<domain::SessionRecord>>, domain::ReadError> {
        let mut records = vec![];
        let mut errors = vec![];
        for key in self.store.keys()? {
            let Some(record_key) = parse_session_key(&key) else {
                continue;
            };
            match domain::SessionRepository::read_session_record(self, record_key)? {
                domain::Loaded::Stored(Some(record)) => records.push(record),
                domain::Loaded::Malformed { error, .. } => errors.push(format!("{key}: {error}")),
                domain::Loaded::Stored(None) | domain::Loaded::Missing(_) => {}
            }
        }
        records.sort_by_key(domain::SessionRecord::key);
        Ok(if errors.is_empty() {
            domain::Loaded::Stored(records)
        } else {
            domain::Loaded::Malformed {
                value: records,
                error: errors.join(", "),
            }
        })
    }

    fn read_session_record(
        &self,
        key: domain::SessionKey,
    ) -> Result<domain::Loaded<Option<domain::SessionRecord>>, domain::ReadError> {
        Ok(self
            .read_json::<SessionRecord>(&session_key(key))?
            .map(|record| record.map(|r| r.into_domain(key))))
    }

    fn write_session_record(
        &self,
        record: &domain::SessionRecord,
    ) -> Result<(), domain::WriteError> {
        self.write_json(&session_key(record.key()), &SessionRecord::from(record))
    }
}

impl<S: KeyValueStore> domain::DoneFlagRepository for Repository<S> {
    fn read_done_flag(&self, key: domain::DoneFlagKey) -> Result<bool, domain::ReadError> {
        Ok(self.store.read(&done_flag_key(key))?.as_deref() == Some("1"))
    }

    fn write_done_flag(
        &self,
        key: domain::DoneFlagKey,
        done: bool,
    ) -> Result<(), domain::WriteError> {
        Ok(self
            .store
            .write(&done_flag_key(key), if done { "1" } else { "0" })?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, alias = "legPress1rm")]
    pub one_rep_max_primary_a: f64,
    #[serde(default, alias = "chestPress1rm")]
    pub one_rep_max_primary_b: f64,
    #[serde(default)]
    pub units: Units,
    #[serde(default, alias = "mode")]
    pub equipment_mode: EquipmentMode,
}

impl From<&domain::Settings> for Settings {
    fn from(value: &domain::Settings) -> Self {
        Self {
            one_rep_max_primary_a: value.leg_one_rep_max,
            one_rep_max_primary_b: value.chest_one_rep_max,
            units: value.units.into(),
            equipment_mode: value.equipment_mode.into(),
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            leg_one_rep_max: sanitize_one_rep_max(value.one_rep_max_primary_a),
            chest_one_rep_max: sanitize_one_rep_max(value.one_rep_max_primary_b),
            units: value.units.into(),
            equipment_mode: value.equipment_mode.into(),
        }
    }
}

fn sanitize_one_rep_max(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Units {
    #[default]
    #[serde(alias = "kg")]
    Metric,
    #[serde(alias = "lb")]
    Imperial,
}

impl From<domain::Units> for Units {
    fn from(value: domain::Units) -> Self {
        match value {
            domain::Units::Metric => Units::Metric,
            domain::Units::Imperial => Units::Imperial,
        }
    }
}

impl From<Units> for domain::Units {
    fn from(value: Units) -> Self {
        match value {
            Units::Metric => domain::Units::Metric,
            Units::Imperial => domain::Units::Imperial,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentMode {
    #[default]
    Machine,
    #[serde(alias = "free", alias = "freeweight")]
    FreeWeight,
}

impl From<domain::EquipmentMode> for EquipmentMode {
    fn from(value: domain::EquipmentMode) -> Self {
        match value {
            domain::EquipmentMode::Machine => EquipmentMode::Machine,
            domain::EquipmentMode::FreeWeight => EquipmentMode::FreeWeight,
        }
    }
}

impl From<EquipmentMode> for domain::EquipmentMode {
    fn from(value: EquipmentMode) -> Self {
        match value {
            EquipmentMode::Machine => domain::EquipmentMode::Machine,
            EquipmentMode::FreeWeight => domain::EquipmentMode::FreeWeight,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<MovementSlot>,
}

impl From<&domain::TrainingDay> for TrainingDay {
    fn from(value: &domain::TrainingDay) -> Self {
        Self {
            name: value.name.clone(),
            exercises: value.slots.iter().map(MovementSlot::from).collect(),
        }
    }
}

impl From<TrainingDay> for domain::TrainingDay {
    fn from(value: TrainingDay) -> Self {
        Self {
            name: value.name,
            slots: value
                .exercises
                .into_iter()
                .map(domain::MovementSlot::from)
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct MovementSlot {
    #[serde(default)]
    pub key: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub primary: Option<PrimaryLift>,
}

impl From<&domain::MovementSlot> for MovementSlot {
    fn from(value: &domain::MovementSlot) -> Self {
        Self {
            key: value.key.clone(),
            name: value.name.clone(),
            sets: value.sets,
            reps: value.reps,
            percent: value.percent,
            primary: value.primary.map(PrimaryLift::from),
        }
    }
}

impl From<MovementSlot> for domain::MovementSlot {
    fn from(value: MovementSlot) -> Self {
        Self {
            key: if value.key.trim().is_empty() {
                value.name.clone()
            } else {
                value.key
            },
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            percent: value.percent,
            primary: value.primary.map(domain::PrimaryLift::from),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryLift {
    Leg,
    Chest,
}

impl From<domain::PrimaryLift> for PrimaryLift {
    fn from(value: domain::PrimaryLift) -> Self {
        match value {
            domain::PrimaryLift::Leg => PrimaryLift::Leg,
            domain::PrimaryLift::Chest => PrimaryLift::Chest,
        }
    }
}

impl From<PrimaryLift> for domain::PrimaryLift {
    fn from(value: PrimaryLift) -> Self {
        match value {
            PrimaryLift::Leg => domain::PrimaryLift::Leg,
            PrimaryLift::Chest => domain::PrimaryLift::Chest,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub notes: String,
    #[serde(default, alias = "rpe", skip_serializing_if = "Option::is_none")]
    pub effort_rating: Option<EffortRating>,
    #[serde(default)]
    pub session: LoggedSession,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    fn into_domain(self, key: domain::SessionKey) -> domain::SessionRecord {
        domain::SessionRecord {
            week: key.week,
            day: key.day,
            notes: self.notes,
            effort: self.effort_rating.and_then(EffortRating::effort),
            session: domain::LoggedSession {
                day_name: self.session.day_name,
                exercises: self
                    .session
                    .exercises
                    .into_iter()
                    .map(domain::LoggedExercise::from)
                    .collect(),
            },
            saved_at: self.saved_at,
        }
    }
}

impl From<&domain::SessionRecord> for SessionRecord {
    fn from(value: &domain::SessionRecord) -> Self {
        Self {
            notes: value.notes.clone(),
            effort_rating: value.effort.map(|effort| EffortRating::Number(*effort)),
            session: LoggedSession {
                day_name: value.session.day_name.clone(),
                exercises: value
                    .session
                    .exercises
                    .iter()
                    .map(LoggedExercise::from)
                    .collect(),
            },
            saved_at: value.saved_at,
        }
    }
}

/// Effort rating as number or, as in older records, as text.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EffortRating {
    Number(u8),
    Text(String),
}

impl EffortRating {
    fn effort(self) -> Option<domain::Effort> {
        match self {
            EffortRating::Number(value) => domain::Effort::new(value).ok(),
            EffortRating::Text(value) => domain::Effort::try_from(value.as_str()).ok(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSession {
    #[serde(default)]
    pub day_name: String,
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub load_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_kg: Option<f64>,
    #[serde(default)]
    pub per_set_done: Vec<bool>,
}

impl From<&domain::LoggedExercise> for LoggedExercise {
    fn from(value: &domain::LoggedExercise) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets,
            reps: value.reps,
            load_label: value.load_label.clone(),
            load_kg: value.load_kg,
            per_set_done: value.per_set_done.clone(),
        }
    }
}

impl From<LoggedExercise> for domain::LoggedExercise {
    fn from(value: LoggedExercise) -> Self {
        Self {
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            load_label: value.load_label,
            load_kg: value.load_kg,
            per_set_done: value.per_set_done,
        }
    }
}
