use log::{error, warn};

use crate::{
    Catalog, Choice, DEFAULT_CATALOG, DoneFlagKey, DoneFlagRepository, EquipmentRepository,
    EquipmentSet, ExerciseOverrideRepository, ExerciseOverrides, Loaded, MovementSlot,
    PlanInput, PlanService, ProgramRepository, ProgramStructure, ReadError, Schedule,
    SessionKey, SessionRecord, SessionRepository, SessionService, Settings, SettingsRepository,
    SettingsService, StorageError, Summary, TrainingDay, WEEK_COUNT, WeekRange, WriteError,
    choices, generate_weeks, resolve, summary, weekly_completion_counts, weekly_volume,
};

/// Entry point for the presentation layer.
///
/// All inputs are read from the repository on every call, so a change written through the
/// service is reflected by the next read.
pub struct Service<R> {
    repository: R,
    catalog: Catalog,
}

impl<R> Service<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_catalog(repository, DEFAULT_CATALOG.clone())
    }

    #[must_use]
    pub fn with_catalog(repository: R, catalog: Catalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::Unavailable(_)) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

fn log_on_malformed<T>(loaded: Loaded<T>, entity: &str) -> T {
    if let Loaded::Malformed { error, .. } = &loaded {
        warn!("replaced malformed {entity} by default: {error}");
    }
    loaded.into_inner()
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(self.repository.read_settings(), ReadError, "get", "settings")
            .map(|loaded| log_on_malformed(loaded, "settings"))
    }

    fn set_settings(&self, settings: Settings) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_settings(&settings),
            WriteError,
            "set",
            "settings"
        )
    }
}

impl<R> PlanService for Service<R>
where
    R: SettingsRepository + EquipmentRepository + ExerciseOverrideRepository + ProgramRepository,
{
    fn get_equipment(&self) -> Result<EquipmentSet, ReadError> {
        log_on_error!(self.repository.read_equipment(), ReadError, "get", "equipment")
            .map(|loaded| log_on_malformed(loaded, "equipment"))
    }

    fn set_equipment(&self, equipment: &EquipmentSet) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_equipment(equipment),
            WriteError,
            "set",
            "equipment"
        )
    }

    fn get_exercise_overrides(&self) -> Result<ExerciseOverrides, ReadError> {
        log_on_error!(
            self.repository.read_exercise_overrides(),
            ReadError,
            "get",
            "exercise overrides"
        )
        .map(|loaded| log_on_malformed(loaded, "exercise overrides"))
    }

    fn set_exercise_override(&self, slot_key: &str, exercise: &str) -> Result<(), WriteError> {
        let mut overrides = self.get_exercise_overrides()?;
        overrides.set(slot_key, exercise);
        log_on_error!(
            self.repository.write_exercise_overrides(&overrides),
            WriteError,
            "set",
            "exercise override"
        )
    }

    fn clear_exercise_override(&self, slot_key: &str) -> Result<(), WriteError> {
        let mut overrides = self.get_exercise_overrides()?;
        if overrides.clear(slot_key).is_none() {
            return Ok(());
        }
        log_on_error!(
            self.repository.write_exercise_overrides(&overrides),
            WriteError,
            "clear",
            "exercise override"
        )
    }

    fn get_program(&self) -> Result<ProgramStructure, ReadError> {
        let settings = self.get_settings()?;
        let custom = log_on_error!(
            self.repository.read_custom_program(),
            ReadError,
            "get",
            "custom program"
        )
        .map(|loaded| log_on_malformed(loaded, "custom program"))?;
        Ok(ProgramStructure::effective(custom, settings.equipment_mode))
    }

    fn set_custom_program(&self, days: Vec<TrainingDay>) -> Result<ProgramStructure, WriteError> {
        let program = ProgramStructure::new(days).map_err(|err| {
            warn!("rejected custom program: {err}");
            WriteError::Rejected(err.to_string())
        })?;
        log_on_error!(
            self.repository.write_custom_program(&program),
            WriteError,
            "set",
            "custom program"
        )?;
        Ok(program)
    }

    fn reset_custom_program(&self) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.delete_custom_program(),
            WriteError,
            "reset",
            "custom program"
        )
    }

    fn get_plan_input(&self) -> Result<PlanInput, ReadError> {
        Ok(PlanInput {
            settings: self.get_settings()?,
            overrides: self.get_exercise_overrides()?,
            equipment: self.get_equipment()?,
            program: self.get_program()?,
        })
    }

    fn get_schedule(&self, range: WeekRange) -> Result<Schedule, ReadError> {
        Ok(generate_weeks(
            &self.get_plan_input()?,
            &self.catalog,
            WEEK_COUNT,
            range,
        ))
    }

    fn get_choices(&self, slot: &MovementSlot) -> Result<Vec<Choice>, ReadError> {
        let input = self.get_plan_input()?;
        let selected = resolve(slot, &input.overrides, &input.equipment, &self.catalog);
        Ok(choices(slot, &selected.name, &input.equipment, &self.catalog))
    }
}

impl<R: SessionRepository + DoneFlagRepository> SessionService for Service<R> {
    fn get_session_records(&self) -> Result<Vec<SessionRecord>, ReadError> {
        log_on_error!(
            self.repository.read_session_records(),
            ReadError,
            "get",
            "session records"
        )
        .map(|loaded| log_on_malformed(loaded, "session records"))
    }

    fn get_session_record(&self, key: SessionKey) -> Result<Option<SessionRecord>, ReadError> {
        log_on_error!(
            self.repository.read_session_record(key),
            ReadError,
            "get",
            "session record"
        )
        .map(|loaded| log_on_malformed(loaded, "session record"))
    }

    fn save_session_record(&self, record: &SessionRecord) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_session_record(record),
            WriteError,
            "save",
            "session record"
        )
    }

    fn get_done_flag(&self, key: DoneFlagKey) -> Result<bool, ReadError> {
        log_on_error!(
            self.repository.read_done_flag(key),
            ReadError,
            "get",
            "done flag"
        )
    }

    fn set_done_flag(&self, key: DoneFlagKey, done: bool) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_done_flag(key, done),
            WriteError,
            "set",
            "done flag"
        )
    }

    fn get_weekly_completion_counts(&self, week_count: u32) -> Result<Vec<u32>, ReadError> {
        Ok(weekly_completion_counts(
            &self.get_session_records()?,
            week_count,
        ))
    }

    fn get_weekly_volume(&self, week_count: u32) -> Result<Vec<f64>, ReadError> {
        Ok(weekly_volume(&self.get_session_records()?, week_count))
    }

    fn get_summary(&self) -> Result<Summary, ReadError> {
        Ok(summary(&self.get_session_records()?))
    }
}
