#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod equipment;
mod error;
mod load;
mod loaded;
mod program;
mod recovery;
mod resolver;
mod schedule;
mod service;
mod session;
mod settings;
mod statistics;
mod tools;
mod units;

pub use catalog::{Adjustment, Catalog, DEFAULT_CATALOG, ExerciseOption, UNKNOWN_EQUIPMENT};
pub use equipment::{EQUIPMENT, EquipmentRepository, EquipmentSet};
pub use error::{ReadError, StorageError, ValidationError, WriteError};
pub use load::{
    Load, TRAINING_MAX_FACTOR, effective_percent, load, load_label, parse_load_to_kg,
    reps_in_reserve, training_max,
};
pub use loaded::Loaded;
pub use program::{
    MovementSlot, PrimaryLift, ProgramError, ProgramRepository, ProgramStructure, TrainingDay,
    WEEK_COUNT,
};
pub use recovery::{Massage, Recovery, Stretch, recovery_for_day};
pub use resolver::{Choice, ExerciseOverrideRepository, ExerciseOverrides, choices, resolve};
pub use schedule::{
    Day, PlanInput, PlanService, PlannedExercise, Schedule, Week, WeekRange, generate,
    generate_weeks,
};
pub use service::Service;
pub use session::{
    DoneFlagKey, DoneFlagRepository, Effort, LoggedExercise, LoggedSession, SessionKey,
    SessionRecord, SessionRepository, SessionService,
};
pub use settings::{EquipmentMode, Settings, SettingsRepository, SettingsService};
pub use statistics::{Summary, summary, weekly_completion_counts, weekly_volume};
pub use tools::{
    ESTIMATE_REPS, OneRepMaxEstimate, PlateError, PlateLoading, estimate_one_rep_max,
    parse_plates, plates,
};
pub use units::{KG_TO_LB, Mass, Units, round_to_increment};
