use std::fmt;

use crate::{Loaded, PrimaryLift, ReadError, Units, ValidationError, WriteError, training_max};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, ReadError>;
    fn set_settings(&self, settings: Settings) -> Result<(), WriteError>;

    /// Parse an estimated one-rep maximum entered by the user. An empty field counts as zero.
    fn validate_one_rep_max(&self, value: &str) -> Result<f64, ValidationError> {
        let value = value.replace(',', ".");
        let value = value.trim();
        if value.is_empty() {
            return Ok(0.0);
        }
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(parsed),
            Ok(_) => Err(ValidationError::Invalid(
                "One-rep max must be a non-negative number".to_string(),
            )),
            Err(_) => Err(ValidationError::Invalid(
                "One-rep max must be a decimal number".to_string(),
            )),
        }
    }
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Loaded<Settings>, ReadError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), WriteError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Settings {
    pub leg_one_rep_max: f64,
    pub chest_one_rep_max: f64,
    pub units: Units,
    pub equipment_mode: EquipmentMode,
}

impl Settings {
    #[must_use]
    pub fn one_rep_max(&self, lift: PrimaryLift) -> f64 {
        match lift {
            PrimaryLift::Leg => self.leg_one_rep_max,
            PrimaryLift::Chest => self.chest_one_rep_max,
        }
    }

    #[must_use]
    pub fn training_max(&self, lift: PrimaryLift) -> f64 {
        training_max(self.one_rep_max(lift))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentMode {
    #[default]
    Machine,
    FreeWeight,
}

impl fmt::Display for EquipmentMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EquipmentMode::Machine => "machine",
                EquipmentMode::FreeWeight => "free-weight",
            }
        )
    }
}
