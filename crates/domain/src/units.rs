use std::fmt;

pub const KG_TO_LB: f64 = 2.20462;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Smallest load step that can be prescribed in this unit system.
    #[must_use]
    pub fn increment(self) -> f64 {
        match self {
            Units::Metric => 2.5,
            Units::Imperial => 5.0,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Units::Metric => "kg",
            Units::Imperial => "lb",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::Metric => "metric",
                Units::Imperial => "imperial",
            }
        )
    }
}

/// A load expressed in a unit system, already rounded to the unit's increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    pub value: f64,
    pub units: Units,
}

impl Mass {
    #[must_use]
    pub fn from_kg(kg: f64, units: Units) -> Self {
        let value = match units {
            Units::Metric => kg,
            Units::Imperial => kg * KG_TO_LB,
        };
        Self {
            value: round_to_increment(value, units.increment()),
            units,
        }
    }

    #[must_use]
    pub fn kg(&self) -> f64 {
        match self.units {
            Units::Metric => self.value,
            Units::Imperial => self.value / KG_TO_LB,
        }
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.units {
            Units::Metric => write!(f, "{:.1} kg", self.value),
            Units::Imperial => write!(f, "{:.0} lb", self.value),
        }
    }
}

/// Round half away from zero to the nearest multiple of `increment`.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}
