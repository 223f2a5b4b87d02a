use std::collections::BTreeSet;

use derive_more::Deref;

use crate::{Loaded, ReadError, WriteError};

/// Equipment that can be marked as available.
pub const EQUIPMENT: [&str; 26] = [
    "Leg Press",
    "Hack Squat",
    "Squat Rack",
    "Dumbbells",
    "Plyo Box / Space",
    "Rope",
    "Chest Press Machine",
    "Bench + Barbell",
    "Bench + Dumbbells",
    "Bodyweight",
    "Barbell",
    "Shoulder Press Machine",
    "Smith Machine / Bar",
    "Cable Row Machine",
    "Farmer Handles / Dumbbells",
    "Trap Bar",
    "Heavy Bag / Open Space",
    "Air Bike",
    "Row Erg",
    "Hill/Stairs",
    "Treadmill",
    "Spin Bike",
    "Bench / Bodyweight",
    "Barbell + Bench",
    "Kettlebell",
    "Leg Extension Machine",
];

pub trait EquipmentRepository {
    fn read_equipment(&self) -> Result<Loaded<EquipmentSet>, ReadError>;
    fn write_equipment(&self, equipment: &EquipmentSet) -> Result<(), WriteError>;
}

#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct EquipmentSet(BTreeSet<String>);

impl EquipmentSet {
    #[must_use]
    pub fn all() -> Self {
        EQUIPMENT.iter().copied().collect()
    }

    #[must_use]
    pub fn has(&self, equipment: &str) -> bool {
        self.0.contains(equipment)
    }

    pub fn insert(&mut self, equipment: &str) -> bool {
        self.0.insert(equipment.to_string())
    }

    pub fn remove(&mut self, equipment: &str) -> bool {
        self.0.remove(equipment)
    }
}

impl<S: Into<String>> FromIterator<S> for EquipmentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
