use std::fmt;

use crate::{Adjustment, EquipmentMode, KG_TO_LB, Mass, Units};

/// Share of the estimated one-rep max used as training max.
pub const TRAINING_MAX_FACTOR: f64 = 0.9;

#[must_use]
pub fn training_max(one_rep_max: f64) -> f64 {
    one_rep_max * TRAINING_MAX_FACTOR
}

/// Prescribed load of an exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum Load {
    Cue(String),
    Quantity(Mass),
}

impl Load {
    /// Cue used for exercises that are not tied to a training max.
    #[must_use]
    pub fn generic(mode: EquipmentMode) -> Self {
        Load::Cue(
            match mode {
                EquipmentMode::Machine => "Bodyweight / RIR 2-3",
                EquipmentMode::FreeWeight => "As needed",
            }
            .to_string(),
        )
    }

    /// Load in kilograms. Cues count as zero.
    #[must_use]
    pub fn kg(&self) -> f64 {
        match self {
            Load::Cue(_) => 0.0,
            Load::Quantity(mass) => mass.kg(),
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Load::Cue(cue) => write!(f, "{cue}"),
            Load::Quantity(mass) => write!(f, "{mass}"),
        }
    }
}

#[must_use]
pub fn effective_percent(percent: f64, adjustment: &Adjustment) -> f64 {
    match adjustment.percent_delta {
        Some(delta) => (percent + delta).max(0.0),
        None => percent,
    }
}

#[must_use]
pub fn reps_in_reserve(percent: f64) -> u32 {
    if percent >= 0.85 {
        1
    } else if percent >= 0.75 {
        2
    } else {
        3
    }
}

#[must_use]
pub fn load(
    mode: EquipmentMode,
    units: Units,
    training_max: f64,
    percent: f64,
    adjustment: &Adjustment,
) -> Load {
    if let Some(cue) = &adjustment.cue {
        return Load::Cue(cue.clone());
    }

    let percent = effective_percent(percent, adjustment);

    match mode {
        EquipmentMode::Machine => Load::Cue(format!("RIR {}", reps_in_reserve(percent))),
        EquipmentMode::FreeWeight => Load::Quantity(Mass::from_kg(training_max * percent, units)),
    }
}

#[must_use]
pub fn load_label(
    mode: EquipmentMode,
    units: Units,
    training_max: f64,
    percent: f64,
    adjustment: &Adjustment,
) -> String {
    load(mode, units, training_max, percent, adjustment).to_string()
}

/// Recover the load in kilograms from a formatted label such as `"76.5 kg"` or `"170 lb"`.
///
/// Labels without a numeric weight (RIR or other cues) yield zero.
#[must_use]
pub fn parse_load_to_kg(label: &str) -> f64 {
    let label = label.trim();
    let end = label
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(label.len());
    let Ok(value) = label[..end].parse::<f64>() else {
        return 0.0;
    };
    let unit = label[end..].trim_start().to_ascii_lowercase();
    if unit.starts_with("kg") {
        value
    } else if unit.starts_with("lb") {
        value / KG_TO_LB
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_training_max() {
        assert_approx_eq!(training_max(100.0), 90.0);
        assert_approx_eq!(training_max(0.0), 0.0);
    }

    #[rstest]
    #[case(EquipmentMode::Machine)]
    #[case(EquipmentMode::FreeWeight)]
    fn test_load_cue_wins(#[case] mode: EquipmentMode) {
        let adjustment = Adjustment {
            reps: Some(12),
            percent_delta: Some(0.1),
            cue: Some("Bodyweight / RIR 2-3".to_string()),
            ..Adjustment::default()
        };
        assert_eq!(
            load_label(mode, Units::Imperial, 180.0, 0.85, &adjustment),
            "Bodyweight / RIR 2-3"
        );
    }

    #[rstest]
    #[case(0.85, "RIR 1")]
    #[case(0.95, "RIR 1")]
    #[case(0.849_99, "RIR 2")]
    #[case(0.75, "RIR 2")]
    #[case(0.749_99, "RIR 3")]
    #[case(0.50, "RIR 3")]
    fn test_load_machine(#[case] percent: f64, #[case] expected: &str) {
        assert_eq!(
            load_label(
                EquipmentMode::Machine,
                Units::Metric,
                90.0,
                percent,
                &Adjustment::default()
            ),
            expected
        );
    }

    #[rstest]
    #[case(Units::Metric, 0.75, "67.5 kg")]
    #[case(Units::Metric, 0.85, "77.5 kg")]
    #[case(Units::Imperial, 0.85, "170 lb")]
    #[case(Units::Imperial, 0.5, "100 lb")]
    fn test_load_free_weight(#[case] units: Units, #[case] percent: f64, #[case] expected: &str) {
        assert_eq!(
            load_label(
                EquipmentMode::FreeWeight,
                units,
                90.0,
                percent,
                &Adjustment::default()
            ),
            expected
        );
    }

    #[rstest]
    #[case(Some(0.2), EquipmentMode::Machine, "RIR 1")]
    #[case(Some(-1.0), EquipmentMode::Machine, "RIR 3")]
    #[case(Some(-1.0), EquipmentMode::FreeWeight, "0.0 kg")]
    #[case(None, EquipmentMode::FreeWeight, "67.5 kg")]
    fn test_load_percent_delta(
        #[case] percent_delta: Option<f64>,
        #[case] mode: EquipmentMode,
        #[case] expected: &str,
    ) {
        let adjustment = Adjustment {
            percent_delta,
            ..Adjustment::default()
        };
        assert_eq!(
            load_label(mode, Units::Metric, 90.0, 0.75, &adjustment),
            expected
        );
    }

    #[test]
    fn test_effective_percent() {
        assert_approx_eq!(effective_percent(0.5, &Adjustment::default()), 0.5);
        assert_approx_eq!(
            effective_percent(
                0.5,
                &Adjustment {
                    percent_delta: Some(-0.7),
                    ..Adjustment::default()
                }
            ),
            0.0
        );
    }

    #[test]
    fn test_load_kg() {
        assert_approx_eq!(Load::Cue("RIR 2".to_string()).kg(), 0.0);
        assert_approx_eq!(
            Load::Quantity(Mass::from_kg(67.5, Units::Metric)).kg(),
            67.5
        );
        assert_approx_eq!(
            Load::Quantity(Mass::from_kg(76.5, Units::Imperial)).kg(),
            170.0 / KG_TO_LB
        );
    }

    #[rstest]
    #[case(EquipmentMode::Machine, "Bodyweight / RIR 2-3")]
    #[case(EquipmentMode::FreeWeight, "As needed")]
    fn test_load_generic(#[case] mode: EquipmentMode, #[case] expected: &str) {
        assert_eq!(Load::generic(mode).to_string(), expected);
    }

    #[rstest]
    #[case("76.5 kg", 76.5)]
    #[case("76.5kg", 76.5)]
    #[case(" 100 KG ", 100.0)]
    #[case("170 lb", 170.0 / KG_TO_LB)]
    #[case("RIR 2", 0.0)]
    #[case("Bodyweight / RIR 2-3", 0.0)]
    #[case("As needed", 0.0)]
    #[case("12 reps", 0.0)]
    #[case("", 0.0)]
    fn test_parse_load_to_kg(#[case] label: &str, #[case] expected: f64) {
        assert_approx_eq!(parse_load_to_kg(label), expected);
    }

    #[rstest]
    #[case(Units::Metric, 0.75)]
    #[case(Units::Imperial, 0.85)]
    fn test_parse_load_to_kg_of_formatted_load(#[case] units: Units, #[case] percent: f64) {
        let load = load(
            EquipmentMode::FreeWeight,
            units,
            90.0,
            percent,
            &Adjustment::default(),
        );
        assert_approx_eq!(parse_load_to_kg(&load.to_string()), load.kg());
    }
}
