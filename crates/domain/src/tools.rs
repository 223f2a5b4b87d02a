use std::fmt;

/// Reps considered by the one-rep max estimates.
pub const ESTIMATE_REPS: std::ops::RangeInclusive<u32> = 1..=12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneRepMaxEstimate {
    pub epley: f64,
    pub brzycki: f64,
}

/// Estimate the one-rep max from a set of `reps` repetitions with `weight`.
///
/// Reps outside of 1 to 12 are clamped, as the formulas lose their accuracy beyond.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> OneRepMaxEstimate {
    let reps = f64::from(reps.clamp(*ESTIMATE_REPS.start(), *ESTIMATE_REPS.end()));
    OneRepMaxEstimate {
        epley: weight * (1.0 + reps / 30.0),
        brzycki: weight * (36.0 / (37.0 - reps)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlateLoading {
    /// Plate weight and count per side, heaviest first.
    pub per_side: Vec<(f64, u32)>,
    /// Weight per side that cannot be loaded with the available plates.
    pub remaining: f64,
}

impl fmt::Display for PlateLoading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.per_side.is_empty() {
            write!(f, "—")
        } else {
            write!(
                f,
                "{}",
                self.per_side
                    .iter()
                    .map(|(plate, count)| format!("{count} × {plate}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

/// Greedily distribute the weight above the bar to both sides.
///
/// Each plate size is used as often as possible before moving on to the next lighter one.
pub fn plates(target: f64, bar: f64, available: &[f64]) -> Result<PlateLoading, PlateError> {
    if target.is_nan() || target <= bar {
        return Err(PlateError::TargetNotAboveBar);
    }

    let mut plates = available
        .iter()
        .copied()
        .filter(|p| p.is_finite() && *p > 0.0)
        .collect::<Vec<_>>();
    plates.sort_by(|a, b| b.total_cmp(a));

    let mut remaining = (target - bar) / 2.0;
    let mut per_side = vec![];
    for plate in plates {
        // Saturates for counts beyond u32::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = ((remaining + 1e-9) / plate).floor() as u32;
        if count > 0 {
            remaining = round_to_thousandth(remaining - f64::from(count) * plate);
            per_side.push((plate, count));
        }
    }

    Ok(PlateLoading {
        per_side,
        remaining: round_to_thousandth(remaining),
    })
}

/// Parse a comma separated list of plate weights. Entries that are not numbers are ignored.
#[must_use]
pub fn parse_plates(value: &str) -> Vec<f64> {
    value
        .split(',')
        .filter_map(|p| p.trim().parse::<f64>().ok())
        .collect()
}

fn round_to_thousandth(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlateError {
    #[error("Target must be greater than bar weight")]
    TargetNotAboveBar,
}
