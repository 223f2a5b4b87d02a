use std::collections::BTreeMap;

use crate::{SessionKey, SessionRecord, WEEK_COUNT};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_days: u32,
    pub total_volume: f64,
    pub average_volume_per_day: f64,
}

/// Number of saved day records per week, for the weeks `1..=week_count`.
///
/// Weeks beyond the plan horizon are not reported.
#[must_use]
pub fn weekly_completion_counts(records: &[SessionRecord], week_count: u32) -> Vec<u32> {
    per_week(records, week_count, |_| 1, 0)
}

/// Estimated lifted volume in kilograms per week, for the weeks `1..=week_count`.
///
/// Weeks beyond the plan horizon are not reported.
/// Exercises with a cue instead of a numeric load count as zero volume.
#[must_use]
pub fn weekly_volume(records: &[SessionRecord], week_count: u32) -> Vec<f64> {
    per_week(records, week_count, SessionRecord::volume, 0.0)
}

#[must_use]
pub fn summary(records: &[SessionRecord]) -> Summary {
    let saved = saved_records(records);
    let total_days = u32::try_from(saved.len()).unwrap_or(u32::MAX);
    let total_volume = saved.values().map(|r| r.volume()).sum::<f64>();
    Summary {
        total_days,
        total_volume,
        average_volume_per_day: if total_days > 0 {
            total_volume / f64::from(total_days)
        } else {
            0.0
        },
    }
}

fn per_week<T: Copy + std::ops::AddAssign>(
    records: &[SessionRecord],
    week_count: u32,
    value: impl Fn(&SessionRecord) -> T,
    zero: T,
) -> Vec<T> {
    let week_count = week_count.min(WEEK_COUNT);
    let mut result = vec![zero; week_count as usize];
    for (key, record) in saved_records(records) {
        if key.week >= 1 && key.week <= week_count {
            result[(key.week - 1) as usize] += value(record);
        }
    }
    result
}

/// Saved records by week and day. A later record replaces an earlier one for the same day.
fn saved_records(records: &[SessionRecord]) -> BTreeMap<SessionKey, &SessionRecord> {
    records
        .iter()
        .filter(|r| r.is_saved())
        .map(|r| (r.key(), r))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{LoggedExercise, LoggedSession};

    #[test]
    fn test_weekly_volume() {
        let records = vec![record(3, 1, true, &[(5, 5, "76.5 kg", None)])];
        let mut expected = vec![0.0; 12];
        expected[2] = 1912.5;
        assert_eq!(weekly_volume(&records, WEEK_COUNT), expected);
    }

    #[test]
    fn test_weekly_volume_cues_count_as_zero() {
        let records = vec![
            record(
                1,
                1,
                true,
                &[(5, 5, "RIR 1", None), (3, 8, "100 kg", Some(100.0))],
            ),
            record(1, 2, true, &[(4, 6, "Bodyweight / RIR 2-3", None)]),
            record(2, 1, true, &[(5, 5, "170 lb", None)]),
        ];
        let volume = weekly_volume(&records, 2);
        assert_eq!(volume.len(), 2);
        assert_approx_eq!(volume[0], 2400.0);
        assert_approx_eq!(volume[1], 25.0 * 170.0 / crate::KG_TO_LB);
    }

    #[test]
    fn test_weekly_completion_counts() {
        let records = vec![
            record(1, 1, true, &[]),
            record(1, 2, true, &[]),
            record(1, 2, true, &[]),
            record(1, 3, false, &[]),
            record(4, 4, true, &[]),
            record(13, 1, true, &[]),
            record(0, 1, true, &[]),
        ];
        assert_eq!(
            weekly_completion_counts(&records, WEEK_COUNT),
            vec![2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_summary() {
        let records = vec![
            record(1, 1, true, &[(5, 5, "76.5 kg", None)]),
            record(1, 2, true, &[(1, 10, "RIR 2", None)]),
            record(2, 1, false, &[(5, 5, "100 kg", None)]),
        ];
        assert_eq!(
            summary(&records),
            Summary {
                total_days: 2,
                total_volume: 1912.5,
                average_volume_per_day: 956.25,
            }
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            summary(&[]),
            Summary {
                total_days: 0,
                total_volume: 0.0,
                average_volume_per_day: 0.0,
            }
        );
        assert_eq!(weekly_volume(&[], 3), vec![0.0; 3]);
        assert_eq!(weekly_completion_counts(&[], 0), Vec::<u32>::new());
    }

    #[test]
    fn test_week_count_beyond_plan() {
        let records = vec![record(12, 1, true, &[(5, 5, "76.5 kg", None)])];
        assert_eq!(weekly_volume(&records, u32::MAX).len(), 12);
        assert_eq!(
            weekly_completion_counts(&records, 13),
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    fn record(
        week: u32,
        day: u32,
        saved: bool,
        exercises: &[(u32, u32, &str, Option<f64>)],
    ) -> SessionRecord {
        SessionRecord {
            week,
            day,
            notes: String::new(),
            effort: None,
            session: LoggedSession {
                day_name: format!("Day {day}"),
                exercises: exercises
                    .iter()
                    .map(|(sets, reps, load_label, load_kg)| LoggedExercise {
                        name: "Leg Press".to_string(),
                        sets: *sets,
                        reps: *reps,
                        load_label: (*load_label).to_string(),
                        load_kg: *load_kg,
                        per_set_done: vec![false; *sets as usize],
                    })
                    .collect(),
            },
            saved_at: saved.then(|| Utc.with_ymd_and_hms(2026, 1, 5, 7, 0, 0).unwrap()),
        }
    }
}
