#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub summary: &'static str,
    pub stretches: &'static [Stretch],
    pub massage: &'static [Massage],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stretch {
    pub name: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Massage {
    pub area: &'static str,
    pub duration: &'static str,
}

const SUMMARY: &str =
    "5–10 min light cardio cool‑down, then targeted stretches and optional massage gun.";

/// Cool-down suggestions matching the focus named in the day name.
#[must_use]
pub fn recovery_for_day(day_name: &str) -> Recovery {
    let name = day_name.to_lowercase();
    let (stretches, massage) = if name.contains("lower") {
        (LOWER_STRETCHES, LOWER_MASSAGE)
    } else if name.contains("upper") {
        (UPPER_STRETCHES, UPPER_MASSAGE)
    } else if ["explosive", "conditioning", "sprint", "strike"]
        .iter()
        .any(|k| name.contains(k))
    {
        (CONDITIONING_STRETCHES, CONDITIONING_MASSAGE)
    } else if name.contains("mixed") || name.contains("stability") {
        (STABILITY_STRETCHES, STABILITY_MASSAGE)
    } else {
        (GENERIC_STRETCHES, NO_MASSAGE)
    };
    Recovery {
        summary: SUMMARY,
        stretches,
        massage,
    }
}

const LOWER_STRETCHES: &[Stretch] = &[
    Stretch {
        name: "Hamstring stretch",
        duration: "2×30s/side",
    },
    Stretch {
        name: "Hip flexor lunge",
        duration: "2×30s/side",
    },
    Stretch {
        name: "Calf stretch (wall)",
        duration: "2×30s/side",
    },
];

const LOWER_MASSAGE: &[Massage] = &[
    Massage {
        area: "Quads",
        duration: "60–90s/leg",
    },
    Massage {
        area: "Glutes",
        duration: "60s/side",
    },
    Massage {
        area: "Calves",
        duration: "60s/side",
    },
];

const UPPER_STRETCHES: &[Stretch] = &[
    Stretch {
        name: "Doorway chest stretch",
        duration: "2×30s",
    },
    Stretch {
        name: "Lat stretch (overhead)",
        duration: "2×30s/side",
    },
    Stretch {
        name: "Sleeper stretch",
        duration: "2×30s/side",
    },
];

const UPPER_MASSAGE: &[Massage] = &[
    Massage {
        area: "Pecs",
        duration: "45–60s/side",
    },
    Massage {
        area: "Lats",
        duration: "60s/side",
    },
    Massage {
        area: "Rear delts",
        duration: "45s/side",
    },
];

const CONDITIONING_STRETCHES: &[Stretch] = &[
    Stretch {
        name: "Hip flexor lunge",
        duration: "2×30s/side",
    },
    Stretch {
        name: "T‑spine openers",
        duration: "2×30s/side",
    },
    Stretch {
        name: "Ankle dorsiflexion wall drill",
        duration: "2×30s/side",
    },
];

const CONDITIONING_MASSAGE: &[Massage] = &[
    Massage {
        area: "Calves",
        duration: "60s/side",
    },
    Massage {
        area: "Hip flexors",
        duration: "45s/side",
    },
];

const STABILITY_STRETCHES: &[Stretch] = &[
    Stretch {
        name: "Cat‑cow (spine)",
        duration: "1–2 min",
    },
    Stretch {
        name: "Figure‑4 glute stretch",
        duration: "2×30s/side",
    },
    Stretch {
        name: "Child’s pose + side reach",
        duration: "1–2 min",
    },
];

const STABILITY_MASSAGE: &[Massage] = &[
    Massage {
        area: "Glutes",
        duration: "60s/side",
    },
    Massage {
        area: "Mid‑back (erectors)",
        duration: "60–90s",
    },
];

const NO_MASSAGE: &[Massage] = &[];

const GENERIC_STRETCHES: &[Stretch] = &[
    Stretch {
        name: "Hamstrings",
        duration: "2×30s",
    },
    Stretch {
        name: "Chest",
        duration: "2×30s",
    },
    Stretch {
        name: "Hips",
        duration: "2×30s",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Day 1 – Lower Body Power", LOWER_STRETCHES, LOWER_MASSAGE)]
    #[case("Day 2 – Upper Push & Pull", UPPER_STRETCHES, UPPER_MASSAGE)]
    #[case("Day 3 – Explosive & Conditioning", CONDITIONING_STRETCHES, CONDITIONING_MASSAGE)]
    #[case("Sprint day", CONDITIONING_STRETCHES, CONDITIONING_MASSAGE)]
    #[case("Day 4 – Mixed Strength & Stability", STABILITY_STRETCHES, STABILITY_MASSAGE)]
    #[case("Full body", GENERIC_STRETCHES, &[])]
    #[case("", GENERIC_STRETCHES, &[])]
    fn test_recovery_for_day(
        #[case] day_name: &str,
        #[case] stretches: &[Stretch],
        #[case] massage: &[Massage],
    ) {
        let recovery = recovery_for_day(day_name);
        assert_eq!(recovery.summary, SUMMARY);
        assert_eq!(recovery.stretches, stretches);
        assert_eq!(recovery.massage, massage);
    }

    #[test]
    fn test_recovery_for_day_lower_before_upper() {
        assert_eq!(
            recovery_for_day("Upper and lower").stretches,
            LOWER_STRETCHES
        );
    }
}
