use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AxisError;

/// Clinical angle reported by the analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Hip-knee-ankle angle.
    #[serde(rename = "HKA")]
    Hka,
    /// Mechanical lateral distal femoral angle.
    #[serde(rename = "mLDFA")]
    Mldfa,
    /// Mechanical medial proximal tibial angle.
    #[serde(rename = "mMPTA")]
    Mmpta,
}

impl Metric {
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Hka => "HKA",
            Metric::Mldfa => "mLDFA",
            Metric::Mmpta => "mMPTA",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a mode's dispatch table.
///
/// The metric is the angle between vector `a[0] -> a[1]` and vector
/// `b[0] -> b[1]`, with indices into the mode's landmark list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricSpec {
    pub metric: Metric,
    pub a: [usize; 2],
    pub b: [usize; 2],
}

const FULL_LEG_LABELS: [&str; 7] = [
    "Hip Center",
    "Knee Center",
    "Ankle Center",
    "Fem Lat Condyle",
    "Fem Med Condyle",
    "Tib Lat Plateau",
    "Tib Med Plateau",
];

const FEMUR_ONLY_LABELS: [&str; 4] = [
    "Hip Center",
    "Knee Center",
    "Fem Lat Condyle",
    "Fem Med Condyle",
];

const TIBIA_ONLY_LABELS: [&str; 4] = [
    "Knee Center",
    "Ankle Center",
    "Tib Lat Plateau",
    "Tib Med Plateau",
];

const FULL_LEG_METRICS: [MetricSpec; 3] = [
    MetricSpec {
        metric: Metric::Hka,
        a: [0, 1],
        b: [1, 2],
    },
    MetricSpec {
        metric: Metric::Mldfa,
        a: [0, 1],
        b: [3, 4],
    },
    MetricSpec {
        metric: Metric::Mmpta,
        a: [1, 2],
        b: [5, 6],
    },
];

const FEMUR_ONLY_METRICS: [MetricSpec; 1] = [MetricSpec {
    metric: Metric::Mldfa,
    a: [0, 1],
    b: [2, 3],
}];

const TIBIA_ONLY_METRICS: [MetricSpec; 1] = [MetricSpec {
    metric: Metric::Mmpta,
    a: [0, 1],
    b: [2, 3],
}];

/// Radiograph type: selects the landmark schema and the derived angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Hip to ankle, seven landmarks, reports HKA, mLDFA and mMPTA.
    FullLeg,
    /// Distal femur, four landmarks, reports mLDFA.
    FemurOnly,
    /// Proximal tibia, four landmarks, reports mMPTA.
    TibiaOnly,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::FullLeg, Mode::FemurOnly, Mode::TibiaOnly];

    /// Short identifier used in config files and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Mode::FullLeg => "full-leg",
            Mode::FemurOnly => "femur-only",
            Mode::TibiaOnly => "tibia-only",
        }
    }

    /// Human-readable name shown to the clinician.
    pub const fn display_name(self) -> &'static str {
        match self {
            Mode::FullLeg => "Full Leg (HKA)",
            Mode::FemurOnly => "Femur Only (mLDFA)",
            Mode::TibiaOnly => "Tibia Only (mMPTA)",
        }
    }

    /// Anatomical role of each landmark, in placement order.
    pub const fn landmark_labels(self) -> &'static [&'static str] {
        match self {
            Mode::FullLeg => &FULL_LEG_LABELS,
            Mode::FemurOnly => &FEMUR_ONLY_LABELS,
            Mode::TibiaOnly => &TIBIA_ONLY_LABELS,
        }
    }

    /// Number of landmarks required before any angle can be computed.
    pub const fn landmark_count(self) -> usize {
        self.landmark_labels().len()
    }

    pub const fn metrics(self) -> &'static [MetricSpec] {
        match self {
            Mode::FullLeg => &FULL_LEG_METRICS,
            Mode::FemurOnly => &FEMUR_ONLY_METRICS,
            Mode::TibiaOnly => &TIBIA_ONLY_METRICS,
        }
    }

    /// Index of the knee-centre landmark, the hinge of the simulated
    /// osteotomy.
    pub const fn hinge_index(self) -> usize {
        match self {
            Mode::FullLeg | Mode::FemurOnly => 1,
            Mode::TibiaOnly => 0,
        }
    }

    /// Lateral and medial femoral condyle indices, used as the bone width
    /// across the osteotomy.
    pub const fn condyle_indices(self) -> Option<[usize; 2]> {
        match self {
            Mode::FullLeg => Some([3, 4]),
            Mode::FemurOnly => Some([2, 3]),
            Mode::TibiaOnly => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mode {
    type Err = AxisError;

    /// Accepts either the short id (`femur-only`) or the display name
    /// (`Femur Only (mLDFA)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s) || m.display_name() == s)
            .ok_or_else(|| AxisError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_counts_match_schema() {
        assert_eq!(Mode::FullLeg.landmark_count(), 7);
        assert_eq!(Mode::FemurOnly.landmark_count(), 4);
        assert_eq!(Mode::TibiaOnly.landmark_count(), 4);
    }

    #[test]
    fn dispatch_tables_stay_in_bounds() {
        for mode in Mode::ALL {
            let n = mode.landmark_count();
            assert!(!mode.metrics().is_empty());
            for spec in mode.metrics() {
                for idx in spec.a.iter().chain(spec.b.iter()) {
                    assert!(*idx < n, "{mode}: {} index {idx} >= {n}", spec.metric);
                }
            }
            assert_eq!(mode.landmark_labels()[mode.hinge_index()], "Knee Center");
            if let Some([lat, med]) = mode.condyle_indices() {
                assert!(lat < n && med < n);
                assert!(mode.landmark_labels()[lat].starts_with("Fem Lat"));
                assert!(mode.landmark_labels()[med].starts_with("Fem Med"));
            }
        }
    }

    #[test]
    fn full_leg_table_matches_clinical_definitions() {
        let specs = Mode::FullLeg.metrics();
        assert_eq!(specs[0].metric, Metric::Hka);
        assert_eq!((specs[0].a, specs[0].b), ([0, 1], [1, 2]));
        assert_eq!(specs[1].metric, Metric::Mldfa);
        assert_eq!((specs[1].a, specs[1].b), ([0, 1], [3, 4]));
        assert_eq!(specs[2].metric, Metric::Mmpta);
        assert_eq!((specs[2].a, specs[2].b), ([1, 2], [5, 6]));
    }

    #[test]
    fn parses_ids_and_display_names() {
        assert_eq!("full-leg".parse::<Mode>(), Ok(Mode::FullLeg));
        assert_eq!(" Femur-Only ".parse::<Mode>(), Ok(Mode::FemurOnly));
        assert_eq!("Tibia Only (mMPTA)".parse::<Mode>(), Ok(Mode::TibiaOnly));
        assert_eq!(
            "pelvis".parse::<Mode>(),
            Err(AxisError::UnknownMode("pelvis".to_string()))
        );
    }

    #[test]
    fn serde_uses_short_ids_and_metric_names() {
        let json = serde_json::to_string(&Mode::FemurOnly).expect("serialize mode");
        assert_eq!(json, "\"femur-only\"");
        let metric = serde_json::to_string(&Metric::Mldfa).expect("serialize metric");
        assert_eq!(metric, "\"mLDFA\"");
        let back: Mode = serde_json::from_str("\"tibia-only\"").expect("deserialize mode");
        assert_eq!(back, Mode::TibiaOnly);
    }
}
