use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{angle_between_vectors, AxisError, Metric, Mode, Point};

/// Computed angles in degrees, keyed by metric.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    angles: BTreeMap<Metric, f64>,
}

impl AnalysisResult {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.angles.get(&metric).copied()
    }

    pub fn hka(&self) -> Option<f64> {
        self.get(Metric::Hka)
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Metrics in dispatch order (HKA, mLDFA, mMPTA).
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.angles.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(Metric, f64)> for AnalysisResult {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self {
            angles: iter.into_iter().collect(),
        }
    }
}

/// Evaluate every metric of `mode` on an ordered landmark list.
///
/// The landmark count must equal [`Mode::landmark_count`]; anything else is
/// rejected before a single index is touched.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(landmarks), fields(n = landmarks.len()))
)]
pub fn analyze(mode: Mode, landmarks: &[Point]) -> Result<AnalysisResult, AxisError> {
    let expected = mode.landmark_count();
    if landmarks.len() != expected {
        return Err(AxisError::LandmarkCountMismatch {
            mode,
            expected,
            got: landmarks.len(),
        });
    }

    let result: AnalysisResult = mode
        .metrics()
        .iter()
        .map(|spec| {
            let [a0, a1] = spec.a;
            let [b0, b1] = spec.b;
            let deg = angle_between_vectors(
                &landmarks[a0],
                &landmarks[a1],
                &landmarks[b0],
                &landmarks[b1],
            );
            (spec.metric, deg)
        })
        .collect();

    debug!("{mode}: {} metrics computed", result.len());
    Ok(result)
}

/// [`analyze`] keyed by a mode name.
///
/// A name that matches no known mode yields an empty result rather than an
/// error, so newer front ends can send modes this engine does not know yet.
pub fn analyze_named(mode: &str, landmarks: &[Point]) -> Result<AnalysisResult, AxisError> {
    match mode.parse::<Mode>() {
        Ok(mode) => analyze(mode, landmarks),
        Err(_) => {
            debug!("no dispatch entry for mode {mode:?}");
            Ok(AnalysisResult::default())
        }
    }
}
