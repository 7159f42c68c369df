use serde::{Deserialize, Serialize};

use crate::core::{analyze, AnalysisResult, AxisError, Calibration, Mode, Point};

/// Number of leading clicks that define the calibration reference.
pub const CALIBRATION_POINT_COUNT: usize = 2;

/// Snapshot of one planning session on one radiograph.
///
/// The front end owns the lifecycle: a session is built when an image is
/// loaded and replaced on every edit. Every `with_*` method returns a new
/// session and recomputes the calibration when its inputs change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanningSession {
    mode: Mode,
    known_mm: f64,
    calibration_points: Vec<Point>,
    landmarks: Vec<Point>,
    calibration: Option<Calibration>,
}

impl PlanningSession {
    /// Build a session from the raw click list.
    ///
    /// The first two clicks are the calibration reference, the rest are
    /// landmarks in the order given by [`Mode::landmark_labels`].
    pub fn from_clicks(mode: Mode, clicks: &[Point], known_mm: f64) -> Self {
        let split = clicks.len().min(CALIBRATION_POINT_COUNT);
        let (calibration_points, landmarks) = clicks.split_at(split);
        let calibration = match calibration_points {
            [p1, p2] => Some(Calibration::new(*p1, *p2, known_mm)),
            _ => None,
        };
        Self {
            mode,
            known_mm,
            calibration_points: calibration_points.to_vec(),
            landmarks: landmarks.to_vec(),
            calibration,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn known_mm(&self) -> f64 {
        self.known_mm
    }

    pub fn calibration_points(&self) -> &[Point] {
        &self.calibration_points
    }

    pub fn landmarks(&self) -> &[Point] {
        &self.landmarks
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    /// Scale factor, only when the calibration exists and is non-degenerate.
    pub fn mm_per_pixel(&self) -> Option<f64> {
        self.calibration
            .filter(Calibration::is_usable)
            .map(|c| c.mm_per_pixel)
    }

    pub fn landmarks_complete(&self) -> bool {
        self.landmarks.len() == self.mode.landmark_count()
    }

    /// Label of the next landmark to place, `None` once the set is complete
    /// or overfull.
    pub fn next_landmark_label(&self) -> Option<&'static str> {
        self.mode.landmark_labels().get(self.landmarks.len()).copied()
    }

    /// Switch radiograph type, keeping all placed points.
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    pub fn with_known_mm(&self, known_mm: f64) -> Self {
        Self {
            known_mm,
            calibration: self.calibration.map(|c| c.with_known_mm(known_mm)),
            ..self.clone()
        }
    }

    /// Replace the click list (points added, moved or removed).
    pub fn with_clicks(&self, clicks: &[Point]) -> Self {
        Self::from_clicks(self.mode, clicks, self.known_mm)
    }

    /// Baseline angles for the current landmarks.
    pub fn analyze(&self) -> Result<AnalysisResult, AxisError> {
        analyze(self.mode, &self.landmarks)
    }
}
