use crate::Mode;

/// Errors returned by the alignment engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    #[error("insufficient landmarks for {mode}: expected {expected}, got {got}")]
    LandmarkCountMismatch {
        mode: Mode,
        expected: usize,
        got: usize,
    },
    #[error("degenerate calibration: reference points coincide")]
    DegenerateCalibration,
    #[error("unknown analysis mode {0:?}")]
    UnknownMode(String),
    #[error("correction of {angle_deg:.2} deg is outside the +/-{max_deg:.1} deg planning range")]
    CorrectionOutOfRange { angle_deg: f64, max_deg: f64 },
}
