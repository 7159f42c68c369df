//! Surgical plan: baseline metrics plus the simulated correction.

use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::core::{simulate_rotation, wedge_height, AnalysisResult, AxisError, Mode, Point};
use crate::session::PlanningSession;

/// Largest correction the planner accepts, in degrees either way.
pub const MAX_CORRECTION_DEG: f64 = 15.0;

/// Everything a report or an overlay needs for one planned correction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurgicalPlan {
    pub mode: Mode,
    /// Pre-operative angles in degrees.
    pub metrics: AnalysisResult,
    /// Signed correction, counter-clockwise positive in image pixels.
    pub correction_deg: f64,
    /// Baseline HKA plus `correction_deg`; `None` in modes without HKA.
    ///
    /// This is the planner's prediction, not a re-measurement of
    /// `simulated_landmarks`. Re-running the analysis on the rotated points
    /// agrees only when the knee-to-ankle heading exceeds the hip-to-knee
    /// heading; on a mirrored radiograph the same rotation reduces the raw
    /// HKA by the correction instead.
    pub simulated_hka: Option<f64>,
    pub hinge_index: usize,
    /// Landmarks after rotating the distal segment about the hinge.
    pub simulated_landmarks: Vec<Point>,
    /// Bone width across the femoral condyles, in pixels.
    pub bone_width_px: Option<f64>,
    /// Opening-wedge height; `None` without usable calibration or condyles.
    pub wedge_height_mm: Option<f64>,
}

impl SurgicalPlan {
    /// Plan a correction of `correction_deg` for a complete session.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(session), fields(mode = %session.mode()))
    )]
    pub fn build(session: &PlanningSession, correction_deg: f64) -> Result<Self, AxisError> {
        if correction_deg.is_nan() || correction_deg.abs() > MAX_CORRECTION_DEG {
            return Err(AxisError::CorrectionOutOfRange {
                angle_deg: correction_deg,
                max_deg: MAX_CORRECTION_DEG,
            });
        }

        let mode = session.mode();
        let metrics = session.analyze()?;
        let landmarks = session.landmarks();
        let hinge_index = mode.hinge_index();
        let simulated_landmarks = simulate_rotation(landmarks, hinge_index, correction_deg);

        let bone_width_px = mode
            .condyle_indices()
            .map(|[lat, med]| nalgebra::distance(&landmarks[lat], &landmarks[med]));
        let wedge_height_mm = match (bone_width_px, session.mm_per_pixel()) {
            (Some(width), Some(ratio)) => Some(wedge_height(width, correction_deg.abs(), ratio)),
            _ => {
                debug!("wedge height unavailable for {mode}");
                None
            }
        };

        let simulated_hka = metrics.hka().map(|hka| hka + correction_deg);
        let plan = Self {
            mode,
            metrics,
            correction_deg,
            simulated_hka,
            hinge_index,
            simulated_landmarks,
            bone_width_px,
            wedge_height_mm,
        };
        info!(
            "{mode}: correction {correction_deg:+.2} deg, wedge {}",
            plan.wedge_height_mm
                .map_or_else(|| "n/a".to_string(), |h| format!("{h:.2} mm"))
        );
        Ok(plan)
    }
}
