//! JSON configuration and report helpers for the planning pipeline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::{AxisError, Calibration, Mode, Point};
use crate::plan::SurgicalPlan;
use crate::session::PlanningSession;

#[derive(thiserror::Error, Debug)]
pub enum PlanIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Axis(#[from] AxisError),
}

/// Default radiographic marker size, in millimetres.
fn default_known_mm() -> f64 {
    25.0
}

/// Input for one planning run.
///
/// `points` is the click list in placement order: two calibration points
/// followed by the mode's landmarks, each as `[x, y]` in image pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub mode: Mode,
    #[serde(default = "default_known_mm")]
    pub known_mm: f64,
    pub points: Vec<Point>,
    #[serde(default)]
    pub correction_deg: f64,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl PlanConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PlanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PlanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("axisalign_plan_report.json"))
    }

    pub fn build_session(&self) -> PlanningSession {
        PlanningSession::from_clicks(self.mode, &self.points, self.known_mm)
    }

    pub fn build_plan(&self) -> Result<SurgicalPlan, AxisError> {
        SurgicalPlan::build(&self.build_session(), self.correction_deg)
    }
}

/// Result of a planning run as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub config_path: String,
    pub mode: Mode,
    pub num_landmarks: usize,
    #[serde(default)]
    pub calibration: Option<Calibration>,
    #[serde(default)]
    pub plan: Option<SurgicalPlan>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PlanReport {
    /// Build a base report from the input config.
    pub fn new(cfg: &PlanConfig, config_path: &Path) -> Self {
        let session = cfg.build_session();
        Self {
            config_path: config_path.to_string_lossy().into_owned(),
            mode: cfg.mode,
            num_landmarks: session.landmarks().len(),
            calibration: session.calibration().copied(),
            plan: None,
            error: None,
        }
    }

    /// Populate report fields from a successful plan.
    pub fn set_plan(&mut self, plan: SurgicalPlan) {
        self.plan = Some(plan);
        self.error = None;
    }

    /// Record a planning error.
    pub fn set_error(&mut self, err: AxisError) {
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PlanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PlanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEMUR_CONFIG: &str = r#"{
        "mode": "femur-only",
        "points": [[50, 50], [50, 100], [0, 0], [0, 100], [-20, 100], [20, 100]],
        "correction_deg": 5.0
    }"#;

    #[test]
    fn config_defaults_apply() {
        let cfg: PlanConfig = serde_json::from_str(FEMUR_CONFIG).expect("parse config");
        assert_eq!(cfg.mode, Mode::FemurOnly);
        assert_eq!(cfg.known_mm, 25.0);
        assert_eq!(cfg.points.len(), 6);
        assert_eq!(cfg.output_path(), PathBuf::from("axisalign_plan_report.json"));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let raw = r#"{ "mode": "pelvis", "points": [] }"#;
        assert!(serde_json::from_str::<PlanConfig>(raw).is_err());
    }

    #[test]
    fn report_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg: PlanConfig = serde_json::from_str(FEMUR_CONFIG).expect("parse config");
        let cfg_path = dir.path().join("plan.json");
        cfg.write_json(&cfg_path).expect("write config");
        let cfg = PlanConfig::load_json(&cfg_path).expect("load config");

        let mut report = PlanReport::new(&cfg, &cfg_path);
        report.set_plan(cfg.build_plan().expect("plan"));
        let out = dir.path().join("report.json");
        report.write_json(&out).expect("write report");

        let back = PlanReport::load_json(&out).expect("load report");
        assert_eq!(back.num_landmarks, 4);
        assert!(back.error.is_none());
        let plan = back.plan.expect("plan present");
        assert_eq!(plan.mode, Mode::FemurOnly);
        assert!(plan.wedge_height_mm.is_some());
    }

    #[test]
    fn report_records_errors() {
        let mut cfg: PlanConfig = serde_json::from_str(FEMUR_CONFIG).expect("parse config");
        cfg.points.truncate(4);
        let mut report = PlanReport::new(&cfg, Path::new("plan.json"));
        let err = cfg.build_plan().unwrap_err();
        report.set_error(err);
        assert_eq!(report.num_landmarks, 2);
        assert!(report
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("insufficient landmarks")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PlanConfig::load_json("/nonexistent/axisalign/plan.json").unwrap_err();
        assert!(matches!(err, PlanIoError::Io(_)));
    }
}
