//! High-level facade for the `axisalign-*` workspace.
//!
//! This crate provides:
//! - re-exports of the geometric engine in [`core`]
//! - [`session::PlanningSession`], an immutable snapshot of the points a
//!   clinician placed on one radiograph
//! - [`plan::SurgicalPlan`], baseline metrics plus a simulated correction
//! - JSON config/report helpers in [`io`] and a text report in [`report`]
//!
//! ## Quickstart
//!
//! ```
//! use axisalign::core::{Mode, Point};
//! use axisalign::{PlanningSession, SurgicalPlan};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let clicks = [
//!     Point::new(50.0, 50.0),   // calibration marker, 25 mm apart
//!     Point::new(50.0, 100.0),
//!     Point::new(0.0, 0.0),     // hip centre
//!     Point::new(0.0, 100.0),   // knee centre
//!     Point::new(-20.0, 100.0), // lateral condyle
//!     Point::new(20.0, 100.0),  // medial condyle
//! ];
//! let session = PlanningSession::from_clicks(Mode::FemurOnly, &clicks, 25.0);
//! let plan = SurgicalPlan::build(&session, 5.0)?;
//! println!("{}", axisalign::report::render_text(&plan));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `axisalign::core`: points, modes, calibration, angle analysis, rotation, wedge.
//! - `axisalign::session`: planning session built from raw clicks.
//! - `axisalign::plan`: surgical plan for one correction angle.
//! - `axisalign::io`: JSON config and report files.
//! - `axisalign::report`: printable text summary.

pub use axisalign_core as core;

pub mod io;
pub mod plan;
pub mod report;
pub mod session;

pub use axisalign_core::{AnalysisResult, AxisError, Calibration, Metric, Mode, Point};
pub use plan::{SurgicalPlan, MAX_CORRECTION_DEG};
pub use session::PlanningSession;
