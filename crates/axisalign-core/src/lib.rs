//! Geometric analysis engine for knee-alignment osteotomy planning.
//!
//! Everything here is a pure function of its inputs: landmark points in
//! image pixels go in, angles, rotated points and millimetre measurements
//! come out. No image handling and no session state live in this crate.
//!
//! - [`resolve_calibration`] / [`Calibration`]: millimetres per pixel from a
//!   reference of known length.
//! - [`analyze`]: HKA, mLDFA and mMPTA for a [`Mode`] and its landmarks.
//! - [`simulate_rotation`]: distal-segment rotation about a hinge landmark.
//! - [`wedge_height`]: opening-wedge height for a correction angle.

mod analysis;
mod calibration;
mod error;
mod geometry;
mod logger;
mod mode;
mod osteotomy;

pub use analysis::{analyze, analyze_named, AnalysisResult};
pub use calibration::{resolve_calibration, Calibration};
pub use error::AxisError;
pub use geometry::{
    angle_between_vectors, heading, normalized_angle_between_vectors, rotate_about, Point,
};
pub use mode::{Metric, MetricSpec, Mode};
pub use osteotomy::{simulate_rotation, wedge_height};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
