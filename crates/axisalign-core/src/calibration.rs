use log::debug;
use serde::{Deserialize, Serialize};

use crate::{AxisError, Point};

/// Millimetres per pixel from a reference of known physical length.
///
/// Coincident reference points give `0.0` instead of an error. A zero ratio
/// collapses every downstream linear measurement to zero, which is how the
/// unusable calibration shows up to callers. Use [`Calibration::try_new`]
/// to get an explicit [`AxisError::DegenerateCalibration`] instead.
///
/// `known_mm` is not validated.
pub fn resolve_calibration(p1: Point, p2: Point, known_mm: f64) -> f64 {
    let pixel_distance = nalgebra::distance(&p1, &p2);
    if pixel_distance == 0.0 {
        debug!("calibration points coincide at ({}, {})", p1.x, p1.y);
        return 0.0;
    }
    known_mm / pixel_distance
}

/// Two-point radiographic scale reference and its derived ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub p1: Point,
    pub p2: Point,
    /// Physical length between `p1` and `p2`, in millimetres.
    pub known_mm: f64,
    pub mm_per_pixel: f64,
}

impl Calibration {
    pub fn new(p1: Point, p2: Point, known_mm: f64) -> Self {
        Self {
            p1,
            p2,
            known_mm,
            mm_per_pixel: resolve_calibration(p1, p2, known_mm),
        }
    }

    /// Like [`Calibration::new`] but rejects coincident reference points.
    pub fn try_new(p1: Point, p2: Point, known_mm: f64) -> Result<Self, AxisError> {
        let cal = Self::new(p1, p2, known_mm);
        if cal.pixel_distance() == 0.0 {
            return Err(AxisError::DegenerateCalibration);
        }
        Ok(cal)
    }

    pub fn pixel_distance(&self) -> f64 {
        nalgebra::distance(&self.p1, &self.p2)
    }

    /// `false` when the ratio is the zero sentinel (or otherwise unusable).
    pub fn is_usable(&self) -> bool {
        self.mm_per_pixel.is_finite() && self.mm_per_pixel > 0.0
    }

    /// Recompute for new reference points, keeping the known length.
    pub fn with_points(&self, p1: Point, p2: Point) -> Self {
        Self::new(p1, p2, self.known_mm)
    }

    /// Recompute for a new known length, keeping the reference points.
    pub fn with_known_mm(&self, known_mm: f64) -> Self {
        Self::new(self.p1, self.p2, known_mm)
    }

    #[inline]
    pub fn to_mm(&self, pixels: f64) -> f64 {
        pixels * self.mm_per_pixel
    }
}
