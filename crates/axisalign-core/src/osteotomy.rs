//! Corrective osteotomy simulation: distal-segment rotation and wedge sizing.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{rotate_about, Point};

/// Rotate every landmark after `hinge_index` about the hinge landmark.
///
/// Landmarks at or before the hinge are copied unchanged. An empty list or
/// an out-of-range hinge returns a copy of the input. The input is never
/// modified.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(landmarks), fields(n = landmarks.len()))
)]
pub fn simulate_rotation(landmarks: &[Point], hinge_index: usize, angle_deg: f64) -> Vec<Point> {
    let Some(pivot) = landmarks.get(hinge_index).copied() else {
        return landmarks.to_vec();
    };

    landmarks
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i > hinge_index {
                rotate_about(p, &pivot, angle_deg)
            } else {
                *p
            }
        })
        .collect()
}

/// Opening-wedge height in millimetres for a correction of `angle_deg_abs`
/// across a bone `bone_width_px` pixels wide.
///
/// `height = width * tan(angle) * mm_per_pixel`; any zero input gives zero.
#[inline]
pub fn wedge_height(bone_width_px: f64, angle_deg_abs: f64, mm_per_pixel: f64) -> f64 {
    bone_width_px * angle_deg_abs.to_radians().tan() * mm_per_pixel
}
