//! Vector-angle primitives in image pixel space.

use nalgebra::{Point2, Rotation2};

/// Landmark position in image pixels.
pub type Point = Point2<f64>;

/// Angle of vector `p1 -> p2` measured from the positive x axis, in radians.
#[inline]
pub fn heading(p1: &Point, p2: &Point) -> f64 {
    let v = p2 - p1;
    v.y.atan2(v.x)
}

/// Unsigned angle between vector `p1 -> p2` and vector `p3 -> p4`, in degrees.
///
/// This is the absolute difference of the two `atan2` headings. It is not
/// folded into `[0, 180]`: collinear same-direction vectors give `0`, and
/// depending on landmark order the result can lie anywhere in `[0, 360)`.
/// Use [`normalized_angle_between_vectors`] when a folded value is wanted.
pub fn angle_between_vectors(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> f64 {
    (heading(p1, p2) - heading(p3, p4)).to_degrees().abs()
}

/// Same as [`angle_between_vectors`] but folded into `[0, 180]`.
pub fn normalized_angle_between_vectors(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> f64 {
    let raw = angle_between_vectors(p1, p2, p3, p4) % 360.0;
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Rotate `p` about `pivot` by `angle_deg`, counter-clockwise positive in the
/// pixel frame.
#[inline]
pub fn rotate_about(p: &Point, pivot: &Point, angle_deg: f64) -> Point {
    let rot = Rotation2::new(angle_deg.to_radians());
    pivot + rot * (p - pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn orthogonal_axes_are_ninety_degrees() {
        let a = angle_between_vectors(
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 0.0),
            &Point::new(0.0, 0.0),
            &Point::new(0.0, 1.0),
        );
        assert_abs_diff_eq!(a, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn raw_angle_is_not_folded() {
        // headings of +170 and -170 degrees
        let p0 = Point::origin();
        let a = Point::new((170.0f64).to_radians().cos(), (170.0f64).to_radians().sin());
        let b = Point::new(
            (-170.0f64).to_radians().cos(),
            (-170.0f64).to_radians().sin(),
        );
        assert_abs_diff_eq!(angle_between_vectors(&p0, &a, &p0, &b), 340.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            normalized_angle_between_vectors(&p0, &a, &p0, &b),
            20.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn opposite_vectors_are_one_eighty() {
        let a = angle_between_vectors(
            &Point::new(0.0, 0.0),
            &Point::new(0.0, 10.0),
            &Point::new(0.0, 10.0),
            &Point::new(0.0, 0.0),
        );
        assert_abs_diff_eq!(a, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_is_counter_clockwise_positive() {
        let q = rotate_about(&Point::new(2.0, 1.0), &Point::new(1.0, 1.0), 90.0);
        assert_abs_diff_eq!(q.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, 2.0, epsilon = 1e-12);
    }
}
