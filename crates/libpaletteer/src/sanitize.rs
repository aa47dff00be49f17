//! Numeric clamps for every legal channel range.
//!
//! Every conversion finishes by passing its output fields through one of these, so a value
//! produced by the engine always satisfies the range invariant of its format. None of them can
//! fail: NaN collapses to the lower bound and out-of-range input is pulled back into range.

use crate::color::{XYZ_MAX_X, XYZ_MAX_Y, XYZ_MAX_Z};

pub fn sanitize_percentage(value: f64) -> f64 {
    clamp_finite(value, 0.0, 100.0).round() + 0.0
}

/// Hues wrap, so a clamped 360 becomes 0.
pub fn sanitize_radial(value: f64) -> f64 {
    (clamp_finite(value, 0.0, 360.0).round() % 360.0) + 0.0
}

pub fn sanitize_rgb_byte(value: f64) -> f64 {
    clamp_finite(value, 0.0, 255.0).round() + 0.0
}

pub fn sanitize_lab(value: f64) -> f64 {
    clamp_finite(value, -125.0, 125.0).round() + 0.0
}

pub fn sanitize_alpha(value: f64) -> f64 {
    round_to(clamp_finite(value, 0.0, 1.0), 2)
}

pub fn sanitize_xyz(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    (
        clamp_finite(x, 0.0, XYZ_MAX_X),
        clamp_finite(y, 0.0, XYZ_MAX_Y),
        clamp_finite(z, 0.0, XYZ_MAX_Z),
    )
}

/// Rounds half away from zero to the given number of decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor + 0.0
}

/// Like `f64::clamp`, but NaN maps to `min` instead of propagating. Adding `0.0` turns a
/// negative zero into a positive one so it never renders as `-0`.
pub(crate) fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max) + 0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn percentage_is_rounded_and_clamped() {
        assert_eq!(sanitize_percentage(49.5), 50.0);
        assert_eq!(sanitize_percentage(-3.0), 0.0);
        assert_eq!(sanitize_percentage(180.2), 100.0);
        assert_eq!(sanitize_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn radial_wraps_full_circle_to_zero() {
        assert_eq!(sanitize_radial(359.6), 0.0);
        assert_eq!(sanitize_radial(360.0), 0.0);
        assert_eq!(sanitize_radial(400.0), 0.0);
        assert_eq!(sanitize_radial(120.4), 120.0);
        assert_eq!(sanitize_radial(-20.0), 0.0);
    }

    #[test]
    fn rgb_byte_is_rounded_and_clamped() {
        assert_eq!(sanitize_rgb_byte(254.5), 255.0);
        assert_eq!(sanitize_rgb_byte(300.0), 255.0);
        assert_eq!(sanitize_rgb_byte(-0.4), 0.0);
        assert!(sanitize_rgb_byte(-0.4).is_sign_positive());
    }

    #[test]
    fn lab_axis_is_rounded_and_clamped() {
        assert_eq!(sanitize_lab(-130.0), -125.0);
        assert_eq!(sanitize_lab(80.09), 80.0);
        assert_eq!(sanitize_lab(125.7), 125.0);
    }

    #[test]
    fn alpha_keeps_two_decimals() {
        assert_eq!(sanitize_alpha(0.456), 0.46);
        assert_eq!(sanitize_alpha(1.5), 1.0);
        assert_eq!(sanitize_alpha(-1.0), 0.0);
    }

    #[test]
    fn xyz_is_clamped_to_reference_white() {
        assert_eq!(sanitize_xyz(95.05, 100.0, 108.9), (95.047, 100.0, 108.883));
        assert_eq!(sanitize_xyz(-1.0, 20.0, 3.0), (0.0, 20.0, 3.0));
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(53.2408, 2), 53.24);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }
}
