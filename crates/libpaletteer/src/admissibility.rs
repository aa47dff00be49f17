//! Too-gray, too-dark and too-bright tests for every format.
//!
//! The generator uses these to reject colors when the caller asked to keep grays, very dark
//! or very light colors out of a palette.

use crate::color::*;
use crate::convert;

/// Cut-off values for the admissibility tests.
///
/// `gray`, `dark` and `light` are percentages on the saturation, lightness, value or L axis
/// of the format being tested. The others tune the formats that have no such axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub gray: f64,
    pub dark: f64,
    pub light: f64,
    /// HSV and SV only count as too bright when also less saturated than this.
    pub hsv_bright_saturation: f64,
    /// Smallest max-min channel spread an RGB color needs to not be gray.
    pub rgb_gray_spread: f64,
    pub cmyk_gray_spread: f64,
    pub cmyk_dark_key: f64,
    pub cmyk_bright_ink: f64,
    pub lab_gray_axis: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            gray: 20.0,
            dark: 25.0,
            light: 75.0,
            hsv_bright_saturation: 40.0,
            rgb_gray_spread: 30.0,
            cmyk_gray_spread: 15.0,
            cmyk_dark_key: 75.0,
            cmyk_bright_ink: 10.0,
            lab_gray_axis: 10.0,
        }
    }
}

/// Which of the three tests are switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub gray: bool,
    pub dark: bool,
    pub light: bool,
}

impl Limits {
    pub fn any(&self) -> bool {
        self.gray || self.dark || self.light
    }
}

/// Admissibility predicates.
///
/// Implementors provide the raw checks, which may assume a valid value. The provided
/// methods validate first: an invalid value is logged and every predicate reports `false`,
/// including [`Admissible::is_admissible`].
pub trait Admissible: ColorValue {
    fn raw_too_gray(&self, thresholds: &Thresholds) -> bool;
    fn raw_too_dark(&self, thresholds: &Thresholds) -> bool;
    fn raw_too_bright(&self, thresholds: &Thresholds) -> bool;

    fn too_gray(&self, thresholds: &Thresholds) -> bool {
        checked(self, "too-gray") && self.raw_too_gray(thresholds)
    }

    fn too_dark(&self, thresholds: &Thresholds) -> bool {
        checked(self, "too-dark") && self.raw_too_dark(thresholds)
    }

    fn too_bright(&self, thresholds: &Thresholds) -> bool {
        checked(self, "too-bright") && self.raw_too_bright(thresholds)
    }

    fn is_admissible(&self, limits: Limits, thresholds: &Thresholds) -> bool {
        if !checked(self, "admissibility") {
            return false;
        }

        let too_gray = limits.gray && self.raw_too_gray(thresholds);
        let too_dark = limits.dark && self.raw_too_dark(thresholds);
        let too_bright = limits.light && self.raw_too_bright(thresholds);

        !(too_gray || too_dark || too_bright)
    }
}

fn checked<T: ColorValue>(value: &T, test: &str) -> bool {
    match value.validate() {
        Ok(()) => true,
        Err(invalid) => {
            warn!("Skipping {} test on invalid input: {}", test, invalid);
            false
        }
    }
}

fn spread(values: [f64; 3]) -> f64 {
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    max - min
}

impl Admissible for Hsl {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        self.saturation < t.gray
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.lightness < t.dark
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.lightness > t.light
    }
}

impl Admissible for Sl {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        self.saturation < t.gray
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.lightness < t.dark
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.lightness > t.light
    }
}

impl Admissible for Hsv {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        self.saturation < t.gray
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.value < t.dark
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.value > t.light && self.saturation < t.hsv_bright_saturation
    }
}

impl Admissible for Sv {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        self.saturation < t.gray
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.value < t.dark
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.value > t.light && self.saturation < t.hsv_bright_saturation
    }
}

impl Admissible for Rgb {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        spread([self.red, self.green, self.blue]) < t.rgb_gray_spread
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.red.max(self.green).max(self.blue) < t.dark / 100.0 * 255.0
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.red.min(self.green).min(self.blue) > t.light / 100.0 * 255.0
    }
}

impl Admissible for Cmyk {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        spread([self.cyan, self.magenta, self.yellow]) < t.cmyk_gray_spread
    }

    // Darkness grows with the key, so this one is inverted.
    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.key > t.cmyk_dark_key
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        [self.cyan, self.magenta, self.yellow, self.key]
            .iter()
            .all(|ink| *ink < t.cmyk_bright_ink)
    }
}

impl Admissible for Lab {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        self.a.abs() < t.lab_gray_axis && self.b.abs() < t.lab_gray_axis
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        self.l < t.dark
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        self.l > t.light
    }
}

impl Admissible for Hex {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        convert::hex::hex_to_rgb(self).into_value().raw_too_gray(t)
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        convert::hex::hex_to_rgb(self).into_value().raw_too_dark(t)
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        convert::hex::hex_to_rgb(self).into_value().raw_too_bright(t)
    }
}

impl Admissible for Xyz {
    fn raw_too_gray(&self, t: &Thresholds) -> bool {
        convert::xyz::xyz_to_lab(self).into_value().raw_too_gray(t)
    }

    fn raw_too_dark(&self, t: &Thresholds) -> bool {
        convert::xyz::xyz_to_lab(self).into_value().raw_too_dark(t)
    }

    fn raw_too_bright(&self, t: &Thresholds) -> bool {
        convert::xyz::xyz_to_lab(self).into_value().raw_too_bright(t)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL: Limits = Limits {
        gray: true,
        dark: true,
        light: true,
    };

    #[test]
    fn saturated_red_passes_everything() {
        let t = Thresholds::default();

        assert!(Hsl::new(0.0, 100.0, 50.0).is_admissible(ALL, &t));
        assert!(Rgb::new(255.0, 0.0, 0.0).is_admissible(ALL, &t));
        assert!(Hex::new("#ff0000").is_admissible(ALL, &t));
        assert!(Cmyk::new(0.0, 100.0, 100.0, 0.0).is_admissible(ALL, &t));
        assert!(Lab::new(53.24, 80.09, 67.2).is_admissible(ALL, &t));
    }

    #[test]
    fn hsl_predicates() {
        let t = Thresholds::default();

        assert!(Hsl::new(10.0, 10.0, 50.0).too_gray(&t));
        assert!(Hsl::new(10.0, 80.0, 10.0).too_dark(&t));
        assert!(Hsl::new(10.0, 80.0, 90.0).too_bright(&t));
        assert!(!Hsl::new(10.0, 80.0, 50.0).too_bright(&t));
    }

    #[test]
    fn disabled_tests_are_skipped() {
        let t = Thresholds::default();
        let gray = Hsl::new(10.0, 0.0, 50.0);

        assert!(gray.is_admissible(Limits::default(), &t));
        assert!(gray.is_admissible(
            Limits {
                gray: false,
                dark: true,
                light: true
            },
            &t
        ));
        assert!(!gray.is_admissible(
            Limits {
                gray: true,
                dark: false,
                light: false
            },
            &t
        ));
    }

    #[test]
    fn hsv_brightness_needs_low_saturation() {
        let t = Thresholds::default();

        assert!(Hsv::new(60.0, 10.0, 95.0).too_bright(&t));
        assert!(!Hsv::new(60.0, 90.0, 95.0).too_bright(&t));
        assert!(Sv::new(10.0, 95.0).too_bright(&t));
    }

    #[test]
    fn rgb_uses_channel_spread_and_extremes() {
        let t = Thresholds::default();

        assert!(Rgb::new(120.0, 130.0, 125.0).too_gray(&t));
        assert!(Rgb::new(40.0, 10.0, 0.0).too_dark(&t));
        assert!(Rgb::new(250.0, 240.0, 230.0).too_bright(&t));
        assert!(Hex::new("#f0f0f0").too_bright(&t));
    }

    #[test]
    fn cmyk_darkness_follows_the_key() {
        let t = Thresholds::default();

        assert!(Cmyk::new(100.0, 0.0, 0.0, 90.0).too_dark(&t));
        assert!(!Cmyk::new(100.0, 0.0, 0.0, 50.0).too_dark(&t));
        assert!(Cmyk::new(0.0, 0.0, 0.0, 0.0).too_bright(&t));
        assert!(Cmyk::new(40.0, 45.0, 42.0, 0.0).too_gray(&t));
    }

    #[test]
    fn lab_and_xyz_grays() {
        let t = Thresholds::default();

        assert!(Lab::new(50.0, 2.0, -3.0).too_gray(&t));
        assert!(!Lab::new(50.0, 2.0, -30.0).too_gray(&t));
        assert!(Xyz::new(95.047, 100.0, 108.883).too_gray(&t));
        assert!(Xyz::new(95.047, 100.0, 108.883).too_bright(&t));
        assert!(Xyz::new(0.0, 0.0, 0.0).too_dark(&t));
    }

    #[test]
    fn invalid_values_are_never_admissible() {
        let t = Thresholds::default();
        let invalid = Hsl::new(400.0, 0.0, 0.0);

        assert!(!invalid.too_gray(&t));
        assert!(!invalid.too_dark(&t));
        assert!(!invalid.too_bright(&t));
        assert!(!invalid.is_admissible(Limits::default(), &t));
    }
}
