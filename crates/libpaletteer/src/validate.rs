use regex::Regex;
use std::ops::RangeInclusive;

use crate::color::*;
use crate::format::ColorFormat;

lazy_static! {
    /// Six hex digits with an optional leading `#`
    /// #ff0000  -> PASS
    /// ff0000   -> PASS
    /// #f00     -> FAIL
    /// #ff0000ff -> FAIL
    static ref HEX_BODY_REGEX: Regex = Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap();
}

/// A color value with a field outside its declared range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid {format} color: {reason}")]
pub struct InvalidColor {
    pub format: ColorFormat,
    pub reason: String,
}

impl InvalidColor {
    fn new(format: ColorFormat, reason: impl Into<String>) -> Self {
        InvalidColor {
            format,
            reason: reason.into(),
        }
    }
}

/// Checks the range invariant of a color value.
///
/// Implemented once per format; [`Color`] dispatches on its tag.
pub trait Validate {
    fn validate(&self) -> Result<(), InvalidColor>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

const PERCENTAGE: RangeInclusive<f64> = 0.0..=100.0;
const BYTE: RangeInclusive<f64> = 0.0..=255.0;
const LAB_AXIS: RangeInclusive<f64> = -125.0..=125.0;
const UNIT: RangeInclusive<f64> = 0.0..=1.0;

fn field(
    format: ColorFormat,
    name: &str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), InvalidColor> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(InvalidColor::new(
            format,
            format!(
                "{} {} is outside {}..={}",
                name,
                value,
                range.start(),
                range.end()
            ),
        ))
    }
}

/// Hues are half-open: 360 is spelled 0.
fn hue(format: ColorFormat, value: f64) -> Result<(), InvalidColor> {
    if value.is_finite() && (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(InvalidColor::new(
            format,
            format!("hue {} is outside 0..360", value),
        ))
    }
}

impl Validate for Cmyk {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "cyan", self.cyan, PERCENTAGE)?;
        field(Self::FORMAT, "magenta", self.magenta, PERCENTAGE)?;
        field(Self::FORMAT, "yellow", self.yellow, PERCENTAGE)?;
        field(Self::FORMAT, "key", self.key, PERCENTAGE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Hex {
    fn validate(&self) -> Result<(), InvalidColor> {
        if !HEX_BODY_REGEX.is_match(&self.hex) {
            return Err(InvalidColor::new(
                Self::FORMAT,
                format!("`{}` is not six hexadecimal digits", self.hex),
            ));
        }

        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Hsl {
    fn validate(&self) -> Result<(), InvalidColor> {
        hue(Self::FORMAT, self.hue)?;
        field(Self::FORMAT, "saturation", self.saturation, PERCENTAGE)?;
        field(Self::FORMAT, "lightness", self.lightness, PERCENTAGE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Hsv {
    fn validate(&self) -> Result<(), InvalidColor> {
        hue(Self::FORMAT, self.hue)?;
        field(Self::FORMAT, "saturation", self.saturation, PERCENTAGE)?;
        field(Self::FORMAT, "value", self.value, PERCENTAGE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Lab {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "l", self.l, PERCENTAGE)?;
        field(Self::FORMAT, "a", self.a, LAB_AXIS)?;
        field(Self::FORMAT, "b", self.b, LAB_AXIS)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Rgb {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "red", self.red, BYTE)?;
        field(Self::FORMAT, "green", self.green, BYTE)?;
        field(Self::FORMAT, "blue", self.blue, BYTE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Sl {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "saturation", self.saturation, PERCENTAGE)?;
        field(Self::FORMAT, "lightness", self.lightness, PERCENTAGE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Sv {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "saturation", self.saturation, PERCENTAGE)?;
        field(Self::FORMAT, "value", self.value, PERCENTAGE)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Xyz {
    fn validate(&self) -> Result<(), InvalidColor> {
        field(Self::FORMAT, "x", self.x, 0.0..=XYZ_MAX_X)?;
        field(Self::FORMAT, "y", self.y, 0.0..=XYZ_MAX_Y)?;
        field(Self::FORMAT, "z", self.z, 0.0..=XYZ_MAX_Z)?;
        field(Self::FORMAT, "alpha", self.alpha, UNIT)
    }
}

impl Validate for Color {
    fn validate(&self) -> Result<(), InvalidColor> {
        match self {
            Color::Cmyk(c) => c.validate(),
            Color::Hex(c) => c.validate(),
            Color::Hsl(c) => c.validate(),
            Color::Hsv(c) => c.validate(),
            Color::Lab(c) => c.validate(),
            Color::Rgb(c) => c.validate(),
            Color::Sl(c) => c.validate(),
            Color::Sv(c) => c.validate(),
            Color::Xyz(c) => c.validate(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_values_on_the_boundaries() {
        assert!(Rgb::new(0.0, 255.0, 128.0).is_valid());
        assert!(Cmyk::new(0.0, 100.0, 50.0, 100.0).is_valid());
        assert!(Lab::new(100.0, -125.0, 125.0).is_valid());
        assert!(Xyz::new(95.047, 100.0, 108.883).is_valid());
        assert!(Hsl::new(359.0, 0.0, 100.0).with_alpha(0.0).is_valid());
    }

    #[test]
    fn hue_of_360_is_out_of_range() {
        let err = Hsv::new(360.0, 50.0, 50.0).validate().unwrap_err();

        assert_eq!(err.format, ColorFormat::Hsv);
        assert_eq!(err.reason, "hue 360 is outside 0..360");
    }

    #[test]
    fn reports_the_first_offending_field() {
        let err = Cmyk::new(-1.0, 0.0, 0.0, 0.0).validate().unwrap_err();

        assert_eq!(err.to_string(), "Invalid cmyk color: cyan -1 is outside 0..=100");
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert!(!Rgb::new(f64::NAN, 0.0, 0.0).is_valid());
        assert!(!Sl::new(f64::INFINITY, 0.0).is_valid());
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let mut sv = Sv::new(10.0, 10.0);
        sv.alpha = 1.5;
        assert!(!sv.is_valid());
    }

    #[test]
    fn hex_requires_six_digits() {
        assert!(Hex::new("#ff0000").is_valid());
        assert!(Hex::new("FF00aa").is_valid());
        assert!(!Hex::new("#f00").is_valid());
        assert!(!Hex::new("#ff0000ff").is_valid());
        assert!(!Hex::new("#gg0000").is_valid());
        assert!(!Hex::new("##ff0000").is_valid());
    }

    #[test]
    fn color_dispatches_to_its_variant() {
        assert!(Color::from(Lab::new(50.0, 10.0, -10.0)).is_valid());
        assert!(!Color::from(Xyz::new(96.0, 0.0, 0.0)).is_valid());
    }
}
