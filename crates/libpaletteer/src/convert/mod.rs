//! The conversion engine.
//!
//! There is one function per ordered pair of formats, grouped by source format (`rgb_to_hsl`
//! lives in [`rgb`], `hsl_to_rgb` in [`hsl`], and so on). Direct formulas exist for
//! RGB <-> HSL, HSV, CMYK, Hex and XYZ, and for XYZ <-> LAB; all other pairs are routed through
//! those hubs.
//!
//! Conversions never fail. Each one validates its input first, and an invalid value yields the
//! neutral value of the target format wrapped in [`Converted::Fallback`], so callers that care
//! can tell a fallback apart from a real result.

mod formulas;

pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod sl;
pub mod sv;
pub mod xyz;

use crate::color::{Color, ColorSet, ColorValue, Hsl};
use crate::format::ColorFormat;
use crate::validate::{InvalidColor, Validate};

/// The outcome of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted<T> {
    Computed(T),
    /// The input was invalid; `value` is the target format's neutral value.
    Fallback { value: T, invalid: InvalidColor },
}

impl<T> Converted<T> {
    pub fn value(&self) -> &T {
        match self {
            Converted::Computed(value) | Converted::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Converted::Computed(value) | Converted::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Converted::Fallback { .. })
    }

    pub fn invalid(&self) -> Option<&InvalidColor> {
        match self {
            Converted::Computed(_) => None,
            Converted::Fallback { invalid, .. } => Some(invalid),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Converted<U> {
        match self {
            Converted::Computed(value) => Converted::Computed(f(value)),
            Converted::Fallback { value, invalid } => Converted::Fallback {
                value: f(value),
                invalid,
            },
        }
    }

    /// Turns a fallback into an error, for callers that would rather propagate.
    pub fn into_result(self) -> Result<T, InvalidColor> {
        match self {
            Converted::Computed(value) => Ok(value),
            Converted::Fallback { invalid, .. } => Err(invalid),
        }
    }
}

/// Runs `compute` if `input` is valid, otherwise logs and falls back to `T::neutral()`.
fn guarded<S, T, F>(input: &S, compute: F) -> Converted<T>
where
    S: ColorValue,
    T: ColorValue,
    F: FnOnce(&S) -> T,
{
    match input.validate() {
        Ok(()) => Converted::Computed(compute(input)),
        Err(invalid) => {
            warn!(
                "Cannot convert {} to {}, using the neutral {} value: {}",
                S::FORMAT,
                T::FORMAT,
                T::FORMAT,
                invalid
            );

            Converted::Fallback {
                value: T::neutral(),
                invalid,
            }
        }
    }
}

/// Converts any tagged color into the given format.
pub fn convert(color: &Color, to: ColorFormat) -> Converted<Color> {
    match color {
        Color::Cmyk(value) => cmyk::cmyk_to(value, to),
        Color::Hex(value) => hex::hex_to(value, to),
        Color::Hsl(value) => hsl::hsl_to(value, to),
        Color::Hsv(value) => hsv::hsv_to(value, to),
        Color::Lab(value) => lab::lab_to(value, to),
        Color::Rgb(value) => rgb::rgb_to(value, to),
        Color::Sl(value) => sl::sl_to(value, to),
        Color::Sv(value) => sv::sv_to(value, to),
        Color::Xyz(value) => xyz::xyz_to(value, to),
    }
}

/// Like [`convert`] with HSL as the target, without the round trip through [`Color`].
pub fn to_hsl(color: &Color) -> Converted<Hsl> {
    match color {
        Color::Cmyk(value) => cmyk::cmyk_to_hsl(value),
        Color::Hex(value) => hex::hex_to_hsl(value),
        Color::Hsl(value) => hsl::hsl_to_hsl(value),
        Color::Hsv(value) => hsv::hsv_to_hsl(value),
        Color::Lab(value) => lab::lab_to_hsl(value),
        Color::Rgb(value) => rgb::rgb_to_hsl(value),
        Color::Sl(value) => sl::sl_to_hsl(value),
        Color::Sv(value) => sv::sv_to_hsl(value),
        Color::Xyz(value) => xyz::xyz_to_hsl(value),
    }
}

/// Expresses a color in all nine formats, one engine call per format.
pub fn fan_out(color: &Color) -> Converted<ColorSet> {
    if let Err(invalid) = color.validate() {
        warn!(
            "Cannot fan out {} color, using neutral values: {}",
            color.format(),
            invalid
        );

        return Converted::Fallback {
            value: ColorSet::neutral(),
            invalid,
        };
    }

    let set = match color {
        Color::Cmyk(value) => cmyk::cmyk_fan_out(value),
        Color::Hex(value) => hex::hex_fan_out(value),
        Color::Hsl(value) => hsl::hsl_fan_out(value),
        Color::Hsv(value) => hsv::hsv_fan_out(value),
        Color::Lab(value) => lab::lab_fan_out(value),
        Color::Rgb(value) => rgb::rgb_fan_out(value),
        Color::Sl(value) => sl::sl_fan_out(value),
        Color::Sv(value) => sv::sv_fan_out(value),
        Color::Xyz(value) => xyz::xyz_fan_out(value),
    };

    Converted::Computed(set)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dynamic_dispatch_matches_the_direct_function() {
        let rgb = Rgb::new(255.0, 0.0, 0.0);

        assert_eq!(
            convert(&rgb.into(), ColorFormat::Hsl).into_value(),
            Color::Hsl(rgb::rgb_to_hsl(&rgb).into_value())
        );
    }

    #[test]
    fn dynamic_dispatch_reaches_every_target() {
        let color = Color::from(Hex::new("#336699"));

        for format in ColorFormat::ALL {
            let converted = convert(&color, format);

            assert!(!converted.is_fallback());
            assert_eq!(converted.value().format(), format);
        }
    }

    #[test]
    fn invalid_input_falls_back_to_the_target_neutral() {
        let converted = convert(&Cmyk::new(-1.0, 0.0, 0.0, 0.0).into(), ColorFormat::Rgb);

        assert!(converted.is_fallback());
        assert_eq!(converted.invalid().unwrap().format, ColorFormat::Cmyk);
        assert_eq!(converted.into_value(), Color::Rgb(Rgb::neutral()));
    }

    #[test]
    fn fan_out_of_red() {
        let set = fan_out(&Rgb::new(255.0, 0.0, 0.0).into()).into_value();

        assert_eq!(set.hex.hex, "#ff0000");
        assert_eq!(set.hsl, Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(set.hsv, Hsv::new(0.0, 100.0, 100.0));
        assert_eq!(set.cmyk, Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert_eq!(set.sl, Sl::new(100.0, 50.0));
        assert_eq!(set.sv, Sv::new(100.0, 100.0));
        assert_eq!(set.rgb, Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn fan_out_of_invalid_color_is_neutral() {
        let converted = fan_out(&Hex::new("#zzzzzz").into());

        assert!(converted.is_fallback());
        assert_eq!(converted.into_value(), ColorSet::neutral());
    }

    #[test]
    fn into_result_exposes_the_invalid_field() {
        let err = hsl::hsl_to_rgb(&Hsl::new(400.0, 0.0, 0.0))
            .into_result()
            .unwrap_err();

        assert_eq!(err.reason, "hue 400 is outside 0..360");
    }

    #[test]
    fn map_keeps_the_fallback_marker() {
        let mapped = rgb::rgb_to_hex(&Rgb::new(300.0, 0.0, 0.0)).map(|hex| hex.hex);

        assert!(mapped.is_fallback());
        assert_eq!(mapped.into_value(), "#000000");
    }
}
