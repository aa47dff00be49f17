//! Conversions from HSL.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn hsl_to_cmyk(hsl: &Hsl) -> Converted<Cmyk> {
    guarded(hsl, |hsl| formulas::rgb_to_cmyk(&formulas::hsl_to_rgb(hsl)))
}

pub fn hsl_to_hex(hsl: &Hsl) -> Converted<Hex> {
    guarded(hsl, |hsl| formulas::rgb_to_hex(&formulas::hsl_to_rgb(hsl)))
}

pub fn hsl_to_hsl(hsl: &Hsl) -> Converted<Hsl> {
    guarded(hsl, |hsl| *hsl)
}

pub fn hsl_to_hsv(hsl: &Hsl) -> Converted<Hsv> {
    guarded(hsl, |hsl| formulas::rgb_to_hsv(&formulas::hsl_to_rgb(hsl)))
}

pub fn hsl_to_lab(hsl: &Hsl) -> Converted<Lab> {
    guarded(hsl, |hsl| {
        let xyz = formulas::rgb_to_xyz(&formulas::hsl_to_rgb(hsl));
        formulas::xyz_to_lab(&xyz)
    })
}

pub fn hsl_to_rgb(hsl: &Hsl) -> Converted<Rgb> {
    guarded(hsl, formulas::hsl_to_rgb)
}

pub fn hsl_to_sl(hsl: &Hsl) -> Converted<Sl> {
    guarded(hsl, formulas::hsl_to_sl)
}

pub fn hsl_to_sv(hsl: &Hsl) -> Converted<Sv> {
    guarded(hsl, |hsl| {
        let hsv = formulas::rgb_to_hsv(&formulas::hsl_to_rgb(hsl));
        formulas::hsv_to_sv(&hsv)
    })
}

pub fn hsl_to_xyz(hsl: &Hsl) -> Converted<Xyz> {
    guarded(hsl, |hsl| formulas::rgb_to_xyz(&formulas::hsl_to_rgb(hsl)))
}

pub(super) fn hsl_to(hsl: &Hsl, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => hsl_to_cmyk(hsl).map(Color::from),
        ColorFormat::Hex => hsl_to_hex(hsl).map(Color::from),
        ColorFormat::Hsl => hsl_to_hsl(hsl).map(Color::from),
        ColorFormat::Hsv => hsl_to_hsv(hsl).map(Color::from),
        ColorFormat::Lab => hsl_to_lab(hsl).map(Color::from),
        ColorFormat::Rgb => hsl_to_rgb(hsl).map(Color::from),
        ColorFormat::Sl => hsl_to_sl(hsl).map(Color::from),
        ColorFormat::Sv => hsl_to_sv(hsl).map(Color::from),
        ColorFormat::Xyz => hsl_to_xyz(hsl).map(Color::from),
    }
}

pub(super) fn hsl_fan_out(hsl: &Hsl) -> ColorSet {
    ColorSet {
        cmyk: hsl_to_cmyk(hsl).into_value(),
        hex: hsl_to_hex(hsl).into_value(),
        hsl: hsl_to_hsl(hsl).into_value(),
        hsv: hsl_to_hsv(hsl).into_value(),
        lab: hsl_to_lab(hsl).into_value(),
        rgb: hsl_to_rgb(hsl).into_value(),
        sl: hsl_to_sl(hsl).into_value(),
        sv: hsl_to_sv(hsl).into_value(),
        xyz: hsl_to_xyz(hsl).into_value(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn red_to_rgb() {
        assert_eq!(
            hsl_to_rgb(&Hsl::new(0.0, 100.0, 50.0)).into_value(),
            Rgb::new(255.0, 0.0, 0.0)
        );
    }

    #[test]
    fn gray_ignores_the_hue() {
        assert_eq!(
            hsl_to_rgb(&Hsl::new(210.0, 0.0, 20.0)).into_value(),
            Rgb::new(51.0, 51.0, 51.0)
        );
    }

    #[test]
    fn light_colors_use_the_upper_branch() {
        assert_eq!(hsl_to_hex(&Hsl::new(120.0, 100.0, 75.0)).into_value().hex, "#80ff80");
    }

    #[test]
    fn to_hsv_routes_through_rgb() {
        assert_eq!(
            hsl_to_hsv(&Hsl::new(240.0, 100.0, 50.0)).into_value(),
            Hsv::new(240.0, 100.0, 100.0)
        );
    }

    #[test]
    fn projection_to_sl_drops_the_hue() {
        assert_eq!(
            hsl_to_sl(&Hsl::new(300.0, 35.0, 65.0)).into_value(),
            Sl::new(35.0, 65.0)
        );
    }

    #[test]
    fn saturation_over_one_hundred_falls_back() {
        let converted = hsl_to_cmyk(&Hsl::new(10.0, 101.0, 50.0));

        assert!(converted.is_fallback());
        assert_eq!(converted.into_value(), Cmyk::neutral());
    }
}
