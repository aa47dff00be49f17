//! Conversions from HSV.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn hsv_to_cmyk(hsv: &Hsv) -> Converted<Cmyk> {
    guarded(hsv, |hsv| formulas::rgb_to_cmyk(&formulas::hsv_to_rgb(hsv)))
}

pub fn hsv_to_hex(hsv: &Hsv) -> Converted<Hex> {
    guarded(hsv, |hsv| formulas::rgb_to_hex(&formulas::hsv_to_rgb(hsv)))
}

pub fn hsv_to_hsl(hsv: &Hsv) -> Converted<Hsl> {
    guarded(hsv, |hsv| formulas::rgb_to_hsl(&formulas::hsv_to_rgb(hsv)))
}

pub fn hsv_to_hsv(hsv: &Hsv) -> Converted<Hsv> {
    guarded(hsv, |hsv| *hsv)
}

pub fn hsv_to_lab(hsv: &Hsv) -> Converted<Lab> {
    guarded(hsv, |hsv| {
        let xyz = formulas::rgb_to_xyz(&formulas::hsv_to_rgb(hsv));
        formulas::xyz_to_lab(&xyz)
    })
}

pub fn hsv_to_rgb(hsv: &Hsv) -> Converted<Rgb> {
    guarded(hsv, formulas::hsv_to_rgb)
}

pub fn hsv_to_sl(hsv: &Hsv) -> Converted<Sl> {
    guarded(hsv, |hsv| {
        let hsl = formulas::rgb_to_hsl(&formulas::hsv_to_rgb(hsv));
        formulas::hsl_to_sl(&hsl)
    })
}

pub fn hsv_to_sv(hsv: &Hsv) -> Converted<Sv> {
    guarded(hsv, formulas::hsv_to_sv)
}

pub fn hsv_to_xyz(hsv: &Hsv) -> Converted<Xyz> {
    guarded(hsv, |hsv| formulas::rgb_to_xyz(&formulas::hsv_to_rgb(hsv)))
}

pub(super) fn hsv_to(hsv: &Hsv, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => hsv_to_cmyk(hsv).map(Color::from),
        ColorFormat::Hex => hsv_to_hex(hsv).map(Color::from),
        ColorFormat::Hsl => hsv_to_hsl(hsv).map(Color::from),
        ColorFormat::Hsv => hsv_to_hsv(hsv).map(Color::from),
        ColorFormat::Lab => hsv_to_lab(hsv).map(Color::from),
        ColorFormat::Rgb => hsv_to_rgb(hsv).map(Color::from),
        ColorFormat::Sl => hsv_to_sl(hsv).map(Color::from),
        ColorFormat::Sv => hsv_to_sv(hsv).map(Color::from),
        ColorFormat::Xyz => hsv_to_xyz(hsv).map(Color::from),
    }
}

pub(super) fn hsv_fan_out(hsv: &Hsv) -> ColorSet {
    ColorSet {
        cmyk: hsv_to_cmyk(hsv).into_value(),
        hex: hsv_to_hex(hsv).into_value(),
        hsl: hsv_to_hsl(hsv).into_value(),
        hsv: hsv_to_hsv(hsv).into_value(),
        lab: hsv_to_lab(hsv).into_value(),
        rgb: hsv_to_rgb(hsv).into_value(),
        sl: hsv_to_sl(hsv).into_value(),
        sv: hsv_to_sv(hsv).into_value(),
        xyz: hsv_to_xyz(hsv).into_value(),
    }
}
