//! Conversions from hexadecimal strings. Everything goes through RGB.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn hex_to_cmyk(hex: &Hex) -> Converted<Cmyk> {
    guarded(hex, |hex| formulas::rgb_to_cmyk(&formulas::hex_to_rgb(hex)))
}

pub fn hex_to_hex(hex: &Hex) -> Converted<Hex> {
    guarded(hex, Hex::clone)
}

pub fn hex_to_hsl(hex: &Hex) -> Converted<Hsl> {
    guarded(hex, |hex| formulas::rgb_to_hsl(&formulas::hex_to_rgb(hex)))
}

pub fn hex_to_hsv(hex: &Hex) -> Converted<Hsv> {
    guarded(hex, |hex| formulas::rgb_to_hsv(&formulas::hex_to_rgb(hex)))
}

pub fn hex_to_lab(hex: &Hex) -> Converted<Lab> {
    guarded(hex, |hex| {
        let xyz = formulas::rgb_to_xyz(&formulas::hex_to_rgb(hex));
        formulas::xyz_to_lab(&xyz)
    })
}

pub fn hex_to_rgb(hex: &Hex) -> Converted<Rgb> {
    guarded(hex, formulas::hex_to_rgb)
}

pub fn hex_to_sl(hex: &Hex) -> Converted<Sl> {
    guarded(hex, |hex| {
        let hsl = formulas::rgb_to_hsl(&formulas::hex_to_rgb(hex));
        formulas::hsl_to_sl(&hsl)
    })
}

pub fn hex_to_sv(hex: &Hex) -> Converted<Sv> {
    guarded(hex, |hex| {
        let hsv = formulas::rgb_to_hsv(&formulas::hex_to_rgb(hex));
        formulas::hsv_to_sv(&hsv)
    })
}

pub fn hex_to_xyz(hex: &Hex) -> Converted<Xyz> {
    guarded(hex, |hex| formulas::rgb_to_xyz(&formulas::hex_to_rgb(hex)))
}

pub(super) fn hex_to(hex: &Hex, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => hex_to_cmyk(hex).map(Color::from),
        ColorFormat::Hex => hex_to_hex(hex).map(Color::from),
        ColorFormat::Hsl => hex_to_hsl(hex).map(Color::from),
        ColorFormat::Hsv => hex_to_hsv(hex).map(Color::from),
        ColorFormat::Lab => hex_to_lab(hex).map(Color::from),
        ColorFormat::Rgb => hex_to_rgb(hex).map(Color::from),
        ColorFormat::Sl => hex_to_sl(hex).map(Color::from),
        ColorFormat::Sv => hex_to_sv(hex).map(Color::from),
        ColorFormat::Xyz => hex_to_xyz(hex).map(Color::from),
    }
}

pub(super) fn hex_fan_out(hex: &Hex) -> ColorSet {
    ColorSet {
        cmyk: hex_to_cmyk(hex).into_value(),
        hex: hex_to_hex(hex).into_value(),
        hsl: hex_to_hsl(hex).into_value(),
        hsv: hex_to_hsv(hex).into_value(),
        lab: hex_to_lab(hex).into_value(),
        rgb: hex_to_rgb(hex).into_value(),
        sl: hex_to_sl(hex).into_value(),
        sv: hex_to_sv(hex).into_value(),
        xyz: hex_to_xyz(hex).into_value(),
    }
}
