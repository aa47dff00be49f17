//! Conversions from RGB, the main hub.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn rgb_to_cmyk(rgb: &Rgb) -> Converted<Cmyk> {
    guarded(rgb, formulas::rgb_to_cmyk)
}

pub fn rgb_to_hex(rgb: &Rgb) -> Converted<Hex> {
    guarded(rgb, formulas::rgb_to_hex)
}

pub fn rgb_to_hsl(rgb: &Rgb) -> Converted<Hsl> {
    guarded(rgb, formulas::rgb_to_hsl)
}

pub fn rgb_to_hsv(rgb: &Rgb) -> Converted<Hsv> {
    guarded(rgb, formulas::rgb_to_hsv)
}

pub fn rgb_to_lab(rgb: &Rgb) -> Converted<Lab> {
    guarded(rgb, |rgb| formulas::xyz_to_lab(&formulas::rgb_to_xyz(rgb)))
}

pub fn rgb_to_rgb(rgb: &Rgb) -> Converted<Rgb> {
    guarded(rgb, |rgb| *rgb)
}

pub fn rgb_to_sl(rgb: &Rgb) -> Converted<Sl> {
    guarded(rgb, |rgb| formulas::hsl_to_sl(&formulas::rgb_to_hsl(rgb)))
}

pub fn rgb_to_sv(rgb: &Rgb) -> Converted<Sv> {
    guarded(rgb, |rgb| formulas::hsv_to_sv(&formulas::rgb_to_hsv(rgb)))
}

pub fn rgb_to_xyz(rgb: &Rgb) -> Converted<Xyz> {
    guarded(rgb, formulas::rgb_to_xyz)
}

pub(super) fn rgb_to(rgb: &Rgb, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => rgb_to_cmyk(rgb).map(Color::from),
        ColorFormat::Hex => rgb_to_hex(rgb).map(Color::from),
        ColorFormat::Hsl => rgb_to_hsl(rgb).map(Color::from),
        ColorFormat::Hsv => rgb_to_hsv(rgb).map(Color::from),
        ColorFormat::Lab => rgb_to_lab(rgb).map(Color::from),
        ColorFormat::Rgb => rgb_to_rgb(rgb).map(Color::from),
        ColorFormat::Sl => rgb_to_sl(rgb).map(Color::from),
        ColorFormat::Sv => rgb_to_sv(rgb).map(Color::from),
        ColorFormat::Xyz => rgb_to_xyz(rgb).map(Color::from),
    }
}

pub(super) fn rgb_fan_out(rgb: &Rgb) -> ColorSet {
    ColorSet {
        cmyk: rgb_to_cmyk(rgb).into_value(),
        hex: rgb_to_hex(rgb).into_value(),
        hsl: rgb_to_hsl(rgb).into_value(),
        hsv: rgb_to_hsv(rgb).into_value(),
        lab: rgb_to_lab(rgb).into_value(),
        rgb: rgb_to_rgb(rgb).into_value(),
        sl: rgb_to_sl(rgb).into_value(),
        sv: rgb_to_sv(rgb).into_value(),
        xyz: rgb_to_xyz(rgb).into_value(),
    }
}
