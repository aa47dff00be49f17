//! Conversions from CIE XYZ.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn xyz_to_cmyk(xyz: &Xyz) -> Converted<Cmyk> {
    guarded(xyz, |xyz| formulas::rgb_to_cmyk(&formulas::xyz_to_rgb(xyz)))
}

pub fn xyz_to_hex(xyz: &Xyz) -> Converted<Hex> {
    guarded(xyz, |xyz| formulas::rgb_to_hex(&formulas::xyz_to_rgb(xyz)))
}

pub fn xyz_to_hsl(xyz: &Xyz) -> Converted<Hsl> {
    guarded(xyz, |xyz| formulas::rgb_to_hsl(&formulas::xyz_to_rgb(xyz)))
}

pub fn xyz_to_hsv(xyz: &Xyz) -> Converted<Hsv> {
    guarded(xyz, |xyz| formulas::rgb_to_hsv(&formulas::xyz_to_rgb(xyz)))
}

pub fn xyz_to_lab(xyz: &Xyz) -> Converted<Lab> {
    guarded(xyz, formulas::xyz_to_lab)
}

pub fn xyz_to_rgb(xyz: &Xyz) -> Converted<Rgb> {
    guarded(xyz, formulas::xyz_to_rgb)
}

pub fn xyz_to_sl(xyz: &Xyz) -> Converted<Sl> {
    guarded(xyz, |xyz| {
        formulas::hsl_to_sl(&formulas::rgb_to_hsl(&formulas::xyz_to_rgb(xyz)))
    })
}

pub fn xyz_to_sv(xyz: &Xyz) -> Converted<Sv> {
    guarded(xyz, |xyz| {
        formulas::hsv_to_sv(&formulas::rgb_to_hsv(&formulas::xyz_to_rgb(xyz)))
    })
}

pub fn xyz_to_xyz(xyz: &Xyz) -> Converted<Xyz> {
    guarded(xyz, |xyz| *xyz)
}

pub(super) fn xyz_to(xyz: &Xyz, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => xyz_to_cmyk(xyz).map(Color::from),
        ColorFormat::Hex => xyz_to_hex(xyz).map(Color::from),
        ColorFormat::Hsl => xyz_to_hsl(xyz).map(Color::from),
        ColorFormat::Hsv => xyz_to_hsv(xyz).map(Color::from),
        ColorFormat::Lab => xyz_to_lab(xyz).map(Color::from),
        ColorFormat::Rgb => xyz_to_rgb(xyz).map(Color::from),
        ColorFormat::Sl => xyz_to_sl(xyz).map(Color::from),
        ColorFormat::Sv => xyz_to_sv(xyz).map(Color::from),
        ColorFormat::Xyz => xyz_to_xyz(xyz).map(Color::from),
    }
}

pub(super) fn xyz_fan_out(xyz: &Xyz) -> ColorSet {
    ColorSet {
        cmyk: xyz_to_cmyk(xyz).into_value(),
        hex: xyz_to_hex(xyz).into_value(),
        hsl: xyz_to_hsl(xyz).into_value(),
        hsv: xyz_to_hsv(xyz).into_value(),
        lab: xyz_to_lab(xyz).into_value(),
        rgb: xyz_to_rgb(xyz).into_value(),
        sl: xyz_to_sl(xyz).into_value(),
        sv: xyz_to_sv(xyz).into_value(),
        xyz: xyz_to_xyz(xyz).into_value(),
    }
}
