//! Conversions from SV, the hue-less projection of HSV.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

fn sv_to_rgb_unchecked(sv: &Sv) -> Rgb {
    formulas::hsv_to_rgb(&formulas::sv_to_hsv(sv))
}

pub fn sv_to_cmyk(sv: &Sv) -> Converted<Cmyk> {
    guarded(sv, |sv| formulas::rgb_to_cmyk(&sv_to_rgb_unchecked(sv)))
}

pub fn sv_to_hex(sv: &Sv) -> Converted<Hex> {
    guarded(sv, |sv| formulas::rgb_to_hex(&sv_to_rgb_unchecked(sv)))
}

pub fn sv_to_hsl(sv: &Sv) -> Converted<Hsl> {
    guarded(sv, |sv| formulas::rgb_to_hsl(&sv_to_rgb_unchecked(sv)))
}

pub fn sv_to_hsv(sv: &Sv) -> Converted<Hsv> {
    guarded(sv, formulas::sv_to_hsv)
}

pub fn sv_to_lab(sv: &Sv) -> Converted<Lab> {
    guarded(sv, |sv| {
        formulas::xyz_to_lab(&formulas::rgb_to_xyz(&sv_to_rgb_unchecked(sv)))
    })
}

pub fn sv_to_rgb(sv: &Sv) -> Converted<Rgb> {
    guarded(sv, sv_to_rgb_unchecked)
}

pub fn sv_to_sl(sv: &Sv) -> Converted<Sl> {
    guarded(sv, |sv| {
        formulas::hsl_to_sl(&formulas::rgb_to_hsl(&sv_to_rgb_unchecked(sv)))
    })
}

pub fn sv_to_sv(sv: &Sv) -> Converted<Sv> {
    guarded(sv, |sv| *sv)
}

pub fn sv_to_xyz(sv: &Sv) -> Converted<Xyz> {
    guarded(sv, |sv| formulas::rgb_to_xyz(&sv_to_rgb_unchecked(sv)))
}

pub(super) fn sv_to(sv: &Sv, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => sv_to_cmyk(sv).map(Color::from),
        ColorFormat::Hex => sv_to_hex(sv).map(Color::from),
        ColorFormat::Hsl => sv_to_hsl(sv).map(Color::from),
        ColorFormat::Hsv => sv_to_hsv(sv).map(Color::from),
        ColorFormat::Lab => sv_to_lab(sv).map(Color::from),
        ColorFormat::Rgb => sv_to_rgb(sv).map(Color::from),
        ColorFormat::Sl => sv_to_sl(sv).map(Color::from),
        ColorFormat::Sv => sv_to_sv(sv).map(Color::from),
        ColorFormat::Xyz => sv_to_xyz(sv).map(Color::from),
    }
}

pub(super) fn sv_fan_out(sv: &Sv) -> ColorSet {
    ColorSet {
        cmyk: sv_to_cmyk(sv).into_value(),
        hex: sv_to_hex(sv).into_value(),
        hsl: sv_to_hsl(sv).into_value(),
        hsv: sv_to_hsv(sv).into_value(),
        lab: sv_to_lab(sv).into_value(),
        rgb: sv_to_rgb(sv).into_value(),
        sl: sv_to_sl(sv).into_value(),
        sv: sv_to_sv(sv).into_value(),
        xyz: sv_to_xyz(sv).into_value(),
    }
}
