//! Conversions from CMYK.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

pub fn cmyk_to_cmyk(cmyk: &Cmyk) -> Converted<Cmyk> {
    guarded(cmyk, |cmyk| *cmyk)
}

pub fn cmyk_to_hex(cmyk: &Cmyk) -> Converted<Hex> {
    guarded(cmyk, |cmyk| formulas::rgb_to_hex(&formulas::cmyk_to_rgb(cmyk)))
}

pub fn cmyk_to_hsl(cmyk: &Cmyk) -> Converted<Hsl> {
    guarded(cmyk, |cmyk| formulas::rgb_to_hsl(&formulas::cmyk_to_rgb(cmyk)))
}

pub fn cmyk_to_hsv(cmyk: &Cmyk) -> Converted<Hsv> {
    guarded(cmyk, |cmyk| formulas::rgb_to_hsv(&formulas::cmyk_to_rgb(cmyk)))
}

pub fn cmyk_to_lab(cmyk: &Cmyk) -> Converted<Lab> {
    guarded(cmyk, |cmyk| {
        let xyz = formulas::rgb_to_xyz(&formulas::cmyk_to_rgb(cmyk));
        formulas::xyz_to_lab(&xyz)
    })
}

pub fn cmyk_to_rgb(cmyk: &Cmyk) -> Converted<Rgb> {
    guarded(cmyk, formulas::cmyk_to_rgb)
}

pub fn cmyk_to_sl(cmyk: &Cmyk) -> Converted<Sl> {
    guarded(cmyk, |cmyk| {
        formulas::hsl_to_sl(&formulas::rgb_to_hsl(&formulas::cmyk_to_rgb(cmyk)))
    })
}

pub fn cmyk_to_sv(cmyk: &Cmyk) -> Converted<Sv> {
    guarded(cmyk, |cmyk| {
        formulas::hsv_to_sv(&formulas::rgb_to_hsv(&formulas::cmyk_to_rgb(cmyk)))
    })
}

pub fn cmyk_to_xyz(cmyk: &Cmyk) -> Converted<Xyz> {
    guarded(cmyk, |cmyk| formulas::rgb_to_xyz(&formulas::cmyk_to_rgb(cmyk)))
}

pub(super) fn cmyk_to(cmyk: &Cmyk, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => cmyk_to_cmyk(cmyk).map(Color::from),
        ColorFormat::Hex => cmyk_to_hex(cmyk).map(Color::from),
        ColorFormat::Hsl => cmyk_to_hsl(cmyk).map(Color::from),
        ColorFormat::Hsv => cmyk_to_hsv(cmyk).map(Color::from),
        ColorFormat::Lab => cmyk_to_lab(cmyk).map(Color::from),
        ColorFormat::Rgb => cmyk_to_rgb(cmyk).map(Color::from),
        ColorFormat::Sl => cmyk_to_sl(cmyk).map(Color::from),
        ColorFormat::Sv => cmyk_to_sv(cmyk).map(Color::from),
        ColorFormat::Xyz => cmyk_to_xyz(cmyk).map(Color::from),
    }
}

pub(super) fn cmyk_fan_out(cmyk: &Cmyk) -> ColorSet {
    ColorSet {
        cmyk: cmyk_to_cmyk(cmyk).into_value(),
        hex: cmyk_to_hex(cmyk).into_value(),
        hsl: cmyk_to_hsl(cmyk).into_value(),
        hsv: cmyk_to_hsv(cmyk).into_value(),
        lab: cmyk_to_lab(cmyk).into_value(),
        rgb: cmyk_to_rgb(cmyk).into_value(),
        sl: cmyk_to_sl(cmyk).into_value(),
        sv: cmyk_to_sv(cmyk).into_value(),
        xyz: cmyk_to_xyz(cmyk).into_value(),
    }
}
