//! Conversions from SL, the hue-less projection of HSL.
//!
//! SL is lifted back to HSL with a hue of 0 before any other conversion.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

fn sl_to_rgb_unchecked(sl: &Sl) -> Rgb {
    formulas::hsl_to_rgb(&formulas::sl_to_hsl(sl))
}

pub fn sl_to_cmyk(sl: &Sl) -> Converted<Cmyk> {
    guarded(sl, |sl| formulas::rgb_to_cmyk(&sl_to_rgb_unchecked(sl)))
}

pub fn sl_to_hex(sl: &Sl) -> Converted<Hex> {
    guarded(sl, |sl| formulas::rgb_to_hex(&sl_to_rgb_unchecked(sl)))
}

pub fn sl_to_hsl(sl: &Sl) -> Converted<Hsl> {
    guarded(sl, formulas::sl_to_hsl)
}

pub fn sl_to_hsv(sl: &Sl) -> Converted<Hsv> {
    guarded(sl, |sl| formulas::rgb_to_hsv(&sl_to_rgb_unchecked(sl)))
}

pub fn sl_to_lab(sl: &Sl) -> Converted<Lab> {
    guarded(sl, |sl| {
        formulas::xyz_to_lab(&formulas::rgb_to_xyz(&sl_to_rgb_unchecked(sl)))
    })
}

pub fn sl_to_rgb(sl: &Sl) -> Converted<Rgb> {
    guarded(sl, sl_to_rgb_unchecked)
}

pub fn sl_to_sl(sl: &Sl) -> Converted<Sl> {
    guarded(sl, |sl| *sl)
}

pub fn sl_to_sv(sl: &Sl) -> Converted<Sv> {
    guarded(sl, |sl| {
        formulas::hsv_to_sv(&formulas::rgb_to_hsv(&sl_to_rgb_unchecked(sl)))
    })
}

pub fn sl_to_xyz(sl: &Sl) -> Converted<Xyz> {
    guarded(sl, |sl| formulas::rgb_to_xyz(&sl_to_rgb_unchecked(sl)))
}

pub(super) fn sl_to(sl: &Sl, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => sl_to_cmyk(sl).map(Color::from),
        ColorFormat::Hex => sl_to_hex(sl).map(Color::from),
        ColorFormat::Hsl => sl_to_hsl(sl).map(Color::from),
        ColorFormat::Hsv => sl_to_hsv(sl).map(Color::from),
        ColorFormat::Lab => sl_to_lab(sl).map(Color::from),
        ColorFormat::Rgb => sl_to_rgb(sl).map(Color::from),
        ColorFormat::Sl => sl_to_sl(sl).map(Color::from),
        ColorFormat::Sv => sl_to_sv(sl).map(Color::from),
        ColorFormat::Xyz => sl_to_xyz(sl).map(Color::from),
    }
}

pub(super) fn sl_fan_out(sl: &Sl) -> ColorSet {
    ColorSet {
        cmyk: sl_to_cmyk(sl).into_value(),
        hex: sl_to_hex(sl).into_value(),
        hsl: sl_to_hsl(sl).into_value(),
        hsv: sl_to_hsv(sl).into_value(),
        lab: sl_to_lab(sl).into_value(),
        rgb: sl_to_rgb(sl).into_value(),
        sl: sl_to_sl(sl).into_value(),
        sv: sl_to_sv(sl).into_value(),
        xyz: sl_to_xyz(sl).into_value(),
    }
}
