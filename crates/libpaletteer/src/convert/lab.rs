//! Conversions from CIE LAB. LAB only talks to XYZ directly; XYZ then hands over to RGB.

use super::{formulas, guarded, Converted};
use crate::color::*;
use crate::format::ColorFormat;

fn lab_to_rgb_unchecked(lab: &Lab) -> Rgb {
    formulas::xyz_to_rgb(&formulas::lab_to_xyz(lab))
}

pub fn lab_to_cmyk(lab: &Lab) -> Converted<Cmyk> {
    guarded(lab, |lab| formulas::rgb_to_cmyk(&lab_to_rgb_unchecked(lab)))
}

pub fn lab_to_hex(lab: &Lab) -> Converted<Hex> {
    guarded(lab, |lab| formulas::rgb_to_hex(&lab_to_rgb_unchecked(lab)))
}

pub fn lab_to_hsl(lab: &Lab) -> Converted<Hsl> {
    guarded(lab, |lab| formulas::rgb_to_hsl(&lab_to_rgb_unchecked(lab)))
}

pub fn lab_to_hsv(lab: &Lab) -> Converted<Hsv> {
    guarded(lab, |lab| formulas::rgb_to_hsv(&lab_to_rgb_unchecked(lab)))
}

pub fn lab_to_lab(lab: &Lab) -> Converted<Lab> {
    guarded(lab, |lab| *lab)
}

pub fn lab_to_rgb(lab: &Lab) -> Converted<Rgb> {
    guarded(lab, lab_to_rgb_unchecked)
}

pub fn lab_to_sl(lab: &Lab) -> Converted<Sl> {
    guarded(lab, |lab| {
        formulas::hsl_to_sl(&formulas::rgb_to_hsl(&lab_to_rgb_unchecked(lab)))
    })
}

pub fn lab_to_sv(lab: &Lab) -> Converted<Sv> {
    guarded(lab, |lab| {
        formulas::hsv_to_sv(&formulas::rgb_to_hsv(&lab_to_rgb_unchecked(lab)))
    })
}

pub fn lab_to_xyz(lab: &Lab) -> Converted<Xyz> {
    guarded(lab, formulas::lab_to_xyz)
}

pub(super) fn lab_to(lab: &Lab, to: ColorFormat) -> Converted<Color> {
    match to {
        ColorFormat::Cmyk => lab_to_cmyk(lab).map(Color::from),
        ColorFormat::Hex => lab_to_hex(lab).map(Color::from),
        ColorFormat::Hsl => lab_to_hsl(lab).map(Color::from),
        ColorFormat::Hsv => lab_to_hsv(lab).map(Color::from),
        ColorFormat::Lab => lab_to_lab(lab).map(Color::from),
        ColorFormat::Rgb => lab_to_rgb(lab).map(Color::from),
        ColorFormat::Sl => lab_to_sl(lab).map(Color::from),
        ColorFormat::Sv => lab_to_sv(lab).map(Color::from),
        ColorFormat::Xyz => lab_to_xyz(lab).map(Color::from),
    }
}

pub(super) fn lab_fan_out(lab: &Lab) -> ColorSet {
    ColorSet {
        cmyk: lab_to_cmyk(lab).into_value(),
        hex: lab_to_hex(lab).into_value(),
        hsl: lab_to_hsl(lab).into_value(),
        hsv: lab_to_hsv(lab).into_value(),
        lab: lab_to_lab(lab).into_value(),
        rgb: lab_to_rgb(lab).into_value(),
        sl: lab_to_sl(lab).into_value(),
        sv: lab_to_sv(lab).into_value(),
        xyz: lab_to_xyz(lab).into_value(),
    }
}
