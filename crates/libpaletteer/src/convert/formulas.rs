//! The direct conversion formulas. Every other pair is a composition of these.
//!
//! These functions assume their input already passed validation; the public wrappers in the
//! sibling modules run the gate first. Outputs are always sanitized into range.

use crate::color::*;
use crate::sanitize::{
    clamp_finite, round_to, sanitize_percentage, sanitize_radial, sanitize_rgb_byte, sanitize_xyz,
};

/// sRGB -> XYZ (D65), rows are X, Y, Z.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ (D65) -> sRGB, rows are R, G, B.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// CIE threshold between the cube root and the linear segment of the LAB curve.
const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

fn multiply(matrix: &[[f64; 3]; 3], [a, b, c]: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * a + row[1] * b + row[2] * c)
}

/// Inverse sRGB gamma.
fn linearize(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// Forward sRGB gamma.
fn delinearize(channel: f64) -> f64 {
    if channel > 0.0031308 {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * channel
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    let cubed = t.powi(3);

    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

/// Hue in degrees plus the normalized max, min and chroma of an RGB triple.
///
/// Achromatic colors get hue 0 without dividing by the zero chroma. Ties resolve in red,
/// green, blue order.
fn hue_and_extremes(rgb: &Rgb) -> (f64, f64, f64, f64) {
    let red = rgb.red / 255.0;
    let green = rgb.green / 255.0;
    let blue = rgb.blue / 255.0;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, max, min, 0.0);
    }

    let sector = if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    (sector * 60.0, max, min, delta)
}

pub(crate) fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let (hue, max, min, delta) = hue_and_extremes(rgb);
    let lightness = (max + min) / 2.0;

    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl {
        hue: sanitize_radial(hue),
        saturation: sanitize_percentage(saturation * 100.0),
        lightness: sanitize_percentage(lightness * 100.0),
        alpha: rgb.alpha,
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub(crate) fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let hue = hsl.hue / 360.0;
    let saturation = hsl.saturation / 100.0;
    let lightness = hsl.lightness / 100.0;

    let (red, green, blue) = if saturation == 0.0 {
        (lightness, lightness, lightness)
    } else {
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    };

    Rgb {
        red: sanitize_rgb_byte(red * 255.0),
        green: sanitize_rgb_byte(green * 255.0),
        blue: sanitize_rgb_byte(blue * 255.0),
        alpha: hsl.alpha,
    }
}

pub(crate) fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let (hue, max, _, delta) = hue_and_extremes(rgb);
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue: sanitize_radial(hue),
        saturation: sanitize_percentage(saturation * 100.0),
        value: sanitize_percentage(max * 100.0),
        alpha: rgb.alpha,
    }
}

pub(crate) fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let saturation = hsv.saturation / 100.0;
    let value = hsv.value / 100.0;

    let position = hsv.hue / 60.0;
    let sector = (position.floor() as i64).rem_euclid(6);
    let fraction = position - position.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (red, green, blue) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb {
        red: sanitize_rgb_byte(red * 255.0),
        green: sanitize_rgb_byte(green * 255.0),
        blue: sanitize_rgb_byte(blue * 255.0),
        alpha: hsv.alpha,
    }
}

pub(crate) fn rgb_to_cmyk(rgb: &Rgb) -> Cmyk {
    let red = rgb.red / 255.0;
    let green = rgb.green / 255.0;
    let blue = rgb.blue / 255.0;

    let key = 1.0 - red.max(green).max(blue);

    // Pure black has no ink left to distribute.
    let ink = |channel: f64| {
        if key == 1.0 {
            0.0
        } else {
            (1.0 - channel - key) / (1.0 - key)
        }
    };

    Cmyk {
        cyan: sanitize_percentage(ink(red) * 100.0),
        magenta: sanitize_percentage(ink(green) * 100.0),
        yellow: sanitize_percentage(ink(blue) * 100.0),
        key: sanitize_percentage(key * 100.0),
        alpha: rgb.alpha,
    }
}

pub(crate) fn cmyk_to_rgb(cmyk: &Cmyk) -> Rgb {
    let key = 1.0 - cmyk.key / 100.0;
    let channel = |ink: f64| sanitize_rgb_byte(255.0 * (1.0 - ink / 100.0) * key);

    Rgb {
        red: channel(cmyk.cyan),
        green: channel(cmyk.magenta),
        blue: channel(cmyk.yellow),
        alpha: cmyk.alpha,
    }
}

pub(crate) fn rgb_to_hex(rgb: &Rgb) -> Hex {
    let byte = |channel: f64| sanitize_rgb_byte(channel) as u8;

    Hex {
        hex: format!(
            "#{:02x}{:02x}{:02x}",
            byte(rgb.red),
            byte(rgb.green),
            byte(rgb.blue)
        ),
        alpha: rgb.alpha,
    }
}

pub(crate) fn hex_to_rgb(hex: &Hex) -> Rgb {
    let value = u32::from_str_radix(hex.body(), 16).unwrap_or(0);

    Rgb {
        red: f64::from((value >> 16) & 255),
        green: f64::from((value >> 8) & 255),
        blue: f64::from(value & 255),
        alpha: hex.alpha,
    }
}

pub(crate) fn rgb_to_xyz(rgb: &Rgb) -> Xyz {
    let linear = [rgb.red, rgb.green, rgb.blue].map(|c| linearize(c / 255.0) * 100.0);
    let [x, y, z] = multiply(&RGB_TO_XYZ, linear);
    let (x, y, z) = sanitize_xyz(x, y, z);

    Xyz {
        x,
        y,
        z,
        alpha: rgb.alpha,
    }
}

pub(crate) fn xyz_to_rgb(xyz: &Xyz) -> Rgb {
    let linear = multiply(&XYZ_TO_RGB, [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0]);
    let [red, green, blue] =
        linear.map(|c| sanitize_rgb_byte(clamp_finite(delinearize(c), 0.0, 1.0) * 255.0));

    Rgb {
        red,
        green,
        blue,
        alpha: xyz.alpha,
    }
}

pub(crate) fn xyz_to_lab(xyz: &Xyz) -> Lab {
    let fx = lab_f(xyz.x / XYZ_MAX_X);
    let fy = lab_f(xyz.y / XYZ_MAX_Y);
    let fz = lab_f(xyz.z / XYZ_MAX_Z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    Lab {
        l: clamp_finite(round_to(l, 2), 0.0, 100.0),
        a: clamp_finite(round_to(a, 2), -125.0, 125.0),
        b: clamp_finite(round_to(b, 2), -125.0, 125.0),
        alpha: xyz.alpha,
    }
}

pub(crate) fn lab_to_xyz(lab: &Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let (x, y, z) = sanitize_xyz(
        lab_f_inverse(fx) * XYZ_MAX_X,
        lab_f_inverse(fy) * XYZ_MAX_Y,
        lab_f_inverse(fz) * XYZ_MAX_Z,
    );

    Xyz {
        x,
        y,
        z,
        alpha: lab.alpha,
    }
}

pub(crate) fn hsl_to_sl(hsl: &Hsl) -> Sl {
    Sl {
        saturation: hsl.saturation,
        lightness: hsl.lightness,
        alpha: hsl.alpha,
    }
}

pub(crate) fn hsv_to_sv(hsv: &Hsv) -> Sv {
    Sv {
        saturation: hsv.saturation,
        value: hsv.value,
        alpha: hsv.alpha,
    }
}

/// SL has no hue; lifting it back assumes red.
pub(crate) fn sl_to_hsl(sl: &Sl) -> Hsl {
    Hsl {
        hue: 0.0,
        saturation: sl.saturation,
        lightness: sl.lightness,
        alpha: sl.alpha,
    }
}

pub(crate) fn sv_to_hsv(sv: &Sv) -> Hsv {
    Hsv {
        hue: 0.0,
        saturation: sv.saturation,
        value: sv.value,
        alpha: sv.alpha,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn red_to_hsl_and_back() {
        let hsl = rgb_to_hsl(&Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));

        assert_eq!(hsl_to_rgb(&hsl), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsl(&Rgb::new(128.0, 128.0, 128.0)), Hsl::new(0.0, 0.0, 50.0));
        assert_eq!(rgb_to_hsv(&Rgb::new(0.0, 0.0, 0.0)), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(&Rgb::new(255.0, 255.0, 255.0)), Hsv::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn hue_follows_the_dominant_channel() {
        assert_eq!(rgb_to_hsl(&Rgb::new(0.0, 255.0, 0.0)).hue, 120.0);
        assert_eq!(rgb_to_hsl(&Rgb::new(0.0, 0.0, 255.0)).hue, 240.0);
        assert_eq!(rgb_to_hsl(&Rgb::new(255.0, 0.0, 255.0)).hue, 300.0);
        // Red and green tie for max: the red branch wins.
        assert_eq!(rgb_to_hsl(&Rgb::new(255.0, 255.0, 0.0)).hue, 60.0);
    }

    #[test]
    fn hsv_sectors_cover_the_wheel() {
        let expected = [
            (0.0, Rgb::new(255.0, 0.0, 0.0)),
            (60.0, Rgb::new(255.0, 255.0, 0.0)),
            (120.0, Rgb::new(0.0, 255.0, 0.0)),
            (180.0, Rgb::new(0.0, 255.0, 255.0)),
            (240.0, Rgb::new(0.0, 0.0, 255.0)),
            (300.0, Rgb::new(255.0, 0.0, 255.0)),
        ];

        for (hue, rgb) in expected {
            assert_eq!(hsv_to_rgb(&Hsv::new(hue, 100.0, 100.0)), rgb, "hue {}", hue);
        }
    }

    #[test]
    fn hsv_of_orange() {
        assert_eq!(rgb_to_hsv(&Rgb::new(255.0, 128.0, 0.0)), Hsv::new(30.0, 100.0, 100.0));
    }

    #[test]
    fn cmyk_of_black_has_no_ink() {
        assert_eq!(rgb_to_cmyk(&Rgb::new(0.0, 0.0, 0.0)), Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn cmyk_of_red() {
        assert_eq!(rgb_to_cmyk(&Rgb::new(255.0, 0.0, 0.0)), Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert_eq!(cmyk_to_rgb(&Cmyk::new(0.0, 100.0, 100.0, 0.0)), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(rgb_to_hex(&Rgb::new(10.0, 171.0, 255.0)).hex, "#0aabff");
        assert_eq!(rgb_to_hex(&Rgb::new(0.0, 0.0, 0.0)).hex, "#000000");
    }

    #[test]
    fn hex_channels_are_extracted_by_shifting() {
        assert_eq!(hex_to_rgb(&Hex::new("#0AabFF")), Rgb::new(10.0, 171.0, 255.0));
        assert_eq!(hex_to_rgb(&Hex::new("ff8000")), Rgb::new(255.0, 128.0, 0.0));
    }

    #[test]
    fn xyz_of_red_matches_the_matrix_column() {
        let xyz = rgb_to_xyz(&Rgb::new(255.0, 0.0, 0.0));

        assert!((xyz.x - 41.24).abs() < 1e-9);
        assert!((xyz.y - 21.26).abs() < 1e-9);
        assert!((xyz.z - 1.93).abs() < 1e-9);
    }

    #[test]
    fn white_is_clamped_to_the_reference_white() {
        let xyz = rgb_to_xyz(&Rgb::new(255.0, 255.0, 255.0));

        assert_eq!(xyz.x, 95.047);
        assert!((xyz.y - 100.0).abs() < 1e-9);
        assert_eq!(xyz.z, 108.883);
        assert_eq!(xyz_to_rgb(&xyz), Rgb::new(255.0, 255.0, 255.0));
    }

    #[test]
    fn xyz_of_red_goes_back_to_red() {
        assert_eq!(xyz_to_rgb(&Xyz::new(41.24, 21.26, 1.93)), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn lab_of_the_reference_white() {
        assert_eq!(
            xyz_to_lab(&Xyz::new(95.047, 100.0, 108.883)),
            Lab::new(100.0, 0.0, 0.0)
        );
    }

    #[test]
    fn lab_of_black_uses_the_linear_segment() {
        assert_eq!(xyz_to_lab(&Xyz::new(0.0, 0.0, 0.0)), Lab::new(0.0, 0.0, 0.0));
        assert_eq!(lab_to_xyz(&Lab::new(0.0, 0.0, 0.0)), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn lab_is_rounded_to_two_decimals() {
        let lab = xyz_to_lab(&rgb_to_xyz(&Rgb::new(255.0, 0.0, 0.0)));

        assert_eq!(lab.l, round_to(lab.l, 2));
        assert!((lab.l - 53.24).abs() < 0.1, "{:?}", lab);
        assert!((lab.a - 80.09).abs() < 0.1, "{:?}", lab);
        assert!((lab.b - 67.20).abs() < 0.1, "{:?}", lab);
    }

    #[test]
    fn projections_drop_the_hue() {
        let hsl = Hsl::new(200.0, 40.0, 60.0).with_alpha(0.5);
        let sl = hsl_to_sl(&hsl);

        assert_eq!(sl, Sl { saturation: 40.0, lightness: 60.0, alpha: 0.5 });
        assert_eq!(sl_to_hsl(&sl), Hsl::new(0.0, 40.0, 60.0).with_alpha(0.5));
        assert_eq!(hsv_to_sv(&Hsv::new(10.0, 20.0, 30.0)), Sv::new(20.0, 30.0));
        assert_eq!(sv_to_hsv(&Sv::new(20.0, 30.0)), Hsv::new(0.0, 20.0, 30.0));
    }

    #[test]
    fn alpha_is_carried_through() {
        let rgb = Rgb::new(12.0, 34.0, 56.0).with_alpha(0.25);

        assert_eq!(rgb_to_hsl(&rgb).alpha, 0.25);
        assert_eq!(rgb_to_hex(&rgb).alpha, 0.25);
        assert_eq!(xyz_to_lab(&rgb_to_xyz(&rgb)).alpha, 0.25);
        assert_eq!(cmyk_to_rgb(&rgb_to_cmyk(&rgb)).alpha, 0.25);
    }
}
