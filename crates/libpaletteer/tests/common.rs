#![allow(dead_code)]

use libpaletteer::{Cmyk, Color, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `steps + 1` evenly spaced values from `start` to `end`, both included.
pub fn steps(start: f64, end: f64, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| {
            if i == steps {
                end
            } else {
                start + (end - start) * i as f64 / steps as f64
            }
        })
        .collect()
}

/// Every combination of 0, 51, ..., 255 per channel.
pub fn rgb_grid() -> Vec<Rgb> {
    let channel = steps(0.0, 255.0, 5);
    let mut colors = Vec::new();

    for r in &channel {
        for g in &channel {
            for b in &channel {
                colors.push(Rgb::new(*r, *g, *b));
            }
        }
    }

    colors
}

/// Colors whose hue lands on a whole degree, so HSL and HSV hold them exactly.
pub fn whole_degree_rgb() -> Vec<Rgb> {
    vec![
        Rgb::new(0.0, 0.0, 0.0),
        Rgb::new(255.0, 255.0, 255.0),
        Rgb::new(128.0, 128.0, 128.0),
        Rgb::new(51.0, 51.0, 51.0),
        Rgb::new(255.0, 0.0, 0.0),
        Rgb::new(0.0, 255.0, 0.0),
        Rgb::new(0.0, 0.0, 255.0),
        Rgb::new(255.0, 255.0, 0.0),
        Rgb::new(0.0, 255.0, 255.0),
        Rgb::new(255.0, 0.0, 255.0),
        Rgb::new(0.0, 128.0, 128.0),
        Rgb::new(128.0, 0.0, 0.0),
        Rgb::new(255.0, 128.0, 0.0),
        Rgb::new(128.0, 255.0, 0.0),
    ]
}

/// A grid of valid values in every format.
pub fn valid_colors() -> Vec<Color> {
    let mut colors: Vec<Color> = Vec::new();

    for rgb in rgb_grid() {
        colors.push(Color::Hex(libpaletteer::convert::rgb::rgb_to_hex(&rgb).into_value()));
        colors.push(rgb.into());
    }

    let hues = steps(0.0, 315.0, 7);
    let percentages = steps(0.0, 100.0, 4);

    for hue in &hues {
        for s in &percentages {
            for l in &percentages {
                colors.push(Hsl::new(*hue, *s, *l).into());
                colors.push(Hsv::new(*hue, *s, *l).into());
            }
        }
    }

    for s in &percentages {
        for l in &percentages {
            colors.push(Sl::new(*s, *l).into());
            colors.push(Sv::new(*s, *l).into());

            for c in &percentages {
                for k in &percentages {
                    colors.push(Cmyk::new(*c, *s, *l, *k).into());
                }
            }
        }
    }

    let axis = steps(-125.0, 125.0, 4);
    for l in &percentages {
        for a in &axis {
            for b in &axis {
                colors.push(Lab::new(*l, *a, *b).into());
            }
        }
    }

    for x in steps(0.0, 95.047, 3) {
        for y in steps(0.0, 100.0, 3) {
            for z in steps(0.0, 108.883, 3) {
                colors.push(Xyz::new(x, y, z).into());
            }
        }
    }

    colors.push(Hex::new("ABCDEF").into());
    colors.push(Rgb::new(10.0, 20.0, 30.0).with_alpha(0.5).into());

    colors
}

/// One invalid value per format.
pub fn invalid_colors() -> Vec<Color> {
    vec![
        Cmyk::new(-1.0, 0.0, 0.0, 0.0).into(),
        Hex::new("#12345").into(),
        Hsl::new(360.0, 50.0, 50.0).into(),
        Hsv::new(10.0, 101.0, 50.0).into(),
        Lab::new(50.0, 0.0, -126.0).into(),
        Rgb::new(0.0, f64::NAN, 0.0).into(),
        Sl {
            saturation: 50.0,
            lightness: 50.0,
            alpha: 2.0,
        }
        .into(),
        Sv::new(f64::INFINITY, 0.0).into(),
        Xyz::new(0.0, 100.5, 0.0).into(),
    ]
}

pub fn max_channel_difference(a: &Rgb, b: &Rgb) -> f64 {
    (a.red - b.red)
        .abs()
        .max((a.green - b.green).abs())
        .max((a.blue - b.blue).abs())
}
