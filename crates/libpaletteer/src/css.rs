//! Rendering of color values as CSS-style strings.
//!
//! `rgb`, `hsl` and hex strings are valid CSS. The other formats use the same functional
//! notation (`cmyk(...)`, `xyz(...)`) so every format reads the same way in a palette listing.
//! When alpha is below 1 the function name gets an `a` suffix and the alpha is appended, and
//! hex grows to eight digits.

use std::collections::BTreeMap;

use crate::color::*;
use crate::sanitize::{
    round_to, sanitize_alpha, sanitize_lab, sanitize_percentage, sanitize_radial,
    sanitize_rgb_byte,
};

fn percent(value: f64) -> String {
    format!("{}%", sanitize_percentage(value))
}

fn functional(name: &str, args: &[String], alpha: f64) -> String {
    let alpha = sanitize_alpha(alpha);

    if alpha < 1.0 {
        format!("{}a({}, {})", name, args.join(", "), alpha)
    } else {
        format!("{}({})", name, args.join(", "))
    }
}

/// The CSS string for a color, e.g. `rgb(255, 0, 0)` or `hsla(0, 100%, 50%, 0.5)`.
pub fn css_string(color: &Color) -> String {
    match color {
        Color::Cmyk(c) => functional(
            "cmyk",
            &[
                percent(c.cyan),
                percent(c.magenta),
                percent(c.yellow),
                percent(c.key),
            ],
            c.alpha,
        ),
        Color::Hex(c) => {
            let body = c.body().to_ascii_lowercase();

            if sanitize_alpha(c.alpha) < 1.0 {
                format!("#{}{}", body, c.alpha_byte())
            } else {
                format!("#{}", body)
            }
        }
        Color::Hsl(c) => functional(
            "hsl",
            &[
                sanitize_radial(c.hue).to_string(),
                percent(c.saturation),
                percent(c.lightness),
            ],
            c.alpha,
        ),
        Color::Hsv(c) => functional(
            "hsv",
            &[
                sanitize_radial(c.hue).to_string(),
                percent(c.saturation),
                percent(c.value),
            ],
            c.alpha,
        ),
        Color::Lab(c) => functional(
            "lab",
            &[
                percent(c.l),
                sanitize_lab(c.a).to_string(),
                sanitize_lab(c.b).to_string(),
            ],
            c.alpha,
        ),
        Color::Rgb(c) => functional(
            "rgb",
            &[
                sanitize_rgb_byte(c.red).to_string(),
                sanitize_rgb_byte(c.green).to_string(),
                sanitize_rgb_byte(c.blue).to_string(),
            ],
            c.alpha,
        ),
        Color::Sl(c) => functional("sl", &[percent(c.saturation), percent(c.lightness)], c.alpha),
        Color::Sv(c) => functional("sv", &[percent(c.saturation), percent(c.value)], c.alpha),
        Color::Xyz(c) => functional(
            "xyz",
            &[
                round_to(c.x, 2).to_string(),
                round_to(c.y, 2).to_string(),
                round_to(c.z, 2).to_string(),
            ],
            c.alpha,
        ),
    }
}

/// Every field of a color rendered with its unit: percentages get a `%` suffix, hues,
/// channels and axes are bare numbers.
pub fn unit_strings(color: &Color) -> BTreeMap<String, String> {
    let fields: Vec<(&str, String)> = match color {
        Color::Cmyk(c) => vec![
            ("cyan", percent(c.cyan)),
            ("magenta", percent(c.magenta)),
            ("yellow", percent(c.yellow)),
            ("key", percent(c.key)),
        ],
        Color::Hex(c) => vec![("hex", format!("#{}", c.body().to_ascii_lowercase()))],
        Color::Hsl(c) => vec![
            ("hue", sanitize_radial(c.hue).to_string()),
            ("saturation", percent(c.saturation)),
            ("lightness", percent(c.lightness)),
        ],
        Color::Hsv(c) => vec![
            ("hue", sanitize_radial(c.hue).to_string()),
            ("saturation", percent(c.saturation)),
            ("value", percent(c.value)),
        ],
        Color::Lab(c) => vec![
            ("l", round_to(c.l, 2).to_string()),
            ("a", round_to(c.a, 2).to_string()),
            ("b", round_to(c.b, 2).to_string()),
        ],
        Color::Rgb(c) => vec![
            ("red", sanitize_rgb_byte(c.red).to_string()),
            ("green", sanitize_rgb_byte(c.green).to_string()),
            ("blue", sanitize_rgb_byte(c.blue).to_string()),
        ],
        Color::Sl(c) => vec![
            ("saturation", percent(c.saturation)),
            ("lightness", percent(c.lightness)),
        ],
        Color::Sv(c) => vec![
            ("saturation", percent(c.saturation)),
            ("value", percent(c.value)),
        ],
        Color::Xyz(c) => vec![
            ("x", round_to(c.x, 2).to_string()),
            ("y", round_to(c.y, 2).to_string()),
            ("z", round_to(c.z, 2).to_string()),
        ],
    };

    fields
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .chain(std::iter::once((
            "alpha".to_owned(),
            sanitize_alpha(color.alpha()).to_string(),
        )))
        .collect()
}
