use libpaletteer::hues::wrap_hue;
use libpaletteer::sanitize::round_to;
use libpaletteer::{Color, Hex, Hsl, Rgb};

use crate::{Error, Result};

/// Reads any CSS color (`#f80`, `rebeccapurple`, `hsl(30 100% 50% / 0.5)`, ...).
///
/// Hex input stays hex and `hsl(...)` input comes back as HSL, so the seed keeps the color
/// space the user wrote it in. HSL components are kept to two decimals instead of going
/// through 8-bit channels. Everything else is read as RGB.
pub fn parse_css_color(input: &str) -> Result<Color> {
    let parsed = csscolorparser::parse(input).map_err(|e| Error::UnparsableColor {
        input: input.to_owned(),
        message: e.to_string(),
    })?;

    let alpha = parsed.a.clamp(0.0, 1.0);
    let trimmed = input.trim().to_ascii_lowercase();

    if trimmed.starts_with("hsl") {
        let (hue, saturation, lightness, _) = parsed.to_hsla();
        let hue = if hue.is_finite() { hue } else { 0.0 };

        return Ok(Color::Hsl(
            Hsl::new(
                wrap_hue(round_to(hue, 2)),
                percentage(saturation),
                percentage(lightness),
            )
            .with_alpha(alpha),
        ));
    }

    let [red, green, blue, _] = parsed.to_rgba8();

    let color = if trimmed.starts_with('#') {
        Color::Hex(Hex::new(format!("#{:02x}{:02x}{:02x}", red, green, blue)).with_alpha(alpha))
    } else {
        Color::Rgb(Rgb::new(red as f64, green as f64, blue as f64).with_alpha(alpha))
    };

    Ok(color)
}

fn percentage(fraction: f64) -> f64 {
    if fraction.is_finite() {
        round_to(fraction * 100.0, 2).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
