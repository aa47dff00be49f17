use libpaletteer::sanitize::sanitize_rgb_byte;
use libpaletteer::Rgb;
use owo_colors::{OwoColorize as _, Stream};

const BLOCK: &str = "      ";

/// A block of background color, or plain spaces when stdout does not support color.
pub fn swatch(rgb: &Rgb) -> String {
    let red = sanitize_rgb_byte(rgb.red) as u8;
    let green = sanitize_rgb_byte(rgb.green) as u8;
    let blue = sanitize_rgb_byte(rgb.blue) as u8;

    BLOCK
        .if_supports_color(Stream::Stdout, |s| s.on_truecolor(red, green, blue))
        .to_string()
}
