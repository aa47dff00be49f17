use crate::swatch::swatch;
use crate::{parse_css_color, Result};
use libpaletteer::css::css_string;
use libpaletteer::{convert, fan_out, Color, ColorFormat};

pub struct ConvertArgs<'a, W: std::io::Write> {
    /// Any CSS color.
    pub input: &'a str,
    /// Print only this format instead of all of them.
    pub to: Option<ColorFormat>,
    pub json: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ConvertArgs<W>) -> Result<()> {
    let color = parse_css_color(args.input)?;

    let colors: Vec<Color> = match args.to {
        Some(format) => vec![convert(&color, format).into_result()?],
        None => fan_out(&color).into_result()?.colors(),
    };

    if args.json {
        writeln!(args.stdout, "{}", serde_json::to_string_pretty(&colors)?)?;
        return Ok(());
    }

    if args.to.is_none() {
        let rgb = convert(&color, ColorFormat::Rgb).into_result()?;
        if let Color::Rgb(rgb) = rgb {
            writeln!(args.stdout, "{}", swatch(&rgb))?;
        }
    }

    for color in colors {
        if args.to.is_some() {
            writeln!(args.stdout, "{}", css_string(&color))?;
        } else {
            writeln!(args.stdout, "{:<5}{}", color.format().as_str(), css_string(&color))?;
        }
    }

    Ok(())
}
