use crate::swatch::swatch;
use crate::{parse_css_color, Result};
use libpaletteer::{
    ColorFormat, JsonDirStore, Palette, PaletteGenerator, PaletteOptions, PaletteType, Settings,
};
use owo_colors::{OwoColorize as _, Stream};
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::path::Path;

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub palette_type: PaletteType,
    pub num_boxes: usize,
    /// A CSS color to build the palette around.
    pub seed: Option<&'a str>,
    pub enable_alpha: bool,
    pub limit_gray: bool,
    pub limit_dark: bool,
    pub limit_light: bool,
    /// Makes the run reproducible.
    pub rng_seed: Option<u64>,
    pub config: Option<&'a Path>,
    /// Directory to persist the palette to.
    pub out: Option<&'a Path>,
    pub json: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let minimum = args.palette_type.min_swatches();
    if args.num_boxes < minimum {
        return Err(libpaletteer::Error::TooFewSwatches {
            palette_type: args.palette_type,
            minimum,
            requested: args.num_boxes,
        }
        .into());
    }

    let settings = match args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut options = PaletteOptions::new(args.palette_type, args.num_boxes);
    if let Some(seed) = args.seed {
        options = options.with_seed(parse_css_color(seed)?);
    }
    options.enable_alpha = args.enable_alpha;
    options.limit_gray = args.limit_gray;
    options.limit_dark = args.limit_dark;
    options.limit_light = args.limit_light;

    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = PaletteGenerator::try_new(settings)?;

    let palette = match args.out {
        Some(dir) => {
            let mut store = JsonDirStore::open(dir)?;
            let palette = generator.generate_and_store(&options, &mut rng, &mut store)?;
            info!("Saved palette {} to {}", palette.id, store.dir().display());

            palette
        }
        None => generator.generate(&options, &mut rng),
    };

    if args.json {
        writeln!(args.stdout, "{}", serde_json::to_string_pretty(&palette)?)?;
    } else {
        print_palette(&palette, args.stdout)?;
    }

    Ok(())
}

fn print_palette<W: std::io::Write>(palette: &Palette, stdout: &mut W) -> Result<()> {
    writeln!(
        stdout,
        "{} {} ({} swatches)",
        palette
            .metadata
            .palette_type
            .if_supports_color(Stream::Stdout, |s| s.bold()),
        palette.id,
        palette.len()
    )?;

    for item in &palette.items {
        writeln!(
            stdout,
            "{} {:>2}  {:<10} {:<26} {}",
            swatch(&item.colors.rgb),
            item.id,
            item.css(ColorFormat::Hex),
            item.css(ColorFormat::Rgb),
            item.css(ColorFormat::Hsl),
        )?;
    }

    Ok(())
}
