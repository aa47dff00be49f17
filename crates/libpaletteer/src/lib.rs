#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub use serde_json;

pub mod admissibility;
pub mod color;
pub mod convert;
pub mod css;
mod format;
pub mod generator;
pub mod hues;
pub mod palette;
pub mod sanitize;
pub mod settings;
pub mod store;
mod validate;

pub use admissibility::{Admissible, Limits, Thresholds};
pub use color::{Cmyk, Color, ColorSet, ColorValue, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
pub use convert::{convert, fan_out, to_hsl, Converted};
pub use format::ColorFormat;
pub use generator::PaletteGenerator;
pub use palette::{Palette, PaletteFlags, PaletteItem, PaletteMetadata, PaletteOptions, PaletteType};
pub use settings::{GeneratorSettings, Settings};
pub use store::{JsonDirStore, MemoryStore, Mutation, MutationAction, PaletteStore};
pub use validate::{InvalidColor, Validate};

pub const SETTINGS_FILE_NAME: &str = "paletteer.yaml";
pub const MUTATIONS_FILE_NAME: &str = "mutations.jsonl";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidColor(#[from] InvalidColor),
    #[error("Unsupported color format `{0}`")]
    UnsupportedFormat(String),
    #[error("Unknown palette type `{0}`")]
    UnknownPaletteType(String),
    #[error("A {palette_type} palette needs at least {minimum} swatches, {requested} requested")]
    TooFewSwatches {
        palette_type: PaletteType,
        minimum: usize,
        requested: usize,
    },
    #[error("Invalid palette id `{0}`")]
    InvalidPaletteId(String),
    #[error("Invalid paletteer.yaml: {0}")]
    InvalidSettings(String),
    #[error("There was an error parsing your paletteer.yaml:\n\n{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not (de)serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// Milliseconds since the Unix epoch, used to stamp palettes and mutations.
pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
