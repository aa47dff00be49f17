#[macro_use]
extern crate log;

use thiserror::Error;

pub mod commands {
    pub mod convert;
    pub mod generate;
}

mod parse;
pub mod swatch;

pub use parse::parse_css_color;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Paletteer(#[from] libpaletteer::Error),
    #[error(transparent)]
    InvalidColor(#[from] libpaletteer::InvalidColor),
    #[error("Could not parse `{input}` as a CSS color: {message}")]
    UnparsableColor { input: String, message: String },
    #[error("Could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
