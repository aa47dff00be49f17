use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// The nine color representations understood by the conversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Cmyk,
    Hex,
    Hsl,
    Hsv,
    Lab,
    Rgb,
    Sl,
    Sv,
    Xyz,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 9] = [
        ColorFormat::Cmyk,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Lab,
        ColorFormat::Rgb,
        ColorFormat::Sl,
        ColorFormat::Sv,
        ColorFormat::Xyz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Cmyk => "cmyk",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Lab => "lab",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Sl => "sl",
            ColorFormat::Sv => "sv",
            ColorFormat::Xyz => "xyz",
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();

        ColorFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| Error::UnsupportedFormat(input.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_every_format_tag() {
        for format in ColorFormat::ALL {
            assert_eq!(format.as_str().parse::<ColorFormat>().unwrap(), format);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" HSL ".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
    }

    #[test]
    fn rejects_unknown_formats() {
        let err = "oklch".parse::<ColorFormat>().unwrap_err();

        assert_eq!(err.to_string(), "Unsupported color format `oklch`");
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        assert_eq!(serde_json::to_string(&ColorFormat::Xyz).unwrap(), "\"xyz\"");
    }
}
