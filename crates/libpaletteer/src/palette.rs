use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::admissibility::Limits;
use crate::color::{Color, ColorSet, Hsl};
use crate::css::{css_string, unit_strings};
use crate::format::ColorFormat;
use crate::Error;

/// The harmony rule a palette is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    Complementary,
    Triadic,
    Tetradic,
    SplitComplementary,
    Diadic,
    Hexadic,
    Analogous,
    Monochromatic,
    Random,
}

impl PaletteType {
    pub const ALL: [PaletteType; 9] = [
        PaletteType::Complementary,
        PaletteType::Triadic,
        PaletteType::Tetradic,
        PaletteType::SplitComplementary,
        PaletteType::Diadic,
        PaletteType::Hexadic,
        PaletteType::Analogous,
        PaletteType::Monochromatic,
        PaletteType::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteType::Complementary => "complementary",
            PaletteType::Triadic => "triadic",
            PaletteType::Tetradic => "tetradic",
            PaletteType::SplitComplementary => "split-complementary",
            PaletteType::Diadic => "diadic",
            PaletteType::Hexadic => "hexadic",
            PaletteType::Analogous => "analogous",
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Random => "random",
        }
    }

    /// The fewest swatches that can express the scheme.
    pub fn min_swatches(&self) -> usize {
        match self {
            PaletteType::Complementary | PaletteType::Diadic | PaletteType::Analogous => 2,
            PaletteType::SplitComplementary | PaletteType::Triadic => 3,
            PaletteType::Tetradic => 4,
            PaletteType::Hexadic => 6,
            PaletteType::Monochromatic | PaletteType::Random => 1,
        }
    }

    /// Whether the scheme's hue list starts with the base hue itself.
    pub fn includes_base(&self) -> bool {
        matches!(
            self,
            PaletteType::Complementary
                | PaletteType::Tetradic
                | PaletteType::Diadic
                | PaletteType::Hexadic
                | PaletteType::Monochromatic
        )
    }
}

impl Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase().replace('_', "-");

        PaletteType::ALL
            .into_iter()
            .find(|palette_type| palette_type.as_str() == normalized)
            .ok_or_else(|| Error::UnknownPaletteType(input.to_owned()))
    }
}

fn default_num_boxes() -> usize {
    5
}

fn default_color_space() -> ColorFormat {
    ColorFormat::Hsl
}

/// What the caller asks the generator for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteOptions {
    #[serde(default = "default_num_boxes")]
    pub num_boxes: usize,
    pub palette_type: PaletteType,
    /// Seed color. A random base is drawn when absent.
    #[serde(default)]
    pub custom_color: Option<Color>,
    /// The format the seed was entered in. Informational: the seed's own tag wins.
    #[serde(default = "default_color_space")]
    pub initial_color_space: ColorFormat,
    #[serde(default)]
    pub enable_alpha: bool,
    #[serde(default)]
    pub limit_light: bool,
    #[serde(default)]
    pub limit_dark: bool,
    #[serde(default)]
    pub limit_gray: bool,
}

impl PaletteOptions {
    pub fn new(palette_type: PaletteType, num_boxes: usize) -> Self {
        PaletteOptions {
            num_boxes,
            palette_type,
            custom_color: None,
            initial_color_space: default_color_space(),
            enable_alpha: false,
            limit_light: false,
            limit_dark: false,
            limit_gray: false,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, color: impl Into<Color>) -> Self {
        let color = color.into();
        self.initial_color_space = color.format();
        self.custom_color = Some(color);
        self
    }

    pub fn limits(&self) -> Limits {
        Limits {
            gray: self.limit_gray,
            dark: self.limit_dark,
            light: self.limit_light,
        }
    }

    pub fn flags(&self) -> PaletteFlags {
        PaletteFlags {
            enable_alpha: self.enable_alpha,
            limit_dark: self.limit_dark,
            limit_gray: self.limit_gray,
            limit_light: self.limit_light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteFlags {
    pub enable_alpha: bool,
    pub limit_dark: bool,
    pub limit_gray: bool,
    pub limit_light: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteMetadata {
    pub num_boxes: usize,
    pub palette_type: PaletteType,
    pub color_space: ColorFormat,
    pub base: Hsl,
    pub base_colors: ColorSet,
    pub custom_color: Option<Color>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// One swatch of a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteItem {
    /// 1-based position in the palette.
    pub id: usize,
    pub hsl: Hsl,
    pub colors: ColorSet,
    pub strings: BTreeMap<ColorFormat, BTreeMap<String, String>>,
    pub css: BTreeMap<ColorFormat, String>,
}

impl PaletteItem {
    /// Expands a color into every format and its string renderings.
    pub fn new(id: usize, hsl: Hsl) -> Self {
        let colors = crate::convert::fan_out(&hsl.into()).into_value();

        let mut strings = BTreeMap::new();
        let mut css = BTreeMap::new();

        for format in ColorFormat::ALL {
            let color = colors.get(format);
            strings.insert(format, unit_strings(&color));
            css.insert(format, css_string(&color));
        }

        PaletteItem {
            id,
            hsl,
            colors,
            strings,
            css,
        }
    }

    pub fn css(&self, format: ColorFormat) -> &str {
        self.css.get(&format).map(String::as_str).unwrap_or_default()
    }
}

/// An ordered palette. The first item is always the base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub items: Vec<PaletteItem>,
    pub flags: PaletteFlags,
    pub metadata: PaletteMetadata,
}

impl Palette {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn base(&self) -> &Hsl {
        &self.metadata.base
    }
}
