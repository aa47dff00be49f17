//! The color data model: one value record per format and a tagged [`Color`] over all nine.
//!
//! Every record carries an `alpha` channel in `[0, 1]`. Neutral values are produced by plain
//! constructors (`Rgb::neutral()` and friends) rather than shared constants, so a fallback can
//! never be mutated by one caller and observed by another.

use crate::format::ColorFormat;
use crate::validate::Validate;

/// D65 reference white, also the upper bounds of the XYZ axes.
pub const XYZ_MAX_X: f64 = 95.047;
pub const XYZ_MAX_Y: f64 = 100.0;
pub const XYZ_MAX_Z: f64 = 108.883;

/// Shared behaviour of the nine value records.
pub trait ColorValue: Validate + Clone + Into<Color> {
    const FORMAT: ColorFormat;

    /// The all-zero value returned when a conversion into this format falls back.
    fn neutral() -> Self;

    fn alpha(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hex {
    /// Six hexadecimal digits, optionally prefixed with `#`.
    pub hex: String,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// [`Hsl`] without its hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sl {
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// [`Hsv`] without its hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sv {
    pub saturation: f64,
    pub value: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Cmyk {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Cmyk {
            cyan,
            magenta,
            yellow,
            key,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Hex {
    pub fn new(hex: impl Into<String>) -> Self {
        Hex {
            hex: hex.into(),
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// The six digits without the optional `#`.
    pub fn body(&self) -> &str {
        self.hex.trim_start_matches('#')
    }

    /// The alpha channel as the two hexadecimal digits used in `#rrggbbaa`.
    pub fn alpha_byte(&self) -> String {
        let byte = (crate::sanitize::clamp_finite(self.alpha, 0.0, 1.0) * 255.0).round() as u8;
        format!("{:02x}", byte)
    }
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Hsl {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Hsv {
            hue,
            saturation,
            value,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Lab { l, a, b, alpha: 1.0 }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Rgb {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Sl {
    pub fn new(saturation: f64, lightness: f64) -> Self {
        Sl {
            saturation,
            lightness,
            alpha: 1.0,
        }
    }
}

impl Sv {
    pub fn new(saturation: f64, value: f64) -> Self {
        Sv {
            saturation,
            value,
            alpha: 1.0,
        }
    }
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Xyz { x, y, z, alpha: 1.0 }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

macro_rules! color_value {
    ($ty:ident, $variant:ident, $neutral:expr) => {
        impl ColorValue for $ty {
            const FORMAT: ColorFormat = ColorFormat::$variant;

            fn neutral() -> Self {
                $neutral
            }

            fn alpha(&self) -> f64 {
                self.alpha
            }
        }

        impl From<$ty> for Color {
            fn from(value: $ty) -> Self {
                Color::$variant(value)
            }
        }
    };
}

color_value!(Cmyk, Cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));
color_value!(Hex, Hex, Hex::new("#000000"));
color_value!(Hsl, Hsl, Hsl::new(0.0, 0.0, 0.0));
color_value!(Hsv, Hsv, Hsv::new(0.0, 0.0, 0.0));
color_value!(Lab, Lab, Lab::new(0.0, 0.0, 0.0));
color_value!(Rgb, Rgb, Rgb::new(0.0, 0.0, 0.0));
color_value!(Sl, Sl, Sl::new(0.0, 0.0));
color_value!(Sv, Sv, Sv::new(0.0, 0.0));
color_value!(Xyz, Xyz, Xyz::new(0.0, 0.0, 0.0));

/// A color value tagged with its format.
///
/// Serializes as `{ "format": "hsl", "value": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "value", rename_all = "lowercase")]
pub enum Color {
    Cmyk(Cmyk),
    Hex(Hex),
    Hsl(Hsl),
    Hsv(Hsv),
    Lab(Lab),
    Rgb(Rgb),
    Sl(Sl),
    Sv(Sv),
    Xyz(Xyz),
}

impl Color {
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Cmyk(_) => ColorFormat::Cmyk,
            Color::Hex(_) => ColorFormat::Hex,
            Color::Hsl(_) => ColorFormat::Hsl,
            Color::Hsv(_) => ColorFormat::Hsv,
            Color::Lab(_) => ColorFormat::Lab,
            Color::Rgb(_) => ColorFormat::Rgb,
            Color::Sl(_) => ColorFormat::Sl,
            Color::Sv(_) => ColorFormat::Sv,
            Color::Xyz(_) => ColorFormat::Xyz,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Color::Cmyk(c) => c.alpha,
            Color::Hex(c) => c.alpha,
            Color::Hsl(c) => c.alpha,
            Color::Hsv(c) => c.alpha,
            Color::Lab(c) => c.alpha,
            Color::Rgb(c) => c.alpha,
            Color::Sl(c) => c.alpha,
            Color::Sv(c) => c.alpha,
            Color::Xyz(c) => c.alpha,
        }
    }

    /// The neutral value of the given format.
    pub fn neutral(format: ColorFormat) -> Self {
        match format {
            ColorFormat::Cmyk => Cmyk::neutral().into(),
            ColorFormat::Hex => Hex::neutral().into(),
            ColorFormat::Hsl => Hsl::neutral().into(),
            ColorFormat::Hsv => Hsv::neutral().into(),
            ColorFormat::Lab => Lab::neutral().into(),
            ColorFormat::Rgb => Rgb::neutral().into(),
            ColorFormat::Sl => Sl::neutral().into(),
            ColorFormat::Sv => Sv::neutral().into(),
            ColorFormat::Xyz => Xyz::neutral().into(),
        }
    }
}

/// One color expressed in every format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    pub cmyk: Cmyk,
    pub hex: Hex,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub lab: Lab,
    pub rgb: Rgb,
    pub sl: Sl,
    pub sv: Sv,
    pub xyz: Xyz,
}

impl ColorSet {
    pub fn neutral() -> Self {
        ColorSet {
            cmyk: Cmyk::neutral(),
            hex: Hex::neutral(),
            hsl: Hsl::neutral(),
            hsv: Hsv::neutral(),
            lab: Lab::neutral(),
            rgb: Rgb::neutral(),
            sl: Sl::neutral(),
            sv: Sv::neutral(),
            xyz: Xyz::neutral(),
        }
    }

    pub fn get(&self, format: ColorFormat) -> Color {
        match format {
            ColorFormat::Cmyk => self.cmyk.into(),
            ColorFormat::Hex => self.hex.clone().into(),
            ColorFormat::Hsl => self.hsl.into(),
            ColorFormat::Hsv => self.hsv.into(),
            ColorFormat::Lab => self.lab.into(),
            ColorFormat::Rgb => self.rgb.into(),
            ColorFormat::Sl => self.sl.into(),
            ColorFormat::Sv => self.sv.into(),
            ColorFormat::Xyz => self.xyz.into(),
        }
    }

    /// All nine colors, in [`ColorFormat::ALL`] order.
    pub fn colors(&self) -> Vec<Color> {
        ColorFormat::ALL
            .into_iter()
            .map(|format| self.get(format))
            .collect()
    }
}
