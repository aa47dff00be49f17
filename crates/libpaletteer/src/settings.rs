use std::path::Path;

use crate::admissibility::Thresholds;
use crate::{Error, Result};

/// Contents of `paletteer.yaml`. Every field is optional.
///
/// ```yaml
/// thresholds:
///   gray: 15
///   light: 80
/// generator:
///   max_attempts: 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub generator: GeneratorSettings,
}

/// Tuning knobs for the palette generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// How many random draws rejection sampling makes before projecting the last one.
    pub max_attempts: usize,
    /// Saturation of derived swatches jitters within plus or minus this.
    pub saturation_shift: f64,
    /// Lightness offset per cycle through the scheme's hues.
    pub lightness_shift: f64,
    pub monochromatic_saturation_step: f64,
    pub monochromatic_lightness_step: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            max_attempts: 1000,
            saturation_shift: 10.0,
            lightness_shift: 10.0,
            monochromatic_saturation_step: 10.0,
            monochromatic_lightness_step: 10.0,
        }
    }
}

impl Settings {
    pub fn parse(input: &str) -> Result<Self> {
        // An empty file is a valid, all-default configuration.
        if input.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_yaml::from_str(input)?;
        settings.verify()?;

        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let input = std::fs::read_to_string(path.as_ref())?;

        debug!("Loading settings from {}", path.as_ref().display());

        Settings::parse(&input)
    }

    /// Checks every threshold and generator value against its legal range.
    pub fn verify(&self) -> Result<()> {
        let t = &self.thresholds;

        let percentages = [
            ("gray", t.gray),
            ("dark", t.dark),
            ("light", t.light),
            ("hsv_bright_saturation", t.hsv_bright_saturation),
            ("cmyk_gray_spread", t.cmyk_gray_spread),
            ("cmyk_dark_key", t.cmyk_dark_key),
            ("cmyk_bright_ink", t.cmyk_bright_ink),
        ];

        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidSettings(format!(
                    "thresholds.{} must be between 0 and 100, found {}",
                    name, value
                )));
            }
        }

        if !(0.0..=255.0).contains(&t.rgb_gray_spread) {
            return Err(Error::InvalidSettings(format!(
                "thresholds.rgb_gray_spread must be between 0 and 255, found {}",
                t.rgb_gray_spread
            )));
        }

        if !(0.0..=125.0).contains(&t.lab_gray_axis) {
            return Err(Error::InvalidSettings(format!(
                "thresholds.lab_gray_axis must be between 0 and 125, found {}",
                t.lab_gray_axis
            )));
        }

        if t.dark > t.light {
            return Err(Error::InvalidSettings(format!(
                "thresholds.dark ({}) is above thresholds.light ({})",
                t.dark, t.light
            )));
        }

        let g = &self.generator;

        if g.max_attempts == 0 {
            return Err(Error::InvalidSettings(
                "generator.max_attempts must be at least 1".to_owned(),
            ));
        }

        let steps = [
            ("saturation_shift", g.saturation_shift),
            ("lightness_shift", g.lightness_shift),
            (
                "monochromatic_saturation_step",
                g.monochromatic_saturation_step,
            ),
            (
                "monochromatic_lightness_step",
                g.monochromatic_lightness_step,
            ),
        ];

        for (name, value) in steps {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidSettings(format!(
                    "generator.{} must be between 0 and 100, found {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
        assert_eq!(Settings::parse("\n  \n").unwrap(), Settings::default());
    }

    #[test]
    fn partial_settings_keep_the_other_defaults() {
        let input = indoc! {"
            thresholds:
              gray: 15
              light: 80
            generator:
              max_attempts: 50
        "};

        let settings = Settings::parse(input).unwrap();

        assert_eq!(settings.thresholds.gray, 15.0);
        assert_eq!(settings.thresholds.light, 80.0);
        assert_eq!(settings.thresholds.dark, 25.0);
        assert_eq!(settings.generator.max_attempts, 50);
        assert_eq!(settings.generator.saturation_shift, 10.0);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let input = indoc! {"
            thresholds:
              gray: 120
        "};

        let err = Settings::parse(input).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid paletteer.yaml: thresholds.gray must be between 0 and 100, found 120"
        );
    }

    #[test]
    fn rejects_dark_above_light() {
        let input = indoc! {"
            thresholds:
              dark: 80
              light: 60
        "};

        assert!(matches!(
            Settings::parse(input),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn rejects_zero_attempts() {
        let input = indoc! {"
            generator:
              max_attempts: 0
        "};

        assert!(matches!(
            Settings::parse(input),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn unknown_keys_are_yaml_errors() {
        let input = indoc! {"
            thresholds:
              grey: 10
        "};

        assert!(matches!(Settings::parse(input), Err(Error::Yaml(_))));
    }

    #[test]
    fn loads_from_a_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child(crate::SETTINGS_FILE_NAME);
        std::fs::write(&path, "generator:\n  lightness_shift: 5\n").unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.generator.lightness_shift, 5.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Settings::load("/definitely/not/here/paletteer.yaml"),
            Err(Error::Io(_))
        ));
    }
}
