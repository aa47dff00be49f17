//! Palette generation.
//!
//! A palette starts from a base color (the caller's seed or a random one). The palette type's
//! harmony scheme proposes hues, each hue gets a saturation and lightness, and every resulting
//! color is fanned out to all formats. Hues are reused in order when the scheme proposes fewer
//! than the requested number of swatches, and every pass over them pushes lightness further
//! from the base.

use rand::Rng;

use crate::admissibility::{Admissible, Limits};
use crate::color::{ColorValue, Hsl};
use crate::convert::{fan_out, to_hsl};
use crate::hues::{self, scheme_hues};
use crate::palette::{Palette, PaletteItem, PaletteMetadata, PaletteOptions, PaletteType};
use crate::sanitize::{round_to, sanitize_percentage};
use crate::settings::Settings;
use crate::store::PaletteStore;
use crate::{now_millis, Error, Result};

#[derive(Debug, Clone, Default)]
pub struct PaletteGenerator {
    settings: Settings,
}

impl PaletteGenerator {
    /// Trusts `settings` as given. Use [`PaletteGenerator::try_new`] for settings built by hand.
    pub fn new(settings: Settings) -> Self {
        PaletteGenerator { settings }
    }

    /// Like [`PaletteGenerator::new`], but rejects settings that fail [`Settings::verify`].
    pub fn try_new(settings: Settings) -> Result<Self> {
        settings.verify()?;

        Ok(PaletteGenerator { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds a palette. Never fails: a swatch count below the scheme's minimum gives a
    /// palette with no items, and the reason is logged.
    pub fn generate<R: Rng + ?Sized>(&self, options: &PaletteOptions, rng: &mut R) -> Palette {
        // Not drawn from `rng`: palettes generated from the same seed still need distinct keys.
        let id = format!("palette-{:016x}", rand::thread_rng().gen::<u64>());
        let base = self.base_color(options, rng);

        debug!(
            "Generating {} palette {} with {} swatches from hsl({}, {}, {})",
            options.palette_type,
            id,
            options.num_boxes,
            base.hue,
            base.saturation,
            base.lightness
        );

        let minimum = options.palette_type.min_swatches();

        let items = if options.num_boxes < minimum {
            let err = Error::TooFewSwatches {
                palette_type: options.palette_type,
                minimum,
                requested: options.num_boxes,
            };
            error!("{}", err);

            Vec::new()
        } else {
            std::iter::once(base)
                .chain(self.derived_colors(&base, options, rng))
                .enumerate()
                .map(|(index, hsl)| PaletteItem::new(index + 1, hsl))
                .collect()
        };

        Palette {
            id,
            items,
            flags: options.flags(),
            metadata: PaletteMetadata {
                num_boxes: options.num_boxes,
                palette_type: options.palette_type,
                color_space: options.initial_color_space,
                base,
                base_colors: fan_out(&base.into()).into_value(),
                custom_color: options.custom_color.clone(),
                timestamp: now_millis(),
            },
        }
    }

    /// Builds a palette and saves it.
    pub fn generate_and_store<R: Rng + ?Sized>(
        &self,
        options: &PaletteOptions,
        rng: &mut R,
        store: &mut dyn PaletteStore,
    ) -> Result<Palette> {
        let palette = self.generate(options, rng);
        store.save(&palette)?;

        Ok(palette)
    }

    fn base_color<R: Rng + ?Sized>(&self, options: &PaletteOptions, rng: &mut R) -> Hsl {
        let mut base = match &options.custom_color {
            Some(seed) => {
                if seed.format() != options.initial_color_space {
                    debug!(
                        "Seed is tagged {} but the initial color space is {}, using the tag",
                        seed.format(),
                        options.initial_color_space
                    );
                }

                to_hsl(seed).into_value()
            }
            None => {
                let limits = options.limits();

                if limits.any() {
                    let hue = random_degrees(rng);
                    self.sample_admissible(hue, random_alpha(options, rng), limits, rng)
                } else {
                    random_hsl(options, rng)
                }
            }
        };

        if !options.enable_alpha {
            base.alpha = 1.0;
        }

        base
    }

    fn derived_colors<R: Rng + ?Sized>(
        &self,
        base: &Hsl,
        options: &PaletteOptions,
        rng: &mut R,
    ) -> Vec<Hsl> {
        let count = options.num_boxes.saturating_sub(1);
        let limits = options.limits();

        match options.palette_type {
            PaletteType::Monochromatic => self.monochromatic(base, count),
            PaletteType::Random => hues::random(count, rng)
                .into_iter()
                .map(|hue| {
                    let alpha = random_alpha(options, rng);

                    if limits.any() {
                        self.sample_admissible(hue, alpha, limits, rng)
                    } else {
                        Hsl::new(hue, random_percentage(rng), random_percentage(rng))
                            .with_alpha(alpha)
                    }
                })
                .collect(),
            palette_type => {
                let mut proposed =
                    scheme_hues(palette_type, base.hue, options.num_boxes, rng);

                if palette_type.includes_base() && !proposed.is_empty() {
                    proposed.remove(0);
                }

                if proposed.is_empty() {
                    return Vec::new();
                }

                (0..count)
                    .map(|index| {
                        let hue = proposed[index % proposed.len()];
                        let cycle = index / proposed.len() + 1;

                        if limits.any() {
                            self.sample_admissible(hue, base.alpha, limits, rng)
                        } else {
                            self.shifted(base, hue, index, cycle, rng)
                        }
                    })
                    .collect()
            }
        }
    }

    /// The base's saturation with some jitter, and its lightness pushed up or down (alternating
    /// per swatch) by a step that grows with each pass over the scheme's hues.
    fn shifted<R: Rng + ?Sized>(
        &self,
        base: &Hsl,
        hue: f64,
        index: usize,
        cycle: usize,
        rng: &mut R,
    ) -> Hsl {
        let generator = &self.settings.generator;

        let shift = generator.saturation_shift.abs();
        let jitter = if shift.is_finite() && shift > 0.0 {
            rng.gen_range(-shift..=shift).round()
        } else {
            0.0
        };
        let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
        let offset = direction * generator.lightness_shift * cycle as f64;

        Hsl::new(
            hue,
            sanitize_percentage(base.saturation + jitter),
            sanitize_percentage(base.lightness + offset),
        )
        .with_alpha(base.alpha)
    }

    fn monochromatic(&self, base: &Hsl, count: usize) -> Vec<Hsl> {
        let generator = &self.settings.generator;

        (1..=count)
            .map(|step| {
                let saturation =
                    base.saturation - generator.monochromatic_saturation_step * step as f64;

                // +1, -1, +2, -2, ... steps away from the base lightness.
                let direction = if step % 2 == 1 { 1.0 } else { -1.0 };
                let distance = ((step + 1) / 2) as f64;
                let lightness =
                    base.lightness + direction * generator.monochromatic_lightness_step * distance;

                Hsl::new(
                    base.hue,
                    sanitize_percentage(saturation),
                    sanitize_percentage(lightness),
                )
                .with_alpha(base.alpha)
            })
            .collect()
    }

    /// Draws saturation and lightness pairs for `hue` until one passes the enabled limits.
    ///
    /// Gives up after `max_attempts` draws and moves the last draw into the admissible band
    /// instead.
    fn sample_admissible<R: Rng + ?Sized>(
        &self,
        hue: f64,
        alpha: f64,
        limits: Limits,
        rng: &mut R,
    ) -> Hsl {
        let thresholds = &self.settings.thresholds;
        let attempts = self.settings.generator.max_attempts.max(1);

        let mut candidate = Hsl::neutral();

        for _ in 0..attempts {
            candidate = Hsl::new(hue, random_percentage(rng), random_percentage(rng))
                .with_alpha(alpha);

            if candidate.is_admissible(limits, thresholds) {
                return candidate;
            }
        }

        warn!(
            "No admissible color for hue {} after {} attempts, projecting the last draw",
            hue, attempts
        );

        if limits.gray {
            candidate.saturation = candidate.saturation.max(thresholds.gray.ceil());
        }
        if limits.dark {
            candidate.lightness = candidate.lightness.max(thresholds.dark.ceil());
        }
        if limits.light {
            candidate.lightness = candidate.lightness.min(thresholds.light.floor());
        }

        candidate.saturation = sanitize_percentage(candidate.saturation);
        candidate.lightness = sanitize_percentage(candidate.lightness);

        candidate
    }
}

fn random_degrees<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0..360) as f64
}

fn random_percentage<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0..=100) as f64
}

fn random_alpha<R: Rng + ?Sized>(options: &PaletteOptions, rng: &mut R) -> f64 {
    if options.enable_alpha {
        round_to(rng.gen::<f64>(), 2)
    } else {
        1.0
    }
}

fn random_hsl<R: Rng + ?Sized>(options: &PaletteOptions, rng: &mut R) -> Hsl {
    let hue = random_degrees(rng);
    let saturation = random_percentage(rng);
    let lightness = random_percentage(rng);

    Hsl::new(hue, saturation, lightness).with_alpha(random_alpha(options, rng))
}
