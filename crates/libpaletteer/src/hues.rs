//! Harmony schemes: functions from a base hue to the hues of a palette.
//!
//! All results are wrapped into `[0, 360)`. Random offsets are drawn as whole degrees from the
//! RNG the caller passes in, so a seeded RNG gives the same hues every time.

use rand::Rng;

use crate::palette::PaletteType;

/// Candidate distances for [`diadic`], in degrees.
pub const DIADIC_DISTANCES: [f64; 8] = [30.0, 45.0, 60.0, 75.0, 90.0, 120.0, 150.0, 180.0];

/// Probability of each entry of [`DIADIC_DISTANCES`].
pub const DIADIC_WEIGHTS: [f64; 8] = [0.10, 0.10, 0.15, 0.10, 0.15, 0.15, 0.15, 0.10];

/// Upper bound of the analogous spread.
const ANALOGOUS_MAX_SPREAD: i64 = 60;

pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);

    // rem_euclid of a tiny negative number rounds up to 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn wrap_all(hues: impl IntoIterator<Item = f64>) -> Vec<f64> {
    hues.into_iter().map(wrap_hue).collect()
}

fn degrees<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> f64 {
    rng.gen_range(low..=high) as f64
}

/// Index of the first entry whose cumulative weight exceeds `sample`, or the last index if
/// rounding leaves `sample` past the total.
pub fn weighted_pick(weights: &[f64], sample: f64) -> usize {
    let mut cumulative = 0.0;

    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > sample {
            return index;
        }
    }

    weights.len().saturating_sub(1)
}

pub fn complementary(base: f64) -> Vec<f64> {
    wrap_all([base, base + 180.0])
}

pub fn triadic(base: f64) -> Vec<f64> {
    wrap_all([base + 120.0, base + 240.0])
}

/// Two complementary pairs, the second `90 ± 30` degrees away from the first.
pub fn tetradic<R: Rng + ?Sized>(base: f64, rng: &mut R) -> Vec<f64> {
    let distance = 90.0 + degrees(rng, -30, 30);

    wrap_all([
        base,
        base + 180.0,
        base + distance,
        base + distance + 180.0,
    ])
}

pub fn split_complementary<R: Rng + ?Sized>(base: f64, rng: &mut R) -> Vec<f64> {
    let offset = degrees(rng, 20, 40);

    wrap_all([base + 180.0 + offset, base + 180.0 - offset])
}

pub fn diadic<R: Rng + ?Sized>(base: f64, rng: &mut R) -> Vec<f64> {
    let index = weighted_pick(&DIADIC_WEIGHTS, rng.gen::<f64>());

    wrap_all([base, base + DIADIC_DISTANCES[index]])
}

/// Three complementary pairs spaced `60 ± 10` degrees apart.
pub fn hexadic<R: Rng + ?Sized>(base: f64, rng: &mut R) -> Vec<f64> {
    let distance = degrees(rng, 50, 70);

    wrap_all([
        base,
        base + 180.0,
        base + distance,
        base + distance + 180.0,
        base - distance,
        base - distance + 180.0,
    ])
}

/// `num_boxes - 1` hues after the base, evenly stepped across a random spread of at most 60
/// degrees. Fewer than two boxes leaves nothing to step.
pub fn analogous<R: Rng + ?Sized>(base: f64, num_boxes: usize, rng: &mut R) -> Vec<f64> {
    if num_boxes < 2 {
        return Vec::new();
    }

    let steps = (num_boxes - 1) as i64;
    let min_spread = (10 * steps).min(ANALOGOUS_MAX_SPREAD);
    let spread = rng.gen_range(min_spread..=ANALOGOUS_MAX_SPREAD);
    let increment = (spread / steps) as f64;

    wrap_all((1..=steps).map(|step| base + step as f64 * increment))
}

pub fn monochromatic(base: f64, num_boxes: usize) -> Vec<f64> {
    vec![wrap_hue(base); num_boxes]
}

pub fn random<R: Rng + ?Sized>(num_boxes: usize, rng: &mut R) -> Vec<f64> {
    (0..num_boxes).map(|_| degrees(rng, 0, 359)).collect()
}

/// The hues proposed by a palette type's scheme.
pub fn scheme_hues<R: Rng + ?Sized>(
    palette_type: PaletteType,
    base: f64,
    num_boxes: usize,
    rng: &mut R,
) -> Vec<f64> {
    match palette_type {
        PaletteType::Complementary => complementary(base),
        PaletteType::Triadic => triadic(base),
        PaletteType::Tetradic => tetradic(base, rng),
        PaletteType::SplitComplementary => split_complementary(base, rng),
        PaletteType::Diadic => diadic(base, rng),
        PaletteType::Hexadic => hexadic(base, rng),
        PaletteType::Analogous => analogous(base, num_boxes, rng),
        PaletteType::Monochromatic => monochromatic(base, num_boxes),
        PaletteType::Random => random(num_boxes, rng),
    }
}
