//! Per-ore probability model: a piecewise Y-band weight multiplied by a
//! shifted octave-noise sample.
//!
//! Every ore has a fixed constants row in [`ORE_TABLE`]; the numbers are part
//! of the deterministic contract and are never re-derived per search.

use lodeseek_biome::Biome;
use lodeseek_noise::OctaveParams;

use crate::feature::FeatureType;

/// Constants for one ore type.
#[derive(Clone, Copy, Debug)]
pub struct OreParams {
    pub ore: FeatureType,
    /// Hard lower Y cutoff (inclusive). Probability is 0 below it.
    pub min_y: i32,
    /// Hard upper Y cutoff (inclusive). Probability is 0 above it.
    pub max_y: i32,
    /// Band where the Y weight is 1.0 (inclusive).
    pub peak_min_y: i32,
    pub peak_max_y: i32,
    /// Octave-noise tuple for this ore's density field.
    pub noise: OctaveParams,
    /// Baseline shift added to the noise sample before clamping, so most of
    /// the distribution is positive.
    pub noise_offset: f64,
}

/// Density constants for all seven ores.
///
/// Bands follow the depth ordering players expect: coal shallow, iron mid,
/// diamond and redstone at the bottom, netherite in its own dimension.
pub static ORE_TABLE: [OreParams; 7] = [
    OreParams {
        ore: FeatureType::Diamond,
        min_y: -64,
        max_y: 16,
        peak_min_y: -59,
        peak_max_y: -53,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.05 },
        noise_offset: 0.55,
    },
    OreParams {
        ore: FeatureType::Gold,
        min_y: -64,
        max_y: 32,
        peak_min_y: -24,
        peak_max_y: 0,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.06 },
        noise_offset: 0.50,
    },
    OreParams {
        ore: FeatureType::Iron,
        min_y: -24,
        max_y: 72,
        peak_min_y: 8,
        peak_max_y: 24,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.07 },
        noise_offset: 0.60,
    },
    OreParams {
        ore: FeatureType::Coal,
        min_y: 0,
        max_y: 128,
        peak_min_y: 80,
        peak_max_y: 96,
        noise: OctaveParams { octaves: 2, persistence: 0.6, scale: 0.08 },
        noise_offset: 0.65,
    },
    OreParams {
        ore: FeatureType::Redstone,
        min_y: -64,
        max_y: -32,
        peak_min_y: -59,
        peak_max_y: -51,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.055 },
        noise_offset: 0.55,
    },
    OreParams {
        ore: FeatureType::Lapis,
        min_y: -64,
        max_y: 64,
        peak_min_y: -8,
        peak_max_y: 8,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.065 },
        noise_offset: 0.50,
    },
    OreParams {
        ore: FeatureType::Netherite,
        min_y: 8,
        max_y: 22,
        peak_min_y: 13,
        peak_max_y: 17,
        noise: OctaveParams { octaves: 3, persistence: 0.5, scale: 0.045 },
        noise_offset: 0.45,
    },
];

/// Looks up the constants row for an ore.
///
/// # Panics
///
/// Panics if `ore` is not an ore variant; the search layer partitions feature
/// sets before calling in.
pub fn ore_params(ore: FeatureType) -> &'static OreParams {
    ORE_TABLE
        .iter()
        .find(|params| params.ore == ore)
        .unwrap_or_else(|| panic!("{ore} is not an ore"))
}

impl OreParams {
    /// Piecewise Y weight: 1.0 inside the peak band, linear decay toward the
    /// hard cutoffs, exactly 0 outside `[min_y, max_y]`.
    pub fn y_weight(&self, y: i32) -> f64 {
        if y < self.min_y || y > self.max_y {
            return 0.0;
        }
        if y >= self.peak_min_y && y <= self.peak_max_y {
            return 1.0;
        }
        if y < self.peak_min_y {
            (y - self.min_y) as f64 / (self.peak_min_y - self.min_y) as f64
        } else {
            (self.max_y - y) as f64 / (self.max_y - self.peak_max_y) as f64
        }
    }

    /// Biome multiplier for this ore. Ore density is mostly biome-agnostic;
    /// the one documented exception is richer gold in badlands.
    pub fn biome_multiplier(&self, biome: Biome) -> f64 {
        match (self.ore, biome) {
            (FeatureType::Gold, Biome::Badlands) => 1.2,
            _ => 1.0,
        }
    }
}
