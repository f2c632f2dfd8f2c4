//! Probability models for ores and structures.
//!
//! A [`ProbabilityModel`] is a pure function of the world seed: it owns one
//! noise field per ore (decorrelated by the ore's salt) and all the fixed
//! constants tables. Instances are built fresh per search call and never
//! shared; there is no global state anywhere in this crate.

mod feature;
mod ore;
mod structure;

pub use feature::{
    Dimension, FeatureKind, FeatureType, STRUCTURE_SALT_MULTIPLIER, UnknownFeature,
};
pub use ore::{ORE_TABLE, OreParams, ore_params};
pub use structure::{STRUCTURE_TABLE, StructureParams, structure_params};

use lodeseek_biome::Biome;
use lodeseek_noise::NoiseField;

/// Density model for every searchable feature under one world seed.
pub struct ProbabilityModel {
    world_seed: i64,
    /// One noise field per [`ORE_TABLE`] row, in table order.
    ore_fields: Vec<NoiseField>,
}

impl ProbabilityModel {
    /// Builds the per-ore noise fields for `world_seed`. Each field is seeded
    /// with the world seed offset by the ore's salt so ore densities are
    /// mutually decorrelated.
    pub fn new(world_seed: i64) -> Self {
        let ore_fields = ORE_TABLE
            .iter()
            .map(|params| NoiseField::new(world_seed.wrapping_add(params.ore.salt())))
            .collect();
        Self {
            world_seed,
            ore_fields,
        }
    }

    pub fn world_seed(&self) -> i64 {
        self.world_seed
    }

    /// Probability of `ore` at block `(x, y, z)` in `biome`, in `[0, 1]`.
    ///
    /// `clamp(y_weight * (octave_noise + offset) * biome_multiplier, 0, 1)`;
    /// the hard Y cutoffs in the ore table short-circuit to 0.
    ///
    /// # Panics
    ///
    /// Panics if `ore` is not an ore variant.
    pub fn ore_probability(&self, ore: FeatureType, x: i32, y: i32, z: i32, biome: Biome) -> f64 {
        let (row, params) = ORE_TABLE
            .iter()
            .enumerate()
            .find(|(_, params)| params.ore == ore)
            .unwrap_or_else(|| panic!("{ore} is not an ore"));

        let weight = params.y_weight(y);
        if weight == 0.0 {
            return 0.0;
        }

        let noise =
            self.ore_fields[row].octave3(x as f64, y as f64, z as f64, params.noise);
        let density = weight * (noise + params.noise_offset) * params.biome_multiplier(biome);
        density.clamp(0.0, 1.0)
    }

    /// Probability of `structure` in chunk `(chunk_x, chunk_z)` given the
    /// chunk's biome. Does not apply the spacing gate; see
    /// [`StructureParams::passes_spacing_gate`].
    ///
    /// # Panics
    ///
    /// Panics if `structure` is not a structure variant.
    pub fn structure_probability(
        &self,
        structure: FeatureType,
        chunk_x: i32,
        chunk_z: i32,
        biome: Biome,
    ) -> f64 {
        structure_params(structure).probability(self.world_seed, chunk_x, chunk_z, biome)
    }

    /// Whether the 1-in-N spacing gate admits `structure` in this chunk.
    pub fn passes_spacing_gate(&self, structure: FeatureType, chunk_x: i32, chunk_z: i32) -> bool {
        structure_params(structure).passes_spacing_gate(self.world_seed, chunk_x, chunk_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_is_deterministic() {
        let a = ProbabilityModel::new(12345);
        let b = ProbabilityModel::new(12345);
        for i in -30..30 {
            let p_a = a.ore_probability(FeatureType::Diamond, i * 3, -56, i * 7, Biome::Plains);
            let p_b = b.ore_probability(FeatureType::Diamond, i * 3, -56, i * 7, Biome::Plains);
            assert_eq!(p_a, p_b);
        }
    }

    #[test]
    fn test_ore_probability_in_unit_interval() {
        let model = ProbabilityModel::new(-987);
        for params in &ORE_TABLE {
            for i in 0..200 {
                let y = params.min_y + (i % (params.max_y - params.min_y + 1).max(1));
                let p = model.ore_probability(params.ore, i * 5, y, -i * 3, Biome::Plains);
                assert!((0.0..=1.0).contains(&p), "{}: {p}", params.ore);
            }
        }
    }

    #[test]
    fn test_ore_probability_zero_outside_y_cutoffs() {
        let model = ProbabilityModel::new(1);
        assert_eq!(
            model.ore_probability(FeatureType::Diamond, 0, 17, 0, Biome::Plains),
            0.0
        );
        assert_eq!(
            model.ore_probability(FeatureType::Redstone, 0, 0, 0, Biome::Plains),
            0.0
        );
    }

    #[test]
    fn test_peak_band_beats_fringe_on_average() {
        let model = ProbabilityModel::new(31337);
        let mut peak_sum = 0.0;
        let mut fringe_sum = 0.0;
        let samples = 500;
        for i in 0..samples {
            let (x, z) = (i * 11, i * -7);
            peak_sum += model.ore_probability(FeatureType::Diamond, x, -56, z, Biome::Plains);
            fringe_sum += model.ore_probability(FeatureType::Diamond, x, 12, z, Biome::Plains);
        }
        assert!(
            peak_sum > fringe_sum,
            "peak-band mean {peak_sum} not above fringe mean {fringe_sum}"
        );
    }

    #[test]
    fn test_ores_are_decorrelated() {
        let model = ProbabilityModel::new(5555);
        let mut identical = 0;
        for i in 0..200 {
            let d = model.ore_probability(FeatureType::Diamond, i, -56, i, Biome::Plains);
            let r = model.ore_probability(FeatureType::Redstone, i, -56, i, Biome::Plains);
            if d == r {
                identical += 1;
            }
        }
        assert!(identical < 20, "diamond and redstone agree too often: {identical}");
    }

    #[test]
    fn test_different_seeds_give_different_fields() {
        let a = ProbabilityModel::new(1);
        let b = ProbabilityModel::new(2);
        let mut differing = 0;
        for i in 0..100 {
            let pa = a.ore_probability(FeatureType::Iron, i * 4, 16, i * 9, Biome::Plains);
            let pb = b.ore_probability(FeatureType::Iron, i * 4, 16, i * 9, Biome::Plains);
            if pa != pb {
                differing += 1;
            }
        }
        assert!(differing > 50);
    }
}
