//! Per-structure probability model: base probability, chunk-spacing gate,
//! biome eligibility, and a deterministic random factor.

use lodeseek_biome::Biome;
use lodeseek_rand::{JavaRandom, chunk_seed, feature_seed};

use crate::feature::{Dimension, FeatureType};

/// Constants for one structure type.
#[derive(Clone, Copy, Debug)]
pub struct StructureParams {
    pub structure: FeatureType,
    /// Base probability before the random factor and biome multiplier.
    pub base_probability: f64,
    /// Spacing gate: only 1-in-`spacing` chunks are eligible. Always positive.
    pub spacing: i32,
    /// Nominal placement Y reported on candidates (structures are
    /// chunk-granular; this is the depth the structure's anchor sits at).
    pub placement_y: i32,
}

/// Placement constants for all fifteen structures, in feature declaration
/// order.
pub static STRUCTURE_TABLE: [StructureParams; 15] = [
    StructureParams { structure: FeatureType::Village, base_probability: 0.40, spacing: 8, placement_y: 64 },
    StructureParams { structure: FeatureType::Stronghold, base_probability: 0.25, spacing: 16, placement_y: -20 },
    StructureParams { structure: FeatureType::EndCity, base_probability: 0.30, spacing: 12, placement_y: 60 },
    StructureParams { structure: FeatureType::NetherFortress, base_probability: 0.35, spacing: 10, placement_y: 48 },
    StructureParams { structure: FeatureType::Bastion, base_probability: 0.30, spacing: 12, placement_y: 48 },
    StructureParams { structure: FeatureType::AncientCity, base_probability: 0.20, spacing: 20, placement_y: -51 },
    StructureParams { structure: FeatureType::OceanMonument, base_probability: 0.25, spacing: 16, placement_y: 40 },
    StructureParams { structure: FeatureType::WoodlandMansion, base_probability: 0.10, spacing: 32, placement_y: 70 },
    StructureParams { structure: FeatureType::PillagerOutpost, base_probability: 0.30, spacing: 16, placement_y: 68 },
    StructureParams { structure: FeatureType::RuinedPortal, base_probability: 0.50, spacing: 6, placement_y: 60 },
    StructureParams { structure: FeatureType::Shipwreck, base_probability: 0.40, spacing: 8, placement_y: 45 },
    StructureParams { structure: FeatureType::BuriedTreasure, base_probability: 0.35, spacing: 8, placement_y: 50 },
    StructureParams { structure: FeatureType::DesertTemple, base_probability: 0.30, spacing: 12, placement_y: 64 },
    StructureParams { structure: FeatureType::JungleTemple, base_probability: 0.30, spacing: 12, placement_y: 66 },
    StructureParams { structure: FeatureType::WitchHut, base_probability: 0.25, spacing: 12, placement_y: 64 },
];

/// Looks up the constants row for a structure.
///
/// # Panics
///
/// Panics if `structure` is not a structure variant.
pub fn structure_params(structure: FeatureType) -> &'static StructureParams {
    STRUCTURE_TABLE
        .iter()
        .find(|params| params.structure == structure)
        .unwrap_or_else(|| panic!("{structure} is not a structure"))
}

impl StructureParams {
    /// Biome eligibility multiplier: 0.0 where the structure cannot occur,
    /// 1.0 neutral, above 1.0 for favorable biomes. Nether/End structures are
    /// gated by dimension instead and are neutral in their own biome tag.
    pub fn biome_multiplier(&self, biome: Biome) -> f64 {
        use Biome::*;
        use FeatureType::*;
        match self.structure.dimension() {
            Dimension::Nether => return if biome == Nether { 1.0 } else { 0.0 },
            Dimension::End => return if biome == End { 1.0 } else { 0.0 },
            Dimension::Overworld => {}
        }
        match self.structure {
            Village => match biome {
                Plains => 1.3,
                Desert | SnowyPlains => 1.2,
                Forest | Mountains => 1.0,
                _ => 0.0,
            },
            Stronghold => if biome == Ocean { 0.0 } else { 1.0 },
            AncientCity => match biome {
                Ocean | MushroomFields => 0.0,
                Mountains => 1.2,
                _ => 1.0,
            },
            OceanMonument => if biome == Ocean { 1.4 } else { 0.0 },
            WoodlandMansion => if biome == Forest { 1.5 } else { 0.0 },
            PillagerOutpost => match biome {
                Plains | Desert | SnowyPlains => 1.2,
                Mountains => 1.0,
                _ => 0.0,
            },
            RuinedPortal => 1.0,
            Shipwreck => if biome == Ocean { 1.3 } else { 0.0 },
            BuriedTreasure => if biome == Ocean { 1.2 } else { 0.0 },
            DesertTemple => if biome == Desert { 1.5 } else { 0.0 },
            JungleTemple => if biome == Jungle { 1.5 } else { 0.0 },
            WitchHut => if biome == Swamp { 1.5 } else { 0.0 },
            _ => unreachable!("non-structure handled above"),
        }
    }

    /// The 1-in-`spacing` chunk gate: a single bounded draw from a generator
    /// seeded by the chunk's coordinates. Reproduces "only 1-in-N chunks are
    /// even considered" placement rules.
    pub fn passes_spacing_gate(&self, world_seed: i64, chunk_x: i32, chunk_z: i32) -> bool {
        let mut random = JavaRandom::new(chunk_seed(world_seed, chunk_x, chunk_z));
        let draw = random
            .next_int(self.spacing)
            .expect("spacing constants are positive");
        draw == 0
    }

    /// Probability of this structure in a chunk, spacing gate excluded.
    ///
    /// `min(1, base * random_factor * biome_multiplier)` where the random
    /// factor is `0.5 + next_double()` in `[0.5, 1.5)`, drawn from a generator
    /// seeded via `feature_seed` at the chunk's origin block.
    pub fn probability(&self, world_seed: i64, chunk_x: i32, chunk_z: i32, biome: Biome) -> f64 {
        let multiplier = self.biome_multiplier(biome);
        if multiplier == 0.0 {
            return 0.0;
        }
        let seed = feature_seed(
            world_seed,
            chunk_x.wrapping_mul(16),
            0,
            chunk_z.wrapping_mul(16),
            self.structure.salt(),
        );
        let random_factor = 0.5 + JavaRandom::new(seed).next_double();
        (self.base_probability * random_factor * multiplier).min(1.0)
    }
}
