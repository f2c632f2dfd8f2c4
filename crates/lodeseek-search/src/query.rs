//! Search input types.

use lodeseek_model::FeatureType;
use lodeseek_rand::seed_from_text;
use serde::{Deserialize, Serialize};

/// An integer block position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk coordinate of this position: `floor(x / 16)`.
    pub fn chunk_x(self) -> i32 {
        self.x.div_euclid(16)
    }

    /// Chunk coordinate of this position: `floor(z / 16)`.
    pub fn chunk_z(self) -> i32 {
        self.z.div_euclid(16)
    }
}

/// Immutable search input. Together with the engine's fixed constants this
/// fully determines the output list.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    /// World seed. Use [`SearchQuery::with_text_seed`] for user-typed input.
    pub seed: i64,
    /// Center of the square search region. Ore Y bands are absolute, so the
    /// center's y component does not restrict the scan; it is carried for the
    /// caller's record.
    pub center: BlockPos,
    /// Half-width of the region in blocks. Non-positive yields an empty
    /// result, not an error.
    pub radius: i32,
    /// Feature types to evaluate. Duplicates are ignored; empty yields an
    /// empty result.
    pub features: Vec<FeatureType>,
    /// Candidates below this probability (after rounding) are dropped.
    pub min_probability: f64,
    /// When false, nether-dimension features are skipped entirely.
    pub include_nether: bool,
}

impl SearchQuery {
    pub fn new(seed: i64, center: BlockPos, radius: i32, features: Vec<FeatureType>) -> Self {
        Self {
            seed,
            center,
            radius,
            features,
            min_probability: 0.0,
            include_nether: false,
        }
    }

    /// Builds a query from user-typed seed text via the fallback hashing rule
    /// in `lodeseek-rand` (never fails).
    pub fn with_text_seed(
        seed_text: &str,
        center: BlockPos,
        radius: i32,
        features: Vec<FeatureType>,
    ) -> Self {
        Self::new(seed_from_text(seed_text), center, radius, features)
    }

    pub fn min_probability(mut self, min_probability: f64) -> Self {
        self.min_probability = min_probability;
        self
    }

    pub fn include_nether(mut self, include_nether: bool) -> Self {
        self.include_nether = include_nether;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_coordinates_floor_toward_negative_infinity() {
        assert_eq!(BlockPos::new(0, 0, 0).chunk_x(), 0);
        assert_eq!(BlockPos::new(15, 0, 15).chunk_x(), 0);
        assert_eq!(BlockPos::new(16, 0, 16).chunk_x(), 1);
        assert_eq!(BlockPos::new(-1, 0, -1).chunk_x(), -1);
        assert_eq!(BlockPos::new(-16, 0, -16).chunk_x(), -1);
        assert_eq!(BlockPos::new(-17, 0, -17).chunk_z(), -2);
    }

    #[test]
    fn test_text_seed_matches_numeric_seed() {
        let center = BlockPos::new(0, 0, 0);
        let a = SearchQuery::with_text_seed("12345", center, 8, vec![FeatureType::Diamond]);
        let b = SearchQuery::new(12345, center, 8, vec![FeatureType::Diamond]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_setters() {
        let query = SearchQuery::new(1, BlockPos::default(), 4, vec![])
            .min_probability(0.25)
            .include_nether(true);
        assert_eq!(query.min_probability, 0.25);
        assert!(query.include_nether);
    }
}
