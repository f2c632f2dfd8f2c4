//! Search result records and their ordering rule.

use std::cmp::Ordering;

use lodeseek_biome::Biome;
use lodeseek_model::FeatureType;
use serde::{Deserialize, Serialize};

/// One qualifying location. Created during a search, never mutated afterward;
/// owned solely by the result list.
///
/// Serializes with the exact field names the display layer expects:
/// `{x, y, z, chunkX, chunkZ, probability, featureType, biome}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub chunk_x: i32,
    pub chunk_z: i32,
    /// Rounded to two decimal places at construction; the rounding is an
    /// observable contract, downstream consumers compare these values.
    pub probability: f64,
    pub feature_type: FeatureType,
    pub biome: Biome,
}

impl Candidate {
    /// Builds a candidate, rounding `probability` to two decimals.
    pub fn new(
        x: i32,
        y: i32,
        z: i32,
        probability: f64,
        feature_type: FeatureType,
        biome: Biome,
    ) -> Self {
        Self {
            x,
            y,
            z,
            chunk_x: x.div_euclid(16),
            chunk_z: z.div_euclid(16),
            probability: round_probability(probability),
            feature_type,
            biome,
        }
    }
}

/// Two-decimal rounding, half away from zero, applied before emission.
pub fn round_probability(probability: f64) -> f64 {
    (probability * 100.0).round() / 100.0
}

/// Result ordering: probability descending, ties broken by ascending scan
/// order (x, then z, then y, then feature declaration order). Total over the
/// finite probabilities the engine produces, and independent of insertion
/// order, which is what lets the parallel scan merge by re-sorting.
pub fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.probability
        .partial_cmp(&a.probability)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.cmp(&b.x))
        .then_with(|| a.z.cmp(&b.z))
        .then_with(|| a.y.cmp(&b.y))
        .then_with(|| a.feature_type.index().cmp(&b.feature_type.index()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(x: i32, z: i32, y: i32, p: f64, feature: FeatureType) -> Candidate {
        Candidate::new(x, y, z, p, feature, Biome::Plains)
    }

    #[test]
    fn test_probability_rounds_to_two_decimals() {
        assert_eq!(round_probability(0.123), 0.12);
        assert_eq!(round_probability(0.125), 0.13);
        assert_eq!(round_probability(0.999), 1.0);
        assert_eq!(round_probability(0.0), 0.0);
        assert_eq!(round_probability(1.0), 1.0);
    }

    #[test]
    fn test_candidate_constructor_rounds() {
        let c = candidate(0, 0, -56, 0.6789, FeatureType::Diamond);
        assert_eq!(c.probability, 0.68);
    }

    #[test]
    fn test_chunk_coordinates_derived_from_block_position() {
        let c = candidate(-17, 33, -56, 0.5, FeatureType::Diamond);
        assert_eq!(c.chunk_x, -2);
        assert_eq!(c.chunk_z, 2);
    }

    #[test]
    fn test_rank_prefers_higher_probability() {
        let hi = candidate(100, 100, 0, 0.9, FeatureType::Coal);
        let lo = candidate(0, 0, -56, 0.5, FeatureType::Diamond);
        assert_eq!(rank(&hi, &lo), Ordering::Less);
    }

    #[test]
    fn test_rank_ties_break_by_scan_order() {
        let a = candidate(0, 5, -56, 0.5, FeatureType::Diamond);
        let b = candidate(4, 0, -56, 0.5, FeatureType::Diamond);
        assert_eq!(rank(&a, &b), Ordering::Less, "lower x wins ties");

        let c = candidate(0, 0, -56, 0.5, FeatureType::Diamond);
        let d = candidate(0, 4, -58, 0.5, FeatureType::Diamond);
        assert_eq!(rank(&c, &d), Ordering::Less, "lower z wins before y");

        let e = candidate(0, 0, -58, 0.5, FeatureType::Diamond);
        let f = candidate(0, 0, -56, 0.5, FeatureType::Diamond);
        assert_eq!(rank(&e, &f), Ordering::Less, "lower y wins");

        let g = candidate(0, 0, -56, 0.5, FeatureType::Diamond);
        let h = candidate(0, 0, -56, 0.5, FeatureType::Gold);
        assert_eq!(rank(&g, &h), Ordering::Less, "feature order is final tie-break");
    }

    #[test]
    fn test_json_field_names_are_the_wire_contract() {
        let c = candidate(-17, 33, -56, 0.675, FeatureType::Diamond);
        let json = serde_json::to_value(&c).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["biome", "chunkX", "chunkZ", "featureType", "probability", "x", "y", "z"]
        );
        assert_eq!(json["chunkX"], -2);
        assert_eq!(json["featureType"], "diamond");
        assert_eq!(json["biome"], "plains");
        assert_eq!(json["probability"], 0.68);
    }

    #[test]
    fn test_json_round_trip() {
        let c = candidate(1, 2, 3, 0.44, FeatureType::WitchHut);
        let json = serde_json::to_string(&c).unwrap();
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
