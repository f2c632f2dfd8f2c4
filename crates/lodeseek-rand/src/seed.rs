//! Seed derivation: text → world seed, and world seed → per-chunk and
//! per-feature seeds.
//!
//! The three mixing multipliers below are shared with external reference
//! implementations. Results saved by other tools are only reproducible if
//! these stay byte-identical, so they are defined once, here, and nowhere
//! else.

use crate::random::JavaRandom;

/// Chunk/feature seed mixing multiplier for the x coordinate.
pub const CHUNK_X_MULTIPLIER: i64 = 341_873_128;
/// Chunk/feature seed mixing multiplier for the z coordinate.
pub const CHUNK_Z_MULTIPLIER: i64 = 132_897_987;
/// Feature seed mixing multiplier for the y coordinate.
pub const FEATURE_Y_MULTIPLIER: i64 = 268_582_165;

/// Converts user-supplied seed text to a world seed.
///
/// Text that parses as an integer literal is used directly, matching how the
/// game treats numeric seed input. Anything else falls back to Java's
/// `String.hashCode()` (32-bit signed wraparound at every step, sign-extended
/// to 64 bits). The empty string hashes to 0. This function never fails; a
/// malformed numeric string simply takes the hash path.
pub fn seed_from_text(text: &str) -> i64 {
    if let Ok(numeric) = text.trim().parse::<i64>() {
        return numeric;
    }
    java_string_hash(text) as i64
}

/// Java's `String.hashCode()`: `h = 31*h + c` over UTF-16 code units.
fn java_string_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash
}

/// Derives the seed for a chunk at chunk coordinates `(chunk_x, chunk_z)`.
///
/// One `next_long()` from a generator seeded with the world seed gives a base
/// seed; the chunk coordinates are then folded in with the two mixing
/// multipliers.
pub fn chunk_seed(world_seed: i64, chunk_x: i32, chunk_z: i32) -> i64 {
    let base = JavaRandom::new(world_seed).next_long();
    let mix = (chunk_x as i64)
        .wrapping_mul(CHUNK_X_MULTIPLIER)
        .wrapping_add((chunk_z as i64).wrapping_mul(CHUNK_Z_MULTIPLIER));
    base ^ mix
}

/// Derives the seed for a feature evaluation at a block position.
///
/// `salt` is a stable per-feature-kind constant (see the model crate); it is
/// what keeps different features decorrelated at the same position.
pub fn feature_seed(world_seed: i64, x: i32, y: i32, z: i32, salt: i64) -> i64 {
    let mix = (x as i64)
        .wrapping_mul(CHUNK_X_MULTIPLIER)
        .wrapping_add((z as i64).wrapping_mul(CHUNK_Z_MULTIPLIER))
        .wrapping_add((y as i64).wrapping_mul(FEATURE_Y_MULTIPLIER))
        .wrapping_add(salt);
    world_seed ^ mix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_is_used_directly() {
        assert_eq!(seed_from_text("12345"), 12345);
        assert_eq!(seed_from_text("-42"), -42);
        assert_eq!(seed_from_text("  9001  "), 9001);
        assert_eq!(seed_from_text("0"), 0);
    }

    #[test]
    fn test_empty_text_hashes_to_zero() {
        assert_eq!(seed_from_text(""), 0);
    }

    #[test]
    fn test_text_hash_matches_java_string_hash_code() {
        // Values from the JVM: "hello".hashCode(), "minecraft".hashCode(),
        // "Glacier".hashCode(), "notch".hashCode().
        assert_eq!(seed_from_text("hello"), 99162322);
        assert_eq!(seed_from_text("minecraft"), 695073197);
        assert_eq!(seed_from_text("Glacier"), 1772835215);
        assert_eq!(seed_from_text("notch"), 105008760);
    }

    #[test]
    fn test_malformed_numeric_text_falls_back_to_hash() {
        // Overflows i64, so it must take the hash path rather than erroring.
        let seed = seed_from_text("99999999999999999999999");
        assert_ne!(seed, 0);
        assert_eq!(seed, seed_from_text("99999999999999999999999"));
    }

    #[test]
    fn test_chunk_seed_reference_values() {
        assert_eq!(chunk_seed(12345, 0, 0), 6674089274190705457);
        assert_eq!(chunk_seed(12345, 3, -7), 6674089274248208210);
    }

    #[test]
    fn test_chunk_seed_varies_with_coordinates() {
        let origin = chunk_seed(42, 0, 0);
        assert_ne!(origin, chunk_seed(42, 1, 0));
        assert_ne!(origin, chunk_seed(42, 0, 1));
        assert_ne!(chunk_seed(42, 1, 0), chunk_seed(42, 0, 1));
    }

    #[test]
    fn test_feature_seed_reference_value() {
        assert_eq!(feature_seed(12345, 100, -59, -200, 7), -8238644671);
    }

    #[test]
    fn test_feature_seed_varies_with_salt() {
        let a = feature_seed(42, 10, 20, 30, 1_000_000);
        let b = feature_seed(42, 10, 20, 30, 2_000_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_feature_seed_is_pure() {
        for i in 0..100 {
            assert_eq!(
                feature_seed(7, i, -i, i * 3, 500),
                feature_seed(7, i, -i, i * 3, 500)
            );
        }
    }
}
