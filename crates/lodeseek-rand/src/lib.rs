//! Java-compatible pseudo-random number generation and seed derivation.
//!
//! Everything downstream (noise fields, biome classification, structure
//! placement) derives its randomness from the 48-bit LCG in this crate, so the
//! bit patterns here are a compatibility contract: a world seed must produce
//! the same candidate list as the reference implementation, draw for draw.

mod random;
mod seed;

pub use random::{JavaRandom, RandomError};
pub use seed::{
    CHUNK_X_MULTIPLIER, CHUNK_Z_MULTIPLIER, FEATURE_Y_MULTIPLIER, chunk_seed, feature_seed,
    seed_from_text,
};
