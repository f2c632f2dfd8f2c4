//! Candidate search: scans a bounding region, evaluates per-feature
//! probability, filters and ranks.
//!
//! The engine is a pure, deterministic function of (seed, coordinates,
//! parameters): it owns no long-lived state, performs no I/O, and constructs
//! its whole generator hierarchy per call, so concurrent searches never share
//! anything.

mod candidate;
mod engine;
mod pacer;
mod parallel;
mod query;

pub use candidate::{Candidate, rank, round_probability};
pub use engine::{ORE_STRIDE_XZ, ORE_STRIDE_Y, SearchEngine};
pub use pacer::{CancelToken, CountingPacer, NoopPacer, Pacer};
pub use parallel::search_parallel;
pub use query::{BlockPos, SearchQuery};

/// Convenience wrapper: build an engine for `query` and run it sequentially.
pub fn search(query: SearchQuery) -> Vec<Candidate> {
    SearchEngine::new(query).run()
}
