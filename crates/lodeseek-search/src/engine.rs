//! The region scanner: evaluates probability per cell (ores) or per chunk
//! (structures), filters, and ranks.
//!
//! An engine instance is built per search call and consumed by running it, so
//! there are only two logical states: scanning, then done. Nothing survives
//! the call; repeated runs with equal queries produce identical output.

use lodeseek_biome::{Biome, classify};
use lodeseek_model::{Dimension, FeatureKind, FeatureType, ProbabilityModel, ore_params,
    structure_params};
use tracing::debug;

use crate::candidate::{Candidate, rank, round_probability};
use crate::pacer::{CancelToken, NoopPacer, Pacer};
use crate::query::SearchQuery;

/// Horizontal stride of the ore scan, in blocks. Ore density varies fast, so
/// the ore stride is finer than the chunk-granular structure scan.
pub const ORE_STRIDE_XZ: i32 = 4;
/// Vertical stride of the ore scan, in blocks.
pub const ORE_STRIDE_Y: i32 = 2;

/// One search invocation. Construct with [`SearchEngine::new`], consume with
/// [`SearchEngine::run`] or [`SearchEngine::run_with`].
pub struct SearchEngine {
    query: SearchQuery,
    model: ProbabilityModel,
}

impl SearchEngine {
    /// Builds the generator hierarchy for this query's seed. No state is
    /// shared with any other engine instance.
    pub fn new(query: SearchQuery) -> Self {
        let model = ProbabilityModel::new(query.seed);
        Self { query, model }
    }

    /// Runs the scan to completion with no yielding or cancellation.
    pub fn run(self) -> Vec<Candidate> {
        self.run_with(&mut NoopPacer, &CancelToken::new())
    }

    /// Runs the scan, calling `pacer` and checking `cancel` after every
    /// outer-loop row. Cancellation returns whatever was collected so far,
    /// ranked; it is not an error.
    pub fn run_with(self, pacer: &mut dyn Pacer, cancel: &CancelToken) -> Vec<Candidate> {
        let (ores, structures) = effective_features(&self.query);
        if self.query.radius <= 0 || (ores.is_empty() && structures.is_empty()) {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let mut rows = 0usize;

        'scan: {
            if !ores.is_empty() {
                for x in ore_rows(&self.query) {
                    scan_ore_row(&self.model, &self.query, x, &ores, &mut candidates);
                    rows += 1;
                    pacer.checkpoint();
                    if cancel.is_cancelled() {
                        break 'scan;
                    }
                }
            }
            if !structures.is_empty() {
                for chunk_x in chunk_rows(&self.query) {
                    scan_structure_row(
                        &self.model,
                        &self.query,
                        chunk_x,
                        &structures,
                        &mut candidates,
                    );
                    rows += 1;
                    pacer.checkpoint();
                    if cancel.is_cancelled() {
                        break 'scan;
                    }
                }
            }
        }

        candidates.sort_by(rank);
        debug!(
            rows,
            kept = candidates.len(),
            cancelled = cancel.is_cancelled(),
            "search finished"
        );
        candidates
    }
}

/// Normalizes the requested feature set: dedup, declaration order, and the
/// nether dimension gate. Ores and structures scan at different granularity,
/// so they come back partitioned.
pub(crate) fn effective_features(query: &SearchQuery) -> (Vec<FeatureType>, Vec<FeatureType>) {
    let mut requested = [false; FeatureType::ALL.len()];
    for &feature in &query.features {
        requested[feature.index()] = true;
    }

    let mut ores = Vec::new();
    let mut structures = Vec::new();
    for feature in FeatureType::ALL {
        if !requested[feature.index()] {
            continue;
        }
        if feature.dimension() == Dimension::Nether && !query.include_nether {
            continue;
        }
        match feature.kind() {
            FeatureKind::Ore => ores.push(feature),
            FeatureKind::Structure => structures.push(feature),
        }
    }
    (ores, structures)
}

/// X values of the ore scan's outer loop, ascending.
pub(crate) fn ore_rows(query: &SearchQuery) -> impl Iterator<Item = i32> + use<> {
    let min = query.center.x - query.radius;
    let max = query.center.x + query.radius;
    (min..=max).step_by(ORE_STRIDE_XZ as usize)
}

/// Chunk-x values of the structure scan's outer loop, ascending.
pub(crate) fn chunk_rows(query: &SearchQuery) -> impl Iterator<Item = i32> + use<> {
    let min = (query.center.x - query.radius).div_euclid(16);
    let max = (query.center.x + query.radius).div_euclid(16);
    min..=max
}

/// The biome reported for a feature: overworld features use the classifier,
/// nether and end features carry their dimension tag.
fn feature_biome(feature: FeatureType, surface_biome: Biome) -> Biome {
    match feature.dimension() {
        Dimension::Overworld => surface_biome,
        Dimension::Nether => Biome::Nether,
        Dimension::End => Biome::End,
    }
}

/// Scans one x column of the ore grid. Inner order (z, then y, then feature
/// declaration order) is part of the tie-break contract.
pub(crate) fn scan_ore_row(
    model: &ProbabilityModel,
    query: &SearchQuery,
    x: i32,
    ores: &[FeatureType],
    out: &mut Vec<Candidate>,
) {
    let min_z = query.center.z - query.radius;
    let max_z = query.center.z + query.radius;
    let mut z = min_z;
    while z <= max_z {
        let surface_biome = classify(query.seed, x, z);
        for &ore in ores {
            let biome = feature_biome(ore, surface_biome);
            let params = ore_params(ore);
            let mut y = params.min_y;
            while y <= params.max_y {
                let probability =
                    round_probability(model.ore_probability(ore, x, y, z, biome));
                if probability >= query.min_probability {
                    out.push(Candidate::new(x, y, z, probability, ore, biome));
                }
                y += ORE_STRIDE_Y;
            }
        }
        z += ORE_STRIDE_XZ;
    }
}

/// Scans one chunk-x row of the structure grid: spacing gate first, then the
/// probability model, one evaluation per chunk.
pub(crate) fn scan_structure_row(
    model: &ProbabilityModel,
    query: &SearchQuery,
    chunk_x: i32,
    structures: &[FeatureType],
    out: &mut Vec<Candidate>,
) {
    let min_chunk_z = (query.center.z - query.radius).div_euclid(16);
    let max_chunk_z = (query.center.z + query.radius).div_euclid(16);
    for chunk_z in min_chunk_z..=max_chunk_z {
        let origin_x = chunk_x * 16;
        let origin_z = chunk_z * 16;
        let surface_biome = classify(query.seed, origin_x, origin_z);
        for &structure in structures {
            if !model.passes_spacing_gate(structure, chunk_x, chunk_z) {
                continue;
            }
            let biome = feature_biome(structure, surface_biome);
            let probability = round_probability(
                model.structure_probability(structure, chunk_x, chunk_z, biome),
            );
            if probability >= query.min_probability {
                let y = structure_params(structure).placement_y;
                out.push(Candidate::new(origin_x, y, origin_z, probability, structure, biome));
            }
        }
    }
}
