//! Parallel variant of the scan: partitions outer-loop rows across worker
//! threads and merges by re-sorting.
//!
//! Output is byte-identical to the sequential scan because every worker owns
//! its own model instances built from the same seed, and the ordering rule in
//! [`crate::candidate::rank`] does not depend on insertion order.

use crossbeam_channel::unbounded;
use lodeseek_model::ProbabilityModel;
use tracing::debug;

use crate::candidate::{Candidate, rank};
use crate::engine::{chunk_rows, effective_features, ore_rows, scan_ore_row, scan_structure_row};
use crate::query::SearchQuery;

/// A worker's slice of the scan: some ore rows and some chunk rows.
#[derive(Clone, Debug, Default)]
struct RowPartition {
    ore_rows: Vec<i32>,
    chunk_rows: Vec<i32>,
}

/// Runs the search across `threads` worker threads (capped at the row count;
/// `None` uses the available parallelism). Equivalent to
/// [`crate::SearchEngine::run`] in every observable way except wall-clock
/// time.
pub fn search_parallel(query: &SearchQuery, threads: Option<usize>) -> Vec<Candidate> {
    let (ores, structures) = effective_features(query);
    if query.radius <= 0 || (ores.is_empty() && structures.is_empty()) {
        return Vec::new();
    }

    let ore_row_values: Vec<i32> = if ores.is_empty() {
        Vec::new()
    } else {
        ore_rows(query).collect()
    };
    let chunk_row_values: Vec<i32> = if structures.is_empty() {
        Vec::new()
    } else {
        chunk_rows(query).collect()
    };

    let total_rows = ore_row_values.len() + chunk_row_values.len();
    let threads = threads
        .unwrap_or_else(num_cpus::get)
        .clamp(1, total_rows.max(1));

    let partitions = partition_rows(&ore_row_values, &chunk_row_values, threads);
    let (sender, receiver) = unbounded::<Vec<Candidate>>();

    std::thread::scope(|scope| {
        for partition in partitions {
            let sender = sender.clone();
            let ores = ores.clone();
            let structures = structures.clone();
            scope.spawn(move || {
                // Independent generator hierarchy per worker, seeded
                // identically to the sequential path.
                let model = ProbabilityModel::new(query.seed);
                let mut local = Vec::new();
                for x in partition.ore_rows {
                    scan_ore_row(&model, query, x, &ores, &mut local);
                }
                for chunk_x in partition.chunk_rows {
                    scan_structure_row(&model, query, chunk_x, &structures, &mut local);
                }
                // The receiver outlives the scope; a send failure would mean
                // the main thread dropped it, which cannot happen here.
                let _ = sender.send(local);
            });
        }
    });
    drop(sender);

    let mut candidates: Vec<Candidate> = Vec::new();
    while let Ok(mut local) = receiver.recv() {
        candidates.append(&mut local);
    }
    candidates.sort_by(rank);
    debug!(threads, kept = candidates.len(), "parallel search finished");
    candidates
}

/// Deals rows round-robin so stripes stay balanced even when probability mass
/// clusters on one side of the region.
fn partition_rows(ore_rows: &[i32], chunk_rows: &[i32], threads: usize) -> Vec<RowPartition> {
    let mut partitions = vec![RowPartition::default(); threads];
    for (i, &x) in ore_rows.iter().enumerate() {
        partitions[i % threads].ore_rows.push(x);
    }
    for (i, &chunk_x) in chunk_rows.iter().enumerate() {
        partitions[i % threads].chunk_rows.push(chunk_x);
    }
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_every_row_once() {
        let ore_rows: Vec<i32> = (-16..=16).step_by(4).collect();
        let chunk_rows: Vec<i32> = (-2..=2).collect();
        let partitions = partition_rows(&ore_rows, &chunk_rows, 4);

        let mut seen_ore: Vec<i32> = partitions
            .iter()
            .flat_map(|p| p.ore_rows.iter().copied())
            .collect();
        seen_ore.sort_unstable();
        assert_eq!(seen_ore, ore_rows);

        let mut seen_chunks: Vec<i32> = partitions
            .iter()
            .flat_map(|p| p.chunk_rows.iter().copied())
            .collect();
        seen_chunks.sort_unstable();
        assert_eq!(seen_chunks, chunk_rows);
    }

    #[test]
    fn test_single_thread_partition_is_everything() {
        let partitions = partition_rows(&[1, 2, 3], &[0], 1);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].ore_rows, vec![1, 2, 3]);
        assert_eq!(partitions[0].chunk_rows, vec![0]);
    }
}
