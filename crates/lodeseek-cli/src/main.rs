//! Command-line front end for the search engine.
//!
//! This binary is the stand-in for the UI layer: it parses search parameters,
//! runs one search, and prints the ranked candidate records as JSON to
//! stdout. All I/O lives here; the library crates stay pure.
//!
//! Run with `cargo run -p lodeseek-cli -- --seed 12345 --features diamond
//! --radius 64 --min-probability 0.5`.

use clap::Parser;
use lodeseek_model::FeatureType;
use lodeseek_search::{BlockPos, SearchEngine, SearchQuery, search_parallel};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Predict likely ore and structure locations for a world seed.
#[derive(Parser, Debug)]
#[command(name = "lodeseek", about = "Seed-based ore and structure finder")]
struct Args {
    /// World seed: an integer, or free text hashed the way the game hashes it.
    #[arg(long)]
    seed: String,

    /// Search center block X.
    #[arg(long, default_value_t = 0)]
    x: i32,

    /// Search center block Y (informational; ore bands are absolute).
    #[arg(long, default_value_t = 0)]
    y: i32,

    /// Search center block Z.
    #[arg(long, default_value_t = 0)]
    z: i32,

    /// Search half-width in blocks.
    #[arg(long, default_value_t = 64)]
    radius: i32,

    /// Comma-separated feature types, e.g. `diamond,village,oceanMonument`.
    #[arg(long, value_delimiter = ',', required = true)]
    features: Vec<FeatureType>,

    /// Drop candidates below this probability.
    #[arg(long, default_value_t = 0.5)]
    min_probability: f64,

    /// Also search nether-dimension features.
    #[arg(long)]
    include_nether: bool,

    /// Worker threads for the scan; omit for sequential.
    #[arg(long)]
    threads: Option<usize>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let query = SearchQuery::with_text_seed(
        &args.seed,
        BlockPos::new(args.x, args.y, args.z),
        args.radius,
        args.features,
    )
    .min_probability(args.min_probability)
    .include_nether(args.include_nether);

    info!(
        seed = query.seed,
        radius = query.radius,
        features = query.features.len(),
        "starting search"
    );

    let candidates = match args.threads {
        Some(threads) => search_parallel(&query, Some(threads)),
        None => SearchEngine::new(query).run(),
    };

    info!(candidates = candidates.len(), "search complete");

    let json = if args.pretty {
        serde_json::to_string_pretty(&candidates)
    } else {
        serde_json::to_string(&candidates)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize results: {e}");
            std::process::exit(1);
        }
    }
}
