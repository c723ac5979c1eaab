//! medellin — route queries over the Aburrá Valley checkpoint network.
//!
//! Seeds an in-memory store with the built-in network (or with checkpoints
//! and roads read from CSV), then answers one query and prints the result
//! as JSON on stdout.  Logs go to stderr through `tracing`.
//!
//! ```text
//! medellin route 0 18
//! medellin --config route.json nearest 6.25 -75.57
//! medellin --nodes nodes.csv --edges edges.csv packages
//! ```

mod seed;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use vr_core::{GeoPoint, NodeId, PackageId};
use vr_route::{RouteConfig, RouteService};
use vr_store::{
    load_checkpoints_csv, load_edge_pairs_csv, EdgeStore, InMemoryStore, PackageStore,
};

// ── Demo packages ─────────────────────────────────────────────────────────────

const PACKAGES: [(&str, u32, u32); 5] = [
    ("medical supplies", 0, 18),
    ("spare parts",      1, 12),
    ("documents",        9, 17),
    ("returns",          18, 0),
    ("office chairs",    1, 8),
];

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,

    /// JSON file with a `RouteConfig` (missing fields take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Checkpoint CSV (`id,name,lat,lon`) instead of the built-in network
    #[arg(long, requires = "edges")]
    nodes: Option<PathBuf>,

    /// Road CSV (`start,end`) instead of the built-in network
    #[arg(long, requires = "nodes")]
    edges: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two checkpoint ids
    #[command(visible_alias = "r")]
    Route { from: u32, to: u32 },

    /// Checkpoint closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Register the demo packages and print their routes and per-checkpoint counts
    Packages,

    /// Print every road with its derived length
    Edges,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouteConfig::default(),
    };
    let service = build_service(&cli, config)?;

    match cli.command {
        Commands::Route { from, to } => {
            let t0 = Instant::now();
            let route = service.resolve_route(NodeId(from), NodeId(to))?;
            info!(
                hops = route.path.len().saturating_sub(1),
                distance_m = route.distance_m,
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "route resolved"
            );
            print_json(&route)?;
        }
        Commands::Nearest { lat, lon } => {
            let nearest = service.nearest_checkpoint(GeoPoint::new(lat, lon))?;
            print_json(&nearest)?;
        }
        Commands::Packages => {
            for (description, start, end) in PACKAGES {
                service.create_package(description, NodeId(start), NodeId(end))?;
            }
            let count = service.store().list_packages()?.len();
            for id in (0..count as u32).map(PackageId) {
                print_json(&service.package_route(id)?)?;
            }
            print_json(&service.package_counts_by_start()?)?;
            print_json(&service.package_counts_by_end()?)?;
            let (hits, misses) = service.cache().stats();
            info!(hits, misses, "solution cache");
        }
        Commands::Edges => {
            print_json(&service.store().list_edges()?)?;
        }
    }

    Ok(())
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<RouteConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded route config");
    Ok(config)
}

fn build_service(cli: &Cli, config: RouteConfig) -> Result<RouteService<InMemoryStore>> {
    let (checkpoints, roads) = match (&cli.nodes, &cli.edges) {
        (Some(nodes), Some(edges)) => (
            load_checkpoints_csv(nodes).with_context(|| format!("reading {}", nodes.display()))?,
            load_edge_pairs_csv(edges).with_context(|| format!("reading {}", edges.display()))?,
        ),
        _ => (seed::checkpoints(), seed::roads()),
    };

    let store = InMemoryStore::with_checkpoints(checkpoints)?;
    let service = RouteService::new(store, config);
    let created = service.import_edges(&roads)?;
    info!(
        checkpoints = service.store().node_count(),
        roads = created.len(),
        "network loaded"
    );
    Ok(service)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
