/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! proxima-ann - build an index from the command line and query it

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use proxima_ann::{AnnConfig, NearestNeighborIndex, NswGraph, SkipList1D};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proxima-ann")]
#[command(about = "Approximate nearest-neighbor search over scalars and vectors")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nearest values with the 1-D skip list
    SkipList {
        /// Comma separated values, e.g. "1,2,3"
        #[arg(short, long, allow_hyphen_values = true)]
        values: String,
        #[arg(short, long, allow_negative_numbers = true)]
        query: f64,
        #[arg(short, long, default_value_t = 10)]
        k: usize,
        /// Print per-level occupancy after loading
        #[arg(long)]
        stats: bool,
    },
    /// Nearest vectors with the NSW graph
    Nsw {
        /// Semicolon separated vectors, e.g. "1,2,3;4,5,6"
        #[arg(short, long, allow_hyphen_values = true)]
        vectors: String,
        /// Comma separated query vector
        #[arg(short, long, allow_hyphen_values = true)]
        query: String,
        #[arg(short, long, default_value_t = 1)]
        k: usize,
        /// Print node and edge counts after loading
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnnConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AnnConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match cli.command {
        Commands::SkipList { values, query, k, stats } => {
            let mut list = SkipList1D::new(config.skip_list)?;
            load(&mut list, parse_floats::<f64>(&values, "values")?);
            if stats {
                println!("levels: {:?}", list.level_sizes());
            }
            for value in list.search(query, k) {
                println!("{}", value);
            }
        }
        Commands::Nsw { vectors, query, k, stats } => {
            let mut graph = NswGraph::new();
            let points = vectors
                .split(';')
                .filter(|chunk| !chunk.trim().is_empty())
                .map(|chunk| parse_floats::<f32>(chunk, "vectors"))
                .collect::<anyhow::Result<Vec<_>>>()?;
            load(&mut graph, points);
            if stats {
                println!("nodes: {}, edges: {}", graph.len(), graph.edge_count());
            }
            for vector in graph.search(&parse_floats::<f32>(&query, "query")?, k)? {
                println!("{:?}", vector);
            }
        }
    }

    Ok(())
}

fn load<I>(index: &mut I, points: Vec<I::Point>)
where
    I: NearestNeighborIndex,
{
    let count = points.len();
    for point in points {
        index.insert(point);
    }
    info!("Loaded {} points, index size {}", count, index.size());
}

fn parse_floats<T>(raw: &str, what: &str) -> anyhow::Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .with_context(|| format!("invalid number {:?} in {}", s, what))
        })
        .collect::<anyhow::Result<Vec<T>>>()?;
    if parsed.is_empty() {
        bail!("{} must contain at least one number", what);
    }
    Ok(parsed)
}
