//! CLI argument parsing for algraph
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use algraph_core::config::{MstAlgorithm, SpAlgorithm};
pub use output::{OutputFormat, PathMethod};

/// Algraph - classical graph algorithms on text graph descriptions
#[derive(Parser, Debug)]
#[command(name = "algraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "algraph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./algraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Graph description to read
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Graph description file ("-" reads stdin)
    pub input: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Degree statistics of an undirected graph
    Stats(InputArgs),

    /// Paths from a source vertex to every other vertex
    Paths {
        #[command(flatten)]
        input: InputArgs,

        /// Source vertex
        #[arg(long, short)]
        source: usize,

        /// Traversal used to find the paths
        #[arg(long, short, value_enum, default_value = "bfs")]
        method: PathMethod,

        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },

    /// Connected components of an undirected graph
    Components(InputArgs),

    /// Strongly connected components of a digraph
    Scc(InputArgs),

    /// Topological order (reverse postorder) of a DAG
    Topo(InputArgs),

    /// Minimum spanning tree (or forest) of a weighted graph
    Mst {
        #[command(flatten)]
        input: InputArgs,

        /// eager-prim, lazy-prim or kruskal (default from config)
        #[arg(long, short)]
        algorithm: Option<MstAlgorithm>,
    },

    /// Single-source shortest paths in a weighted digraph
    Sp {
        #[command(flatten)]
        input: InputArgs,

        /// dijkstra, bellman-ford or acyclic (default from config)
        #[arg(long, short)]
        algorithm: Option<SpAlgorithm>,

        /// Source vertex (default from config)
        #[arg(long, short)]
        source: Option<usize>,

        /// Longest instead of shortest paths (acyclic only)
        #[arg(long)]
        longest: bool,
    },
}
