//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// Top-level configuration, read from `algraph.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgraphConfig {
    /// Minimum spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,

    /// Shortest path settings
    #[serde(default)]
    pub shortest_path: ShortestPathConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MstConfig {
    #[serde(default)]
    pub algorithm: MstAlgorithm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathConfig {
    #[serde(default)]
    pub algorithm: SpAlgorithm,

    /// Source vertex used when none is given on the command line
    #[serde(default)]
    pub source: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for weights and distances (default 2)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    2
}

/// Largest precision accepted; f64 carries 17 significant digits
pub const MAX_PRECISION: usize = 17;

/// Spanning tree algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MstAlgorithm {
    #[default]
    EagerPrim,
    LazyPrim,
    Kruskal,
}

impl MstAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            MstAlgorithm::EagerPrim => "eager-prim",
            MstAlgorithm::LazyPrim => "lazy-prim",
            MstAlgorithm::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MstAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eager-prim" | "eager" | "prim" => Ok(MstAlgorithm::EagerPrim),
            "lazy-prim" | "lazy" => Ok(MstAlgorithm::LazyPrim),
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            other => Err(AlgoError::invalid_value("mst algorithm", other)),
        }
    }
}

/// Shortest path algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpAlgorithm {
    #[default]
    Dijkstra,
    BellmanFord,
    Acyclic,
}

impl SpAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpAlgorithm::Dijkstra => "dijkstra",
            SpAlgorithm::BellmanFord => "bellman-ford",
            SpAlgorithm::Acyclic => "acyclic",
        }
    }
}

impl fmt::Display for SpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(SpAlgorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(SpAlgorithm::BellmanFord),
            "acyclic" | "dag" => Ok(SpAlgorithm::Acyclic),
            other => Err(AlgoError::invalid_value("shortest path algorithm", other)),
        }
    }
}
