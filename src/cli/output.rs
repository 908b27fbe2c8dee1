use clap::ValueEnum;

/// Output format for algraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Traversal used by `paths`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PathMethod {
    /// Breadth-first: shortest paths by edge count
    #[default]
    Bfs,
    /// Depth-first: any path
    Dfs,
}

impl PathMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathMethod::Bfs => "bfs",
            PathMethod::Dfs => "dfs",
        }
    }
}
