//! Configuration for algraph
//!
//! Read from the file given with `--config`, or from `algraph.toml` in the
//! working directory when present. Every field has a default, so a partial file
//! (or no file at all) is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{
    AlgraphConfig, MstAlgorithm, MstConfig, OutputConfig, ShortestPathConfig, SpAlgorithm,
    MAX_PRECISION,
};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "algraph.toml";

impl AlgraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AlgraphConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` if given, else `dir/algraph.toml` if it exists, else defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.precision > MAX_PRECISION {
            crate::bail_invalid!("output.precision", self.output.precision);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AlgraphConfig::default();
        assert_eq!(config.mst.algorithm, MstAlgorithm::EagerPrim);
        assert_eq!(config.shortest_path.algorithm, SpAlgorithm::Dijkstra);
        assert_eq!(config.shortest_path.source, 0);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[mst]\nalgorithm = \"kruskal\"\n\n[shortest_path]\nalgorithm = \"bellman-ford\"\nsource = 3\n",
        )
        .unwrap();

        let config = AlgraphConfig::load(&path).unwrap();
        assert_eq!(config.mst.algorithm, MstAlgorithm::Kruskal);
        assert_eq!(config.shortest_path.algorithm, SpAlgorithm::BellmanFord);
        assert_eq!(config.shortest_path.source, 3);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn test_unknown_algorithm_is_a_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[mst]\nalgorithm = \"boruvka\"\n").unwrap();
        assert!(matches!(AlgraphConfig::load(&path), Err(AlgoError::Toml(_))));
    }

    #[test]
    fn test_precision_is_validated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\nprecision = 40\n").unwrap();
        assert!(matches!(
            AlgraphConfig::load(&path),
            Err(AlgoError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_discover_prefers_explicit_then_working_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(
            AlgraphConfig::discover(None, dir.path()).unwrap(),
            AlgraphConfig::default()
        );

        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\nprecision = 4\n",
        )
        .unwrap();
        let found = AlgraphConfig::discover(None, dir.path()).unwrap();
        assert_eq!(found.output.precision, 4);

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[output]\nprecision = 1\n").unwrap();
        let chosen = AlgraphConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(chosen.output.precision, 1);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            AlgraphConfig::discover(Some(&missing), dir.path()),
            Err(AlgoError::Io(_))
        ));
    }

    #[test]
    fn test_algorithm_names_parse() {
        assert_eq!("kruskal".parse::<MstAlgorithm>().unwrap(), MstAlgorithm::Kruskal);
        assert_eq!("Lazy-Prim".parse::<MstAlgorithm>().unwrap(), MstAlgorithm::LazyPrim);
        assert_eq!(
            "bellman-ford".parse::<SpAlgorithm>().unwrap(),
            SpAlgorithm::BellmanFord
        );
        assert!("floyd".parse::<SpAlgorithm>().is_err());
        assert_eq!(SpAlgorithm::Acyclic.to_string(), "acyclic");
    }
}
