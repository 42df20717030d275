use crate::dijkstra::Backend;
use crate::error::{Error, Result};
use crate::floyd_warshall::ParallelEdges;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BellmanFord,
    Spfa,
    SpfaSlf,
    #[default]
    Dijkstra,
    DijkstraDary,
    DijkstraRadix,
    Astar,
    Johnson,
    JohnsonAll,
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::BellmanFord,
        Algorithm::Spfa,
        Algorithm::SpfaSlf,
        Algorithm::Dijkstra,
        Algorithm::DijkstraDary,
        Algorithm::DijkstraRadix,
        Algorithm::Astar,
        Algorithm::Johnson,
        Algorithm::JohnsonAll,
        Algorithm::FloydWarshall,
    ];

    /// Whether the result is a full distance matrix rather than one row.
    pub fn is_all_pairs(self) -> bool {
        matches!(self, Algorithm::JohnsonAll | Algorithm::FloydWarshall)
    }

    /// Whether the algorithm is only defined for non-negative weights.
    pub fn requires_non_negative_weights(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra
                | Algorithm::DijkstraDary
                | Algorithm::DijkstraRadix
                | Algorithm::Astar
        )
    }
}

/// Settings for one solver run, usually read from a TOML file and then
/// overridden from the command line.
///
/// ```toml
/// algorithm = "johnson"
/// source = 1
/// arity = 4
/// parallel-edges = "keep-lightest"
/// check-negative-cycles = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub source: usize,
    /// Branching factor of the indexed heap; the average out-degree if unset.
    /// Only `dijkstra-dary` reads it. Johnson always runs Dijkstra over the
    /// lazy binary heap.
    pub arity: Option<usize>,
    /// Floyd–Warshall's handling of parallel edges.
    pub parallel_edges: ParallelEdges,
    /// Report negative cycles from Floyd–Warshall instead of returning the
    /// unchecked matrix.
    pub check_negative_cycles: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            source: 1,
            arity: None,
            parallel_edges: ParallelEdges::KeepLast,
            check_negative_cycles: false,
        }
    }
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.source < 1 {
            return Err(Error::Config("source vertex ids start at 1".into()));
        }
        if let Some(arity) = self.arity
            && arity < 2
        {
            return Err(Error::Config(format!(
                "heap arity must be at least 2, got {arity}"
            )));
        }
        Ok(())
    }

    /// The Dijkstra backend this configuration selects; the lazy binary heap
    /// for algorithms that do not name one, Johnson included.
    pub fn backend(&self) -> Backend {
        match self.algorithm {
            Algorithm::DijkstraDary => Backend::DaryHeap { arity: self.arity },
            Algorithm::DijkstraRadix => Backend::RadixHeap,
            _ => Backend::BinaryHeap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.backend(), Backend::BinaryHeap);
    }

    #[test]
    fn reads_all_fields() {
        let config = RunConfig::from_toml_str(
            r#"
            algorithm = "dijkstra-dary"
            source = 3
            arity = 4
            parallel-edges = "keep-lightest"
            check-negative-cycles = true
            "#,
        )
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::DijkstraDary);
        assert_eq!(config.source, 3);
        assert_eq!(config.parallel_edges, ParallelEdges::KeepLightest);
        assert!(config.check_negative_cycles);
        assert_eq!(config.backend(), Backend::DaryHeap { arity: Some(4) });
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(RunConfig::from_toml_str("colour = \"blue\"").is_err());
        assert!(RunConfig::from_toml_str("algorithm = \"quantum\"").is_err());
        assert!(RunConfig::from_toml_str("source = 0").is_err());
        assert!(RunConfig::from_toml_str("arity = 1").is_err());
    }

    #[test]
    fn toml_output_reads_back() {
        let config = RunConfig {
            algorithm: Algorithm::FloydWarshall,
            source: 2,
            arity: Some(3),
            parallel_edges: ParallelEdges::KeepLightest,
            check_negative_cycles: true,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(RunConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn arity_only_selects_the_dary_backend() {
        let mut config = RunConfig {
            algorithm: Algorithm::Johnson,
            arity: Some(4),
            ..RunConfig::default()
        };
        assert_eq!(config.backend(), Backend::BinaryHeap);

        config.algorithm = Algorithm::JohnsonAll;
        assert_eq!(config.backend(), Backend::BinaryHeap);

        config.algorithm = Algorithm::DijkstraDary;
        assert_eq!(config.backend(), Backend::DaryHeap { arity: Some(4) });
    }

    #[test]
    fn algorithm_classification() {
        assert!(Algorithm::FloydWarshall.is_all_pairs());
        assert!(!Algorithm::Johnson.is_all_pairs());
        assert!(Algorithm::Astar.requires_non_negative_weights());
        assert!(!Algorithm::SpfaSlf.requires_non_negative_weights());
        assert_eq!(Algorithm::ALL.len(), 10);
    }
}
