use crate::bellman_ford::BellmanFord;
use crate::config::{Algorithm, RunConfig};
use crate::dijkstra::{Dijkstra, astar, zero_heuristic};
use crate::error::{Error, Result};
use crate::floyd_warshall::FloydWarshall;
use crate::graph::Graph;
use crate::johnson::Johnson;
use crate::spfa::{QueueDiscipline, Spfa};
use crate::utils::{DistanceMatrix, ShortestPaths};
use log::{info, warn};
use serde::Serialize;

/// What a run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Solution {
    SingleSource(ShortestPaths),
    AllPairs(DistanceMatrix),
}

impl Solution {
    /// Distances from the configured source, or row `source` of the matrix.
    pub fn distances_from(&self, source: usize) -> Vec<Option<i64>> {
        match self {
            Solution::SingleSource(paths) => paths.to_vec(),
            Solution::AllPairs(matrix) => matrix.row(source),
        }
    }
}

/// Runs the algorithm selected by `config` on `graph`.
///
/// Dijkstra-family algorithms are refused on graphs with negative edges
/// instead of returning unspecified distances.
pub fn run(graph: &Graph, config: &RunConfig) -> Result<Solution> {
    config.validate()?;
    if !config.algorithm.is_all_pairs() {
        graph.check_vertex(config.source)?;
    }
    if config.algorithm.requires_non_negative_weights() && graph.has_negative_weight() {
        return Err(Error::malformed(format!(
            "{:?} requires non-negative edge weights",
            config.algorithm
        )));
    }

    if let Some(arity) = config.arity
        && config.algorithm != Algorithm::DijkstraDary
    {
        warn!(
            "arity {arity} only applies to dijkstra-dary and is ignored for {:?}",
            config.algorithm
        );
    }

    info!(
        "running {:?} on {} vertices / {} edges",
        config.algorithm,
        graph.vertex_count(),
        graph.edge_count()
    );

    let source = config.source;
    let solution = match config.algorithm {
        Algorithm::BellmanFord => Solution::SingleSource(BellmanFord::new(graph).solve(source)?),
        Algorithm::Spfa => Solution::SingleSource(Spfa::new(graph).solve(source)?),
        Algorithm::SpfaSlf => Solution::SingleSource(
            Spfa::new(graph)
                .with_discipline(QueueDiscipline::SmallLabelFirst)
                .solve(source)?,
        ),
        Algorithm::Dijkstra | Algorithm::DijkstraDary | Algorithm::DijkstraRadix => {
            Solution::SingleSource(
                Dijkstra::new(graph)
                    .with_backend(config.backend())
                    .solve(source)?,
            )
        }
        Algorithm::Astar => Solution::SingleSource(astar(graph, zero_heuristic).solve(source)?),
        Algorithm::Johnson => Solution::SingleSource(
            Johnson::new(graph)
                .with_backend(config.backend())
                .single_source(source)?,
        ),
        Algorithm::JohnsonAll => Solution::AllPairs(
            Johnson::new(graph)
                .with_backend(config.backend())
                .all_pairs()?,
        ),
        Algorithm::FloydWarshall => {
            let floyd = FloydWarshall::new(graph).with_parallel_edges(config.parallel_edges);
            if config.check_negative_cycles {
                Solution::AllPairs(floyd.solve_checked()?)
            } else {
                Solution::AllPairs(floyd.solve())
            }
        }
    };
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_graph() -> Graph {
        Graph::build(4, vec![(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)]).unwrap()
    }

    #[test]
    fn every_algorithm_solves_reference_scenario() {
        let graph = reference_graph();
        for algorithm in Algorithm::ALL {
            let config = RunConfig {
                algorithm,
                ..RunConfig::default()
            };
            let solution = run(&graph, &config).unwrap();
            assert_eq!(
                solution.distances_from(1),
                vec![Some(0), Some(1), Some(3), Some(4)],
                "{algorithm:?}"
            );
            assert_eq!(
                matches!(solution, Solution::AllPairs(_)),
                algorithm.is_all_pairs()
            );
        }
    }

    #[test]
    fn dijkstra_family_refuses_negative_weights() {
        let graph = Graph::build(2, vec![(1, 2, -1)]).unwrap();
        let config = RunConfig {
            algorithm: Algorithm::DijkstraRadix,
            ..RunConfig::default()
        };
        assert!(matches!(
            run(&graph, &config),
            Err(Error::MalformedInput { .. })
        ));

        let config = RunConfig {
            algorithm: Algorithm::Johnson,
            ..RunConfig::default()
        };
        assert_eq!(
            run(&graph, &config).unwrap().distances_from(1),
            vec![Some(0), Some(-1)]
        );
    }

    #[test]
    fn source_is_validated() {
        let config = RunConfig {
            algorithm: Algorithm::Spfa,
            source: 9,
            ..RunConfig::default()
        };
        assert!(matches!(
            run(&reference_graph(), &config),
            Err(Error::VertexOutOfRange { vertex: 9, .. })
        ));
    }

    #[test]
    fn json_output_uses_vertex_ids() {
        let graph = Graph::build(3, vec![(1, 2, 4)]).unwrap();
        let config = RunConfig {
            algorithm: Algorithm::BellmanFord,
            ..RunConfig::default()
        };
        let text = serde_json::to_string(&run(&graph, &config).unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"single-source":{"source":1,"distances":[0,4,null],"predecessors":[null,1,null]}}"#
        );
    }

    #[test]
    fn floyd_warshall_check_is_opt_in() {
        let graph = Graph::build(2, vec![(1, 2, 1), (2, 1, -2)]).unwrap();
        let mut config = RunConfig {
            algorithm: Algorithm::FloydWarshall,
            ..RunConfig::default()
        };
        assert!(run(&graph, &config).is_ok());

        config.check_negative_cycles = true;
        assert!(run(&graph, &config).unwrap_err().is_negative_cycle());
    }
}
