use crate::error::{Error, Result};
use crate::graph::{DirectedEdge, Graph};
use crate::utils::{INFINITY, ShortestPaths};
use log::{debug, warn};

/// Edge-list relaxation, O(V·E). Handles negative weights and reports
/// negative cycles reachable from the source.
pub struct BellmanFord<'g> {
    graph: &'g Graph,
}

impl<'g> BellmanFord<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        BellmanFord { graph }
    }

    /// Distances from `source`. At most `N - 1` passes are made, stopping at
    /// the first pass that changes nothing; one more pass then checks for a
    /// negative cycle.
    pub fn solve(&self, source: usize) -> Result<ShortestPaths> {
        self.graph.check_vertex(source)?;
        let n = self.graph.vertex_count();
        let edges = self.graph.edges();
        let mut paths = ShortestPaths::new(n, source);

        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            if !relax_reachable(edges, &mut paths) {
                break;
            }
        }

        if relax_reachable(edges, &mut paths) {
            warn!("bellman-ford: negative cycle reachable from vertex {source}");
            return Err(Error::NegativeCycle {
                origin: Some(source),
            });
        }

        debug!(
            "bellman-ford: source {source}, {passes} passes over {} edges",
            edges.len()
        );
        Ok(paths)
    }

    /// Vertex potentials for Johnson's reweighting: shortest distances from
    /// an implicit super-source joined to every vertex by a zero edge.
    ///
    /// Starting every vertex at 0 accounts for the super-source's own pass,
    /// so `N - 1` further passes suffice. Any negative cycle in the graph is
    /// reported, reachable or not. Index 0 of the result is unused.
    pub fn potentials(&self) -> Result<Vec<i64>> {
        let n = self.graph.vertex_count();
        let edges = self.graph.edges();
        let mut h = vec![0i64; n + 1];

        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            if !relax_all(edges, &mut h) {
                break;
            }
        }

        if relax_all(edges, &mut h) {
            warn!("bellman-ford: negative cycle found while computing potentials");
            return Err(Error::NegativeCycle { origin: None });
        }

        debug!("bellman-ford: potentials settled after {passes} passes");
        Ok(h)
    }

    /// Vertices of some negative cycle in traversal order, if the graph has
    /// one anywhere.
    pub fn find_negative_cycle(&self) -> Option<Vec<usize>> {
        let n = self.graph.vertex_count();
        let mut distances = vec![0i64; n + 1];
        let mut predecessors: Vec<Option<usize>> = vec![None; n + 1];

        let mut last_updated = None;
        for _ in 0..n {
            last_updated = None;
            for edge in self.graph.edges() {
                let candidate = distances[edge.from].saturating_add(edge.weight);
                if candidate < distances[edge.to] {
                    distances[edge.to] = candidate;
                    predecessors[edge.to] = Some(edge.from);
                    last_updated = Some(edge.to);
                }
            }
            if last_updated.is_none() {
                return None;
            }
        }

        // Walking back N steps from a vertex updated in pass N lands on the cycle.
        let mut current = last_updated?;
        for _ in 0..n {
            current = predecessors[current]?;
        }

        let start = current;
        let mut cycle = vec![start];
        loop {
            current = predecessors[current]?;
            if current == start {
                break;
            }
            cycle.push(current);
        }
        cycle.reverse();
        Some(cycle)
    }
}

// Additions saturate: with a negative cycle present, values can keep falling
// past any bound derived from the weights.
fn relax_reachable(edges: &[DirectedEdge], paths: &mut ShortestPaths) -> bool {
    let mut updated = false;
    for edge in edges {
        let from = paths.distances[edge.from];
        if from == INFINITY {
            continue;
        }
        updated |= paths.relax(edge.from, edge.to, from.saturating_add(edge.weight));
    }
    updated
}

fn relax_all(edges: &[DirectedEdge], h: &mut [i64]) -> bool {
    let mut updated = false;
    for edge in edges {
        let candidate = h[edge.from].saturating_add(edge.weight);
        if candidate < h[edge.to] {
            h[edge.to] = candidate;
            updated = true;
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize, i64)]) -> Graph {
        Graph::build(n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let g = graph(4, &[(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)]);
        let paths = BellmanFord::new(&g).solve(1).unwrap();
        assert_eq!(paths.to_vec(), vec![Some(0), Some(1), Some(3), Some(4)]);
        assert_eq!(paths.path_to(4), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn negative_weights_without_cycle() {
        let g = graph(4, &[(1, 2, -1), (1, 3, 4), (2, 3, 2), (2, 4, 3), (3, 4, -2)]);
        let paths = BellmanFord::new(&g).solve(1).unwrap();
        assert_eq!(paths.to_vec(), vec![Some(0), Some(-1), Some(1), Some(-1)]);
    }

    #[test]
    fn two_vertex_negative_cycle() {
        let g = graph(2, &[(1, 2, 1), (2, 1, -2)]);
        let err = BellmanFord::new(&g).solve(1).unwrap_err();
        assert!(matches!(err, Error::NegativeCycle { origin: Some(1) }));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g = graph(4, &[(1, 2, 3), (3, 4, -5), (4, 3, 1)]);
        let paths = BellmanFord::new(&g).solve(1).unwrap();
        assert_eq!(paths.to_vec(), vec![Some(0), Some(3), None, None]);

        assert!(BellmanFord::new(&g).potentials().is_err());
    }

    #[test]
    fn negative_self_loop_is_a_cycle() {
        let g = graph(2, &[(1, 2, 4), (2, 2, -1)]);
        assert!(BellmanFord::new(&g).solve(1).unwrap_err().is_negative_cycle());
    }

    #[test]
    fn source_must_exist() {
        let g = graph(2, &[(1, 2, 4)]);
        let err = BellmanFord::new(&g).solve(3).unwrap_err();
        assert!(matches!(
            err,
            Error::VertexOutOfRange {
                vertex: 3,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn potentials_satisfy_triangle_inequality() {
        let g = graph(4, &[(1, 2, -3), (2, 3, 2), (3, 4, -4), (1, 4, 1)]);
        let h = BellmanFord::new(&g).potentials().unwrap();
        for e in g.edges() {
            assert!(e.weight + h[e.from] - h[e.to] >= 0, "{e:?}");
        }
        assert!(h.iter().all(|&p| p <= 0));
    }

    #[test]
    fn finds_negative_cycle_vertices() {
        let g = graph(5, &[(1, 2, 1), (2, 3, 1), (3, 4, -3), (4, 2, 1), (4, 5, 2)]);
        let mut cycle = BellmanFord::new(&g).find_negative_cycle().unwrap();
        cycle.sort_unstable();
        assert_eq!(cycle, vec![2, 3, 4]);

        let acyclic = graph(3, &[(1, 2, -1), (2, 3, -1)]);
        assert_eq!(BellmanFord::new(&acyclic).find_negative_cycle(), None);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let g = graph(5, &[(1, 2, 4), (1, 3, -2), (3, 2, 1), (2, 4, -1), (4, 5, 3), (3, 5, 9)]);
        let bellman_ford = BellmanFord::new(&g);
        let first = bellman_ford.solve(1).unwrap();
        assert_eq!(bellman_ford.solve(1).unwrap(), first);
        assert_eq!(bellman_ford.potentials().unwrap(), bellman_ford.potentials().unwrap());
    }

    #[test]
    fn single_vertex() {
        let g = graph(1, &[]);
        let paths = BellmanFord::new(&g).solve(1).unwrap();
        assert_eq!(paths.to_vec(), vec![Some(0)]);
    }
}
