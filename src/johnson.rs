use crate::bellman_ford::BellmanFord;
use crate::dijkstra::{Backend, Dijkstra};
use crate::error::Result;
use crate::graph::Graph;
use crate::utils::{DistanceMatrix, INFINITY, ShortestPaths};
use log::debug;

/// Johnson's algorithm: Bellman–Ford potentials make every edge weight
/// non-negative, then Dijkstra runs on the reweighted graph.
pub struct Johnson<'g> {
    graph: &'g Graph,
    backend: Backend,
}

/// Output of the reweighting phase, reusable across any number of sources.
#[derive(Debug, Clone)]
pub struct Reweighted {
    potentials: Vec<i64>,
    graph: Graph,
    backend: Backend,
}

impl<'g> Johnson<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Johnson {
            graph,
            backend: Backend::BinaryHeap,
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Computes potentials and the reweighted graph
    /// `w'(u, v) = w(u, v) + h(u) - h(v)`, which is non-negative on every edge.
    /// Fails with [`crate::Error::NegativeCycle`] if the graph has one.
    pub fn prepare(&self) -> Result<Reweighted> {
        let potentials = BellmanFord::new(self.graph).potentials()?;
        let graph = self
            .graph
            .map_weights(|e| e.weight + potentials[e.from] - potentials[e.to]);
        debug_assert!(graph.edges().iter().all(|e| e.weight >= 0));

        Ok(Reweighted {
            potentials,
            graph,
            backend: self.backend,
        })
    }

    pub fn single_source(&self, source: usize) -> Result<ShortestPaths> {
        self.graph.check_vertex(source)?;
        self.prepare()?.single_source(source)
    }

    pub fn all_pairs(&self) -> Result<DistanceMatrix> {
        self.prepare()?.all_pairs()
    }
}

impl Reweighted {
    pub fn potential(&self, vertex: usize) -> Option<i64> {
        if vertex == 0 {
            return None;
        }
        self.potentials.get(vertex).copied()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Dijkstra from `source` on the reweighted graph, mapped back through
    /// `d(s, t) = d'(s, t) - h(s) + h(t)`.
    pub fn single_source(&self, source: usize) -> Result<ShortestPaths> {
        let mut paths = Dijkstra::new(&self.graph)
            .with_backend(self.backend)
            .solve(source)?;
        let hs = self.potentials[source];
        for (t, d) in paths.distances.iter_mut().enumerate().skip(1) {
            if *d != INFINITY {
                *d = *d - hs + self.potentials[t];
            }
        }
        Ok(paths)
    }

    /// One Dijkstra per vertex, sequentially, sharing the reweighted graph.
    pub fn all_pairs(&self) -> Result<DistanceMatrix> {
        let n = self.graph.vertex_count();
        let mut matrix = DistanceMatrix::unreachable(n);
        for s in 1..=n {
            let paths = self.single_source(s)?;
            for t in 1..=n {
                if let Some(d) = paths.distance(t) {
                    matrix.set(s, t, d);
                }
            }
        }
        debug!("johnson: all-pairs over {n} sources done");
        Ok(matrix)
    }
}
