//! Dense all-pairs shortest paths, O(V³) time and O(V²) memory.
//!
//! [`FloydWarshall::solve`] performs no negative-cycle detection: with a
//! negative cycle present the matrix is silently wrong. Use
//! [`FloydWarshall::solve_checked`] to have negative diagonal entries reported.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::utils::{DistanceMatrix, INFINITY};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How parallel edges `(u, v)` are folded into the single matrix cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParallelEdges {
    /// The edge read last wins, even if an earlier one was lighter.
    #[default]
    KeepLast,
    /// The lightest edge wins.
    KeepLightest,
}

pub struct FloydWarshall<'g> {
    graph: &'g Graph,
    parallel_edges: ParallelEdges,
}

impl<'g> FloydWarshall<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        FloydWarshall {
            graph,
            parallel_edges: ParallelEdges::KeepLast,
        }
    }

    pub fn with_parallel_edges(mut self, policy: ParallelEdges) -> Self {
        self.parallel_edges = policy;
        self
    }

    pub fn solve(&self) -> DistanceMatrix {
        let n = self.graph.vertex_count();
        let mut dist = self.initial_matrix();

        for k in 1..=n {
            for i in 1..=n {
                let dik = dist.raw(i, k);
                if dik == INFINITY {
                    continue;
                }
                for j in 1..=n {
                    let dkj = dist.raw(k, j);
                    if dkj == INFINITY {
                        continue;
                    }
                    // Saturates: a negative cycle can drive entries down without bound.
                    let through_k = dik.saturating_add(dkj);
                    if through_k < dist.raw(i, j) {
                        dist.set(i, j, through_k);
                    }
                }
            }
        }

        debug!("floyd-warshall: {n}x{n} matrix complete");
        dist
    }

    /// Like [`FloydWarshall::solve`], but fails with
    /// [`Error::NegativeCycle`] when any vertex ends with a negative distance
    /// to itself.
    pub fn solve_checked(&self) -> Result<DistanceMatrix> {
        let dist = self.solve();
        if let Some(v) = (1..=dist.vertex_count()).find(|&v| dist.raw(v, v) < 0) {
            warn!("floyd-warshall: vertex {v} lies on a negative cycle");
            return Err(Error::NegativeCycle { origin: None });
        }
        Ok(dist)
    }

    fn initial_matrix(&self) -> DistanceMatrix {
        let n = self.graph.vertex_count();
        let mut dist = DistanceMatrix::unreachable(n);
        for v in 1..=n {
            dist.set(v, v, 0);
        }

        for edge in self.graph.edges() {
            let (u, v) = (edge.from, edge.to);
            let current = dist.raw(u, v);
            let value = if u == v {
                // A self-loop can only shorten the empty path.
                current.min(edge.weight)
            } else {
                match self.parallel_edges {
                    ParallelEdges::KeepLast => edge.weight,
                    ParallelEdges::KeepLightest => current.min(edge.weight),
                }
            };
            dist.set(u, v, value);
        }
        dist
    }
}
