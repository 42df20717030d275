use crate::error::Result;
use crate::graph::Graph;
use crate::heap::{DijkstraQueue, IndexedDaryHeap, LazyBinaryHeap, RadixHeap};
use crate::utils::{ShortestPaths, VertexDistance};
use log::debug;

/// Priority structure backing a [`Dijkstra`] run. All backends produce the
/// same distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// `std::collections::BinaryHeap` with lazy deletion of stale entries.
    #[default]
    BinaryHeap,
    /// [`IndexedDaryHeap`] with true decrease-key. `None` picks the graph's
    /// average out-degree; any arity is raised to at least 2.
    DaryHeap { arity: Option<usize> },
    /// Monotone [`RadixHeap`].
    RadixHeap,
}

/// The heuristic used when none is given. With it, A* is plain Dijkstra.
pub fn zero_heuristic(_vertex: usize) -> i64 {
    0
}

/// Dijkstra's algorithm, optionally guided by an A* heuristic.
///
/// Edge weights must be non-negative; with a negative edge the distances are
/// unspecified. This is only checked in debug builds. A heuristic must be
/// consistent (`h(u) <= w(u, v) + h(v)`), which also keeps the keys handed to
/// the radix heap monotone.
pub struct Dijkstra<'g, H = fn(usize) -> i64> {
    graph: &'g Graph,
    backend: Backend,
    heuristic: H,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Dijkstra {
            graph,
            backend: Backend::default(),
            heuristic: zero_heuristic,
        }
    }
}

/// A* over `graph`: Dijkstra keyed by `g(v) + heuristic(v)`.
pub fn astar<H>(graph: &Graph, heuristic: H) -> Dijkstra<'_, H>
where
    H: Fn(usize) -> i64,
{
    Dijkstra::new(graph).with_heuristic(heuristic)
}

impl<'g, H> Dijkstra<'g, H>
where
    H: Fn(usize) -> i64,
{
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_heuristic<H2>(self, heuristic: H2) -> Dijkstra<'g, H2>
    where
        H2: Fn(usize) -> i64,
    {
        Dijkstra {
            graph: self.graph,
            backend: self.backend,
            heuristic,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Distances from `source` to every vertex.
    pub fn solve(&self, source: usize) -> Result<ShortestPaths> {
        self.run(source, None)
    }

    /// Distance and path from `source` to `target`, stopping as soon as the
    /// target is settled. `None` if the target is unreachable.
    pub fn solve_to(&self, source: usize, target: usize) -> Result<Option<(i64, Vec<usize>)>> {
        self.graph.check_vertex(target)?;
        let paths = self.run(source, Some(target))?;
        Ok(paths.distance(target).zip(paths.path_to(target)))
    }

    fn run(&self, source: usize, target: Option<usize>) -> Result<ShortestPaths> {
        self.graph.check_vertex(source)?;
        debug_assert!(
            !self.graph.has_negative_weight(),
            "dijkstra requires non-negative edge weights"
        );
        let n = self.graph.vertex_count();

        match self.backend {
            Backend::BinaryHeap => self.search(source, target, LazyBinaryHeap::with_capacity(n)),
            Backend::DaryHeap { arity } => {
                let arity = arity.unwrap_or_else(|| self.graph.average_out_degree());
                self.search(source, target, IndexedDaryHeap::new(arity, n + 1))
            }
            Backend::RadixHeap => self.search(source, target, RadixHeap::new()),
        }
    }

    fn search<Q: DijkstraQueue>(
        &self,
        source: usize,
        target: Option<usize>,
        mut queue: Q,
    ) -> Result<ShortestPaths> {
        let n = self.graph.vertex_count();
        let mut paths = ShortestPaths::new(n, source);
        let mut settled = vec![false; n + 1];
        let mut settled_count = 0usize;

        queue.push_or_decrease(source, (self.heuristic)(source))?;

        while let Some(VertexDistance { vertex: u, .. }) = queue.pop_min() {
            // Lazy backends leave superseded entries behind.
            if settled[u] {
                continue;
            }
            settled[u] = true;
            settled_count += 1;

            if target == Some(u) {
                break;
            }

            let du = paths.distances[u];
            for edge in self.graph.neighbors(u) {
                let v = edge.to;
                if settled[v] {
                    continue;
                }
                let candidate = du + edge.weight;
                if paths.relax(u, v, candidate) {
                    queue.push_or_decrease(v, candidate + (self.heuristic)(v))?;
                }
            }
        }

        debug!(
            "dijkstra ({:?}): source {source}, {settled_count} vertices settled",
            self.backend
        );
        Ok(paths)
    }
}
