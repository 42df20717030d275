use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::utils::ShortestPaths;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Order in which SPFA processes improved vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueDiscipline {
    /// Plain FIFO queue.
    #[default]
    Fifo,
    /// Small-Label-First: an improved vertex goes to the front of the deque
    /// when its distance is below that of the current front, otherwise to
    /// the back.
    SmallLabelFirst,
}

/// Queue-based Bellman–Ford ("shortest path faster algorithm").
///
/// A vertex is queued only when its distance improves and it is not already
/// waiting. More than `N` pushes of any single vertex means a negative cycle.
pub struct Spfa<'g> {
    graph: &'g Graph,
    discipline: QueueDiscipline,
}

impl<'g> Spfa<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Spfa {
            graph,
            discipline: QueueDiscipline::Fifo,
        }
    }

    pub fn with_discipline(mut self, discipline: QueueDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn discipline(&self) -> QueueDiscipline {
        self.discipline
    }

    pub fn solve(&self, source: usize) -> Result<ShortestPaths> {
        self.graph.check_vertex(source)?;
        let n = self.graph.vertex_count();
        let mut paths = ShortestPaths::new(n, source);
        let mut in_queue = vec![false; n + 1];
        let mut push_count = vec![0usize; n + 1];
        let mut queue = VecDeque::with_capacity(n);

        queue.push_back(source);
        in_queue[source] = true;
        let mut processed = 0usize;

        while let Some(u) = queue.pop_front() {
            in_queue[u] = false;
            processed += 1;
            let du = paths.distances[u];

            for edge in self.graph.neighbors(u) {
                let v = edge.to;
                if !paths.relax(u, v, du.saturating_add(edge.weight)) || in_queue[v] {
                    continue;
                }

                match self.discipline {
                    QueueDiscipline::Fifo => queue.push_back(v),
                    QueueDiscipline::SmallLabelFirst => match queue.front().copied() {
                        Some(front) if paths.distances[v] < paths.distances[front] => {
                            queue.push_front(v)
                        }
                        _ => queue.push_back(v),
                    },
                }
                in_queue[v] = true;

                push_count[v] += 1;
                if push_count[v] > n {
                    warn!(
                        "spfa: vertex {v} queued more than {n} times, negative cycle reachable from {source}"
                    );
                    return Err(Error::NegativeCycle {
                        origin: Some(source),
                    });
                }
            }
        }

        debug!(
            "spfa ({:?}): source {source}, {processed} vertices processed",
            self.discipline
        );
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bellman_ford::BellmanFord;

    const DISCIPLINES: [QueueDiscipline; 2] =
        [QueueDiscipline::Fifo, QueueDiscipline::SmallLabelFirst];

    fn graph(n: usize, edges: &[(usize, usize, i64)]) -> Graph {
        Graph::build(n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let g = graph(4, &[(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)]);
        for discipline in DISCIPLINES {
            let paths = Spfa::new(&g).with_discipline(discipline).solve(1).unwrap();
            assert_eq!(paths.to_vec(), vec![Some(0), Some(1), Some(3), Some(4)]);
        }
    }

    #[test]
    fn detects_two_vertex_negative_cycle() {
        let g = graph(2, &[(1, 2, 1), (2, 1, -2)]);
        for discipline in DISCIPLINES {
            let err = Spfa::new(&g).with_discipline(discipline).solve(1).unwrap_err();
            assert!(err.is_negative_cycle(), "{discipline:?}");
        }
    }

    #[test]
    fn detects_negative_self_loop() {
        let g = graph(3, &[(1, 2, 2), (2, 2, -1), (2, 3, 1)]);
        for discipline in DISCIPLINES {
            assert!(Spfa::new(&g).with_discipline(discipline).solve(1).is_err());
        }
    }

    #[test]
    fn matches_bellman_ford_with_negative_edges() {
        let g = graph(
            6,
            &[
                (1, 2, 5),
                (1, 3, 2),
                (3, 2, -4),
                (2, 4, 3),
                (3, 4, 7),
                (4, 5, -2),
                (2, 5, 6),
                (5, 6, 1),
                (1, 6, 10),
            ],
        );
        let expected = BellmanFord::new(&g).solve(1).unwrap();
        for discipline in DISCIPLINES {
            let paths = Spfa::new(&g).with_discipline(discipline).solve(1).unwrap();
            assert_eq!(paths.to_vec(), expected.to_vec(), "{discipline:?}");
        }
    }

    #[test]
    fn unreachable_vertices_stay_unreachable() {
        let g = graph(3, &[(2, 3, 1)]);
        let paths = Spfa::new(&g).solve(1).unwrap();
        assert_eq!(paths.to_vec(), vec![Some(0), None, None]);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let g = graph(5, &[(1, 2, 4), (1, 3, -2), (3, 2, 1), (2, 4, -1), (4, 5, 3), (3, 5, 9)]);
        for discipline in DISCIPLINES {
            let spfa = Spfa::new(&g).with_discipline(discipline);
            let first = spfa.solve(1).unwrap();
            assert_eq!(spfa.solve(1).unwrap(), first, "{discipline:?}");
        }
    }

    #[test]
    fn discipline_defaults_to_fifo() {
        let g = graph(1, &[]);
        assert_eq!(Spfa::new(&g).discipline(), QueueDiscipline::Fifo);
        assert_eq!(QueueDiscipline::default(), QueueDiscipline::Fifo);
    }
}
