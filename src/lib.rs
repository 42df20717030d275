pub mod bellman_ford;
pub mod config;
pub mod dijkstra;
pub mod error;
pub mod floyd_warshall;
pub mod generator;
pub mod graph;
pub mod heap;
pub mod johnson;
pub mod solver;
pub mod spfa;
pub mod utils;

pub use bellman_ford::BellmanFord;
pub use config::{Algorithm, RunConfig};
pub use dijkstra::{Backend, Dijkstra, astar, zero_heuristic};
pub use error::{Error, HeapError, Result};
pub use floyd_warshall::{FloydWarshall, ParallelEdges};
pub use generator::{GraphGenerator, Orientation};
pub use graph::{DirectedEdge, Edge, Graph};
pub use johnson::{Johnson, Reweighted};
pub use solver::{Solution, run};
pub use spfa::{QueueDiscipline, Spfa};
pub use utils::{DistanceMatrix, INFINITY, ShortestPaths};
