//! Erdős–Rényi test graphs.
//!
//! Randomness comes from the generator object passed in, so a seeded
//! [`StdRng`] reproduces the same graph on every run.

use crate::error::{Error, Result};
use crate::graph::Graph;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MAX_ATTEMPTS: usize = 1_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Every sampled pair becomes two opposite edges of equal weight. With
    /// negative weights each such pair is a negative cycle.
    #[default]
    Undirected,
    /// Every sampled pair `u < v` becomes the single edge `u -> v`, so the
    /// graph is acyclic and negative weights never form a cycle.
    Forward,
}

pub struct GraphGenerator<R> {
    vertices: usize,
    density: f64,
    negative_weights: bool,
    orientation: Orientation,
    rng: R,
}

impl GraphGenerator<StdRng> {
    pub fn seeded(vertices: usize, density: f64, seed: u64) -> Self {
        GraphGenerator::new(vertices, density, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GraphGenerator<R> {
    pub fn new(vertices: usize, density: f64, rng: R) -> Self {
        GraphGenerator {
            vertices,
            density,
            negative_weights: false,
            orientation: Orientation::Undirected,
            rng,
        }
    }

    /// Weights are drawn from `-10..=10` without zero instead of `1..=10`.
    pub fn with_negative_weights(mut self, negative: bool) -> Self {
        self.negative_weights = negative;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Samples graphs until one is connected (ignoring edge direction).
    pub fn generate(&mut self) -> Result<Graph> {
        if self.vertices < 1 {
            return Err(Error::Config("generator needs at least one vertex".into()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::Config(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let pairs = self.sample_pairs();
            if is_connected(self.vertices, &pairs) {
                debug!("generator: connected graph after {attempt} attempt(s)");
                return Graph::build(self.vertices, self.orient(pairs));
            }
        }

        Err(Error::Config(format!(
            "no connected graph with {} vertices at density {} after {MAX_ATTEMPTS} attempts",
            self.vertices, self.density
        )))
    }

    /// `graph_N{N}_D{density}_neg{bool}_{id}.in`
    pub fn file_name(&self, id: usize) -> String {
        format!(
            "graph_N{}_D{:.6}_neg{}_{}.in",
            self.vertices, self.density, self.negative_weights, id
        )
    }

    pub fn save(&self, graph: &Graph, dir: &Path, id: usize) -> Result<PathBuf> {
        let path = dir.join(self.file_name(id));
        let file = std::fs::File::create(&path)?;
        let mut writer = std::io::BufWriter::new(file);
        graph.write_to(&mut writer)?;
        info!("generated graph saved to {}", path.display());
        Ok(path)
    }

    fn sample_pairs(&mut self) -> Vec<(usize, usize, i64)> {
        let mut pairs = Vec::new();
        for u in 1..=self.vertices {
            for v in (u + 1)..=self.vertices {
                if self.rng.random::<f64>() < self.density {
                    let weight = self.sample_weight();
                    pairs.push((u, v, weight));
                }
            }
        }
        pairs
    }

    fn sample_weight(&mut self) -> i64 {
        if !self.negative_weights {
            return self.rng.random_range(1..=10);
        }
        loop {
            let weight = self.rng.random_range(-10..=10);
            if weight != 0 {
                return weight;
            }
        }
    }

    fn orient(&self, pairs: Vec<(usize, usize, i64)>) -> Vec<(usize, usize, i64)> {
        match self.orientation {
            Orientation::Forward => pairs,
            Orientation::Undirected => pairs
                .into_iter()
                .flat_map(|(u, v, w)| [(u, v, w), (v, u, w)])
                .collect(),
        }
    }
}

fn is_connected(vertices: usize, pairs: &[(usize, usize, i64)]) -> bool {
    let mut adjacency = vec![Vec::new(); vertices + 1];
    for &(u, v, _) in pairs {
        adjacency[u].push(v);
        adjacency[v].push(u);
    }

    let mut visited = vec![false; vertices + 1];
    let mut stack = vec![1];
    visited[1] = true;
    let mut seen = 1;
    while let Some(u) = stack.pop() {
        for &v in &adjacency[u] {
            if !visited[v] {
                visited[v] = true;
                seen += 1;
                stack.push(v);
            }
        }
    }
    seen == vertices
}
