use crate::error::{Error, Result};
use crate::utils::INFINITY;
use std::io::{Read, Write};
use std::path::Path;

/// Outgoing edge as stored in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: i64,
}

/// Edge as it appeared in the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// Immutable weighted directed graph over vertices `1..=vertices`.
///
/// Both the adjacency form and the flat edge list are kept: Dijkstra-family
/// solvers walk `neighbors`, Bellman–Ford walks `edges`. Multi-edges and
/// self-loops are preserved in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: usize,
    // Slot 0 is unused so that vertex ids index directly.
    adjacency: Vec<Vec<Edge>>,
    edge_list: Vec<DirectedEdge>,
}

impl Graph {
    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// Fails with [`Error::MalformedInput`] when `vertex_count` is zero, when
    /// an endpoint lies outside `[1, vertex_count]`, or when the weights are
    /// large enough that a simple path could reach the unreachable sentinel.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        if vertex_count < 1 {
            return Err(Error::malformed("vertex count must be at least 1"));
        }

        let mut graph = Graph {
            vertices: vertex_count,
            adjacency: adjacency_for(vertex_count)?,
            edge_list: Vec::new(),
        };
        let mut max_abs_weight = 0u64;

        for (index, (from, to, weight)) in edges.into_iter().enumerate() {
            for endpoint in [from, to] {
                if endpoint < 1 || endpoint > vertex_count {
                    return Err(Error::malformed(format!(
                        "edge #{} ({from} -> {to}) references vertex {endpoint} outside [1, {vertex_count}]",
                        index + 1
                    )));
                }
            }
            max_abs_weight = max_abs_weight.max(weight.unsigned_abs());
            graph.push_edge(from, to, weight);
        }

        // Every finite cost a solver can produce, including Johnson's
        // reweighted tentative distances, must stay within 4 * N * max|w|.
        let worst_case = u128::from(max_abs_weight) * vertex_count as u128 * 4;
        if worst_case > INFINITY as u128 {
            return Err(Error::malformed(format!(
                "edge weight magnitude {max_abs_weight} is too large for {vertex_count} vertices"
            )));
        }

        Ok(graph)
    }

    /// Parses the whitespace-separated text format: the vertex count followed
    /// by `source destination weight` triples until end of input.
    pub fn parse(input: &str) -> Result<Graph> {
        let mut tokens = input.split_ascii_whitespace().enumerate();

        let vertex_count = match tokens.next() {
            Some((_, token)) => parse_token::<usize>(token, 1, "vertex count")?,
            None => return Err(Error::malformed("empty input, expected a vertex count")),
        };

        let mut edges = Vec::new();
        while let Some((position, token)) = tokens.next() {
            let from = parse_token::<usize>(token, position + 1, "source vertex")?;
            let to = match tokens.next() {
                Some((p, t)) => parse_token::<usize>(t, p + 1, "destination vertex")?,
                None => return Err(truncated(position + 1)),
            };
            let weight = match tokens.next() {
                Some((p, t)) => parse_token::<i64>(t, p + 1, "weight")?,
                None => return Err(truncated(position + 1)),
            };
            edges.push((from, to, weight));
        }

        Graph::build(vertex_count, edges)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Graph> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Graph::parse(&input)
    }

    pub fn from_file(path: &Path) -> Result<Graph> {
        let file = std::fs::File::open(path)?;
        Graph::from_reader(std::io::BufReader::new(file))
    }

    /// Writes the graph back out in the input format.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.vertices)?;
        for edge in &self.edge_list {
            writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Vertex ids, `1..=N`.
    pub fn vertices(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.vertices
    }

    pub fn contains(&self, vertex: usize) -> bool {
        (1..=self.vertices).contains(&vertex)
    }

    /// Outgoing edges of `vertex` in insertion order.
    ///
    /// # Panics
    /// If `vertex` is not in `[1, N]`.
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        assert!(self.contains(vertex), "vertex {vertex} out of range");
        &self.adjacency[vertex]
    }

    /// All edges in input order.
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edge_list
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    pub fn average_out_degree(&self) -> usize {
        self.edge_list.len() / self.vertices
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edge_list.iter().any(|e| e.weight < 0)
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertices,
            })
        }
    }

    /// Same topology and edge order with every weight replaced by `weight(edge)`.
    /// The sentinel bound is not re-checked; callers own that guarantee.
    pub(crate) fn map_weights<F>(&self, weight: F) -> Graph
    where
        F: Fn(&DirectedEdge) -> i64,
    {
        let mut graph = Graph {
            vertices: self.vertices,
            adjacency: vec![Vec::new(); self.vertices + 1],
            edge_list: Vec::with_capacity(self.edge_list.len()),
        };
        for edge in &self.edge_list {
            graph.push_edge(edge.from, edge.to, weight(edge));
        }
        graph
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: i64) {
        self.adjacency[from].push(Edge { to, weight });
        self.edge_list.push(DirectedEdge { from, to, weight });
    }
}

impl std::str::FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Graph> {
        Graph::parse(s)
    }
}

/// Empty adjacency lists for vertices `0..=vertex_count`, failing instead of
/// aborting when the count cannot be allocated.
fn adjacency_for(vertex_count: usize) -> Result<Vec<Vec<Edge>>> {
    let too_many = || Error::malformed(format!("vertex count {vertex_count} is too large"));
    let slots = vertex_count.checked_add(1).ok_or_else(too_many)?;
    if slots > isize::MAX as usize / std::mem::size_of::<Vec<Edge>>() {
        return Err(too_many());
    }

    let mut adjacency = Vec::new();
    adjacency.try_reserve_exact(slots).map_err(|_| too_many())?;
    adjacency.resize_with(slots, Vec::new);
    Ok(adjacency)
}

fn parse_token<T: std::str::FromStr>(token: &str, position: usize, what: &str) -> Result<T> {
    token.parse::<T>().map_err(|_| {
        Error::malformed(format!(
            "token #{position} ({token:?}) is not a valid {what}"
        ))
    })
}

fn truncated(position: usize) -> Error {
    Error::malformed(format!(
        "incomplete edge triple starting at token #{position}"
    ))
}
