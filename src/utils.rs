use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Distance of an unreachable vertex. `INFINITY + INFINITY` still fits in an
/// `i64`; [`crate::Graph::build`] rejects weights that could reach it.
pub const INFINITY: i64 = i64::MAX / 4;

/// Heap entry ordered by distance, then vertex id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexDistance {
    pub distance: i64,
    pub vertex: usize,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: i64) -> Self {
        VertexDistance { distance, vertex }
    }
}

/// Result of a single-source solve.
///
/// Serialises as `source` plus `distances` and `predecessors` for vertices
/// `1..=N`, with `null` for unreachable vertices and missing predecessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    // Indexed by vertex id; slot 0 is unused.
    pub(crate) distances: Vec<i64>,
    pub(crate) predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![INFINITY; vertex_count + 1];
        distances[source] = 0;
        ShortestPaths {
            source,
            distances,
            predecessors: vec![None; vertex_count + 1],
        }
    }

    /// Lowers the distance of `to` through `from` if `candidate` improves it.
    #[inline]
    pub(crate) fn relax(&mut self, from: usize, to: usize, candidate: i64) -> bool {
        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len() - 1
    }

    /// Shortest distance to `vertex`, `None` if unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Option<i64> {
        match self.distances.get(vertex) {
            Some(&d) if vertex > 0 && d != INFINITY => Some(d),
            _ => None,
        }
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Raw distances for vertices `1..=N`, [`INFINITY`] for unreachable.
    pub fn as_slice(&self) -> &[i64] {
        &self.distances[1..]
    }

    pub fn to_vec(&self) -> Vec<Option<i64>> {
        (1..=self.vertex_count()).map(|v| self.distance(v)).collect()
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Vertices on a shortest path from the source to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.vertex_count() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Dense all-pairs result, `N x N`, addressed with 1-based vertex ids.
/// Serialises as `vertices` plus one row of optional distances per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertices: usize,
    values: Vec<i64>,
}

impl DistanceMatrix {
    /// Matrix with every entry unreachable.
    pub(crate) fn unreachable(vertices: usize) -> Self {
        DistanceMatrix {
            vertices,
            values: vec![INFINITY; vertices * vertices],
        }
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        (from - 1) * self.vertices + (to - 1)
    }

    #[inline]
    pub(crate) fn raw(&self, from: usize, to: usize) -> i64 {
        self.values[self.index(from, to)]
    }

    #[inline]
    pub(crate) fn set(&mut self, from: usize, to: usize, value: i64) {
        let index = self.index(from, to);
        self.values[index] = value;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        if from == 0 || to == 0 || from > self.vertices || to > self.vertices {
            return None;
        }
        match self.raw(from, to) {
            INFINITY => None,
            d => Some(d),
        }
    }

    pub fn row(&self, from: usize) -> Vec<Option<i64>> {
        (1..=self.vertices).map(|to| self.get(from, to)).collect()
    }

    /// A negative entry on the diagonal means some vertex lies on a negative
    /// cycle.
    pub fn has_negative_diagonal(&self) -> bool {
        (1..=self.vertices).any(|v| self.raw(v, v) < 0)
    }
}

impl Serialize for ShortestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let predecessors: Vec<Option<usize>> = (1..=self.vertex_count())
            .map(|v| self.predecessor(v))
            .collect();

        let mut state = serializer.serialize_struct("ShortestPaths", 3)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("distances", &self.to_vec())?;
        state.serialize_field("predecessors", &predecessors)?;
        state.end()
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<Option<i64>>> = (1..=self.vertices).map(|u| self.row(u)).collect();

        let mut state = serializer.serialize_struct("DistanceMatrix", 2)?;
        state.serialize_field("vertices", &self.vertices)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_distance_orders_by_distance_first() {
        let mut entries = vec![
            VertexDistance::new(1, 5),
            VertexDistance::new(3, -2),
            VertexDistance::new(2, 5),
        ];
        entries.sort();
        assert_eq!(
            entries,
            vec![
                VertexDistance::new(3, -2),
                VertexDistance::new(1, 5),
                VertexDistance::new(2, 5)
            ]
        );
    }

    #[test]
    fn shortest_paths_reports_unreachable_as_none() {
        let mut paths = ShortestPaths::new(3, 2);
        assert!(paths.relax(2, 3, 4));
        assert!(!paths.relax(2, 3, 4));

        assert_eq!(paths.to_vec(), vec![None, Some(0), Some(4)]);
        assert_eq!(paths.as_slice(), &[INFINITY, 0, 4]);
        assert_eq!(paths.distance(0), None);
        assert_eq!(paths.distance(9), None);
    }

    #[test]
    fn path_to_follows_predecessors() {
        let mut paths = ShortestPaths::new(4, 1);
        paths.relax(1, 2, 1);
        paths.relax(2, 3, 3);
        paths.relax(3, 4, 4);

        assert_eq!(paths.path_to(4), Some(vec![1, 2, 3, 4]));
        assert_eq!(paths.path_to(1), Some(vec![1]));

        let unreachable = ShortestPaths::new(4, 1);
        assert_eq!(unreachable.path_to(3), None);
    }

    #[test]
    fn shortest_paths_json_hides_storage_layout() {
        let mut paths = ShortestPaths::new(3, 1);
        paths.relax(1, 2, 4);

        let json = serde_json::to_value(&paths).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": 1,
                "distances": [0, 4, null],
                "predecessors": [null, 1, null]
            })
        );

        let distances: Vec<Option<i64>> =
            serde_json::from_value(json["distances"].clone()).unwrap();
        assert_eq!(distances, paths.to_vec());
    }

    #[test]
    fn matrix_json_is_rows_of_optional_distances() {
        let mut matrix = DistanceMatrix::unreachable(2);
        matrix.set(1, 1, 0);
        matrix.set(1, 2, -3);
        matrix.set(2, 2, 0);

        let text = serde_json::to_string(&matrix).unwrap();
        assert_eq!(text, r#"{"vertices":2,"rows":[[0,-3],[null,0]]}"#);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows: Vec<Vec<Option<i64>>> = serde_json::from_value(value["rows"].clone()).unwrap();
        assert_eq!(rows, vec![matrix.row(1), matrix.row(2)]);
    }

    #[test]
    fn matrix_addressing_is_one_based() {
        let mut matrix = DistanceMatrix::unreachable(2);
        matrix.set(1, 2, 7);
        matrix.set(2, 2, -1);

        assert_eq!(matrix.get(1, 2), Some(7));
        assert_eq!(matrix.get(2, 1), None);
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.row(2), vec![None, Some(-1)]);
        assert!(matrix.has_negative_diagonal());
    }
}
