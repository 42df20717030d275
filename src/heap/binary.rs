use super::DijkstraQueue;
use crate::error::HeapError;
use crate::utils::VertexDistance;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap without decrease-key.
///
/// Every improvement is a new entry, so a vertex can be present several times
/// with different keys. Callers must skip entries whose key no longer matches
/// the vertex's settled distance.
#[derive(Debug, Default)]
pub struct LazyBinaryHeap {
    data: BinaryHeap<Reverse<VertexDistance>>,
}

impl LazyBinaryHeap {
    pub fn new() -> Self {
        LazyBinaryHeap {
            data: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LazyBinaryHeap {
            data: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: usize, distance: i64) {
        self.data.push(Reverse(VertexDistance::new(vertex, distance)));
    }

    pub fn pop(&mut self) -> Option<VertexDistance> {
        self.data.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl DijkstraQueue for LazyBinaryHeap {
    fn push_or_decrease(&mut self, vertex: usize, key: i64) -> Result<(), HeapError> {
        self.push(vertex, key);
        Ok(())
    }

    fn pop_min(&mut self) -> Option<VertexDistance> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
