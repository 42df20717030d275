//! Priority structures used by the Dijkstra-family solvers.
//!
//! All three expose "extract minimum" and "insert or lower a key" through
//! [`DijkstraQueue`] so that [`crate::dijkstra::Dijkstra`] can be generic over
//! them:
//!
//! * [`LazyBinaryHeap`] wraps `std::collections::BinaryHeap` and never
//!   decreases a key in place. Improvements are pushed as duplicate entries
//!   and the caller drops stale ones on extraction.
//! * [`IndexedDaryHeap`] keeps exactly one slot per vertex and supports true
//!   decrease-key.
//! * [`RadixHeap`] is a monotone integer heap: keys pushed must never be
//!   smaller than the last key extracted.

mod binary;
mod dary;
mod radix;

pub use binary::LazyBinaryHeap;
pub use dary::IndexedDaryHeap;
pub use radix::RadixHeap;

use crate::error::HeapError;
use crate::utils::VertexDistance;

pub trait DijkstraQueue {
    /// Records that `vertex` can be reached with priority `key`, either by
    /// inserting it or by lowering the key it already has.
    fn push_or_decrease(&mut self, vertex: usize, key: i64) -> Result<(), HeapError>;

    /// Removes and returns an entry with the smallest key. Lazy queues may
    /// return entries for vertices that were already extracted.
    fn pop_min(&mut self) -> Option<VertexDistance>;

    fn is_empty(&self) -> bool;
}
