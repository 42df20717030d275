use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The graph description violates its structural contract.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A cycle of negative total weight was found. Distances computed by the
    /// failing run are invalid and have been discarded.
    #[error("negative weight cycle detected{}", origin_suffix(.origin))]
    NegativeCycle { origin: Option<usize> },

    #[error("vertex {vertex} is outside [1, {vertex_count}]")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn origin_suffix(origin: &Option<usize>) -> String {
    match origin {
        Some(vertex) => format!(" (reachable from vertex {vertex})"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Error::NegativeCycle { .. })
    }
}

/// Contract violations of [`crate::heap::IndexedDaryHeap`]. These indicate
/// caller misuse rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("key {0} is already present in the heap")]
    DuplicateKey(usize),
    #[error("key {0} is not present in the heap")]
    KeyNotPresent(usize),
    #[error("key {key} is outside the heap capacity {capacity}")]
    KeyOutOfBounds { key: usize, capacity: usize },
    #[error("heap underflow")]
    Underflow,
}
