use super::DijkstraQueue;
use crate::error::HeapError;
use crate::utils::VertexDistance;

const BUCKETS: usize = u64::BITS as usize + 1;

/// Monotone radix heap over `i64` keys.
///
/// Keys are mapped to `u64` by flipping the sign bit, which preserves order.
/// An entry lives in the bucket named by the highest bit in which its key
/// differs from the last extracted key; bucket 0 holds keys equal to it.
///
/// Pushing a key smaller than the last extracted key breaks the structure and
/// panics.
#[derive(Debug, Clone)]
pub struct RadixHeap<V> {
    buckets: Vec<Vec<(u64, V)>>,
    last: u64,
    len: usize,
}

#[inline]
fn encode(key: i64) -> u64 {
    (key as u64) ^ (1 << 63)
}

#[inline]
fn decode(key: u64) -> i64 {
    (key ^ (1 << 63)) as i64
}

#[inline]
fn bucket_of(key: u64, last: u64) -> usize {
    (u64::BITS - (key ^ last).leading_zeros()) as usize
}

impl<V> RadixHeap<V> {
    pub fn new() -> Self {
        RadixHeap {
            buckets: (0..BUCKETS).map(|_| Vec::new()).collect(),
            last: encode(i64::MIN),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recently extracted key; no pushed key may be smaller.
    pub fn last_key(&self) -> i64 {
        decode(self.last)
    }

    pub fn push(&mut self, key: i64, value: V) {
        let key = encode(key);
        assert!(
            key >= self.last,
            "radix heap key {} is below the last extracted key {}",
            decode(key),
            decode(self.last)
        );
        self.buckets[bucket_of(key, self.last)].push((key, value));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<(i64, V)> {
        if self.len == 0 {
            return None;
        }
        if self.buckets[0].is_empty() {
            self.redistribute();
        }
        let (key, value) = self.buckets[0].pop()?;
        self.len -= 1;
        Some((decode(key), value))
    }

    /// Moves the first non-empty bucket down after raising `last` to its
    /// minimum; every entry lands in a strictly lower bucket.
    fn redistribute(&mut self) {
        let Some(index) = self.buckets.iter().position(|b| !b.is_empty()) else {
            return;
        };
        let bucket = std::mem::take(&mut self.buckets[index]);
        if let Some(min) = bucket.iter().map(|&(key, _)| key).min() {
            self.last = min;
        }
        for (key, value) in bucket {
            self.buckets[bucket_of(key, self.last)].push((key, value));
        }
    }
}

impl<V> Default for RadixHeap<V> {
    fn default() -> Self {
        RadixHeap::new()
    }
}

impl DijkstraQueue for RadixHeap<usize> {
    fn push_or_decrease(&mut self, vertex: usize, key: i64) -> Result<(), HeapError> {
        self.push(key, vertex);
        Ok(())
    }

    fn pop_min(&mut self) -> Option<VertexDistance> {
        self.pop()
            .map(|(distance, vertex)| VertexDistance::new(vertex, distance))
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}
