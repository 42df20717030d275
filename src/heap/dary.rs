use super::DijkstraQueue;
use crate::error::HeapError;
use crate::utils::VertexDistance;

/// Indexed D-ary min-heap with true decrease-key.
///
/// Keys are integers in `0..capacity` (vertex ids); each key occupies at most
/// one heap slot. `position_map[key]` is the slot holding `key` and
/// `inverse_map[slot]` is the key stored in `slot`; both are updated together
/// on every swap.
#[derive(Debug, Clone)]
pub struct IndexedDaryHeap<T> {
    arity: usize,
    len: usize,
    position_map: Vec<Option<usize>>,
    inverse_map: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy + Ord + Default> IndexedDaryHeap<T> {
    /// Creates an empty heap for keys `0..capacity`. Arities below 2 are
    /// raised to 2.
    pub fn new(arity: usize, capacity: usize) -> Self {
        IndexedDaryHeap {
            arity: arity.max(2),
            len: 0,
            position_map: vec![None; capacity],
            inverse_map: vec![0; capacity],
            values: vec![T::default(); capacity],
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn capacity(&self) -> usize {
        self.position_map.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, key: usize) -> Result<bool, HeapError> {
        self.check_key(key)?;
        Ok(self.position_map[key].is_some())
    }

    /// Current value of `key`, if present.
    pub fn value_of(&self, key: usize) -> Option<T> {
        match self.position_map.get(key) {
            Some(Some(_)) => Some(self.values[key]),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: usize, value: T) -> Result<(), HeapError> {
        if self.contains(key)? {
            return Err(HeapError::DuplicateKey(key));
        }
        let slot = self.len;
        self.position_map[key] = Some(slot);
        self.inverse_map[slot] = key;
        self.values[key] = value;
        self.len += 1;
        self.swim(slot);
        Ok(())
    }

    /// Lowers the value of `key` to `value`. A value that is not smaller than
    /// the current one leaves the heap untouched.
    pub fn decrease(&mut self, key: usize, value: T) -> Result<(), HeapError> {
        self.check_key(key)?;
        let slot = self.position_map[key].ok_or(HeapError::KeyNotPresent(key))?;
        if value < self.values[key] {
            self.values[key] = value;
            self.swim(slot);
        }
        Ok(())
    }

    pub fn peek_min_key(&self) -> Option<usize> {
        (self.len > 0).then(|| self.inverse_map[0])
    }

    pub fn poll_min_key(&mut self) -> Result<usize, HeapError> {
        self.poll_min().map(|(key, _)| key)
    }

    pub fn poll_min_value(&mut self) -> Result<T, HeapError> {
        self.poll_min().map(|(_, value)| value)
    }

    /// Removes the minimum and returns it with its value.
    pub fn poll_min(&mut self) -> Result<(usize, T), HeapError> {
        if self.len == 0 {
            return Err(HeapError::Underflow);
        }
        let min_key = self.inverse_map[0];
        self.len -= 1;
        if self.len > 0 {
            self.swap(0, self.len);
            self.position_map[min_key] = None;
            self.sink(0);
        } else {
            self.position_map[min_key] = None;
        }
        Ok((min_key, self.values[min_key]))
    }

    fn check_key(&self, key: usize) -> Result<(), HeapError> {
        if key < self.capacity() {
            Ok(())
        } else {
            Err(HeapError::KeyOutOfBounds {
                key,
                capacity: self.capacity(),
            })
        }
    }

    #[inline]
    fn parent(&self, slot: usize) -> usize {
        (slot - 1) / self.arity
    }

    #[inline]
    fn first_child(&self, slot: usize) -> usize {
        slot * self.arity + 1
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.values[self.inverse_map[a]] < self.values[self.inverse_map[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.inverse_map.swap(a, b);
        self.position_map[self.inverse_map[a]] = Some(a);
        self.position_map[self.inverse_map[b]] = Some(b);
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = self.parent(slot);
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        loop {
            let first = self.first_child(slot);
            let last = (first + self.arity).min(self.len);
            let mut best = slot;
            for child in first..last {
                if self.less(child, best) {
                    best = child;
                }
            }
            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let maps_agree =
            (0..self.len).all(|slot| self.position_map[self.inverse_map[slot]] == Some(slot));
        let heap_ordered = (1..self.len).all(|slot| !self.less(slot, self.parent(slot)));
        let present = self.position_map.iter().filter(|p| p.is_some()).count();
        maps_agree && heap_ordered && present == self.len
    }
}

impl DijkstraQueue for IndexedDaryHeap<i64> {
    fn push_or_decrease(&mut self, vertex: usize, key: i64) -> Result<(), HeapError> {
        if self.contains(vertex)? {
            self.decrease(vertex, key)
        } else {
            self.insert(vertex, key)
        }
    }

    fn pop_min(&mut self) -> Option<VertexDistance> {
        self.poll_min()
            .ok()
            .map(|(vertex, distance)| VertexDistance::new(vertex, distance))
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}
