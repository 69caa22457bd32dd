use std::fmt::Debug;

use crate::{Error, Result};

/// Indexed min priority queue over the vertex indices `0..capacity`
///
/// Backed by a 1-indexed binary heap plus two parallel arrays:
/// - `heap[i]` is the vertex at heap position `i`
/// - `position[v]` is the heap position of `v` (`None` when absent)
/// - `keys[v]` is the current priority of `v`
///
/// For every vertex `v` in the queue `heap[position[v]] == v`, and no heap
/// parent has a greater key than either of its children. All operations
/// except `contains`, `len` and `is_empty` are O(log n).
#[derive(Debug, Clone)]
pub struct IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug,
{
    n: usize,
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K> IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue able to hold the indices `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexMinPQ {
            n: 0,
            heap: vec![0; capacity + 1],
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Largest index + 1 the queue accepts
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns true if `index` is currently in the queue
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.position.get(index), Some(Some(_)))
    }

    /// Current key of `index`, if present
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied().flatten()
    }

    /// Inserts `index` with the given key
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        self.validate(index)?;
        if self.contains(index) {
            return Err(Error::AlreadyInQueue(index));
        }
        self.n += 1;
        self.heap[self.n] = index;
        self.position[index] = Some(self.n);
        self.keys[index] = Some(key);
        self.swim(self.n);
        Ok(())
    }

    /// Replaces the key of `index`, moving it up or down as needed
    pub fn change(&mut self, index: usize, key: K) -> Result<()> {
        self.validate(index)?;
        let pos = self.position[index].ok_or(Error::NotInQueue(index))?;
        let old = self.keys[index];
        self.keys[index] = Some(key);
        if Some(key) < old {
            self.swim(pos);
        } else {
            self.sink(pos);
        }
        Ok(())
    }

    /// Lowers the key of `index`; equivalent to [`IndexMinPQ::change`] for
    /// a smaller key
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        self.change(index, key)
    }

    /// Index with the smallest key
    pub fn min_index(&self) -> Result<usize> {
        if self.n == 0 {
            return Err(Error::EmptyQueue);
        }
        Ok(self.heap[1])
    }

    /// Smallest key
    pub fn min_key(&self) -> Result<K> {
        let index = self.min_index()?;
        self.keys[index].ok_or(Error::EmptyQueue)
    }

    /// Removes the index with the smallest key and returns it
    pub fn del_min(&mut self) -> Result<usize> {
        if self.n == 0 {
            return Err(Error::EmptyQueue);
        }
        let min = self.heap[1];
        self.exchange(1, self.n);
        self.n -= 1;
        self.sink(1);
        self.position[min] = None;
        self.keys[min] = None;
        Ok(min)
    }

    /// Removes `index` wherever it sits in the heap
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.validate(index)?;
        let pos = self.position[index].ok_or(Error::NotInQueue(index))?;
        self.exchange(pos, self.n);
        self.n -= 1;
        if pos <= self.n {
            self.swim(pos);
            self.sink(pos);
        }
        self.position[index] = None;
        self.keys[index] = None;
        Ok(())
    }

    fn validate(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(Error::InvalidVertex(index));
        }
        Ok(())
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.keys[self.heap[i]] > self.keys[self.heap[j]]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exchange(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.n {
            let mut j = 2 * k;
            if j < self.n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.exchange(k, j);
            k = j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_heap_invariant(pq: &IndexMinPQ<i64>) {
        for pos in 1..=pq.n {
            let v = pq.heap[pos];
            assert_eq!(pq.position[v], Some(pos), "position out of sync for {}", v);
            for child in [2 * pos, 2 * pos + 1] {
                if child <= pq.n {
                    assert!(pq.keys[v] <= pq.keys[pq.heap[child]], "heap order broken at {}", pos);
                }
            }
        }
        let present = pq.position.iter().filter(|p| p.is_some()).count();
        assert_eq!(present, pq.n);
    }

    #[test]
    fn invariant_holds_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pq = IndexMinPQ::new(64);

        for _ in 0..2_000 {
            let v = rng.gen_range(0..64);
            match rng.gen_range(0..3) {
                0 if !pq.contains(v) => pq.insert(v, rng.gen_range(-100..100)).unwrap(),
                1 if pq.contains(v) => pq.change(v, rng.gen_range(-100..100)).unwrap(),
                2 if !pq.is_empty() => {
                    let min_key = pq.min_key().unwrap();
                    let popped = pq.del_min().unwrap();
                    assert!(!pq.contains(popped));
                    assert!(pq.heap[1..=pq.n].iter().all(|&u| pq.keys[u] >= Some(min_key)));
                }
                _ => {}
            }
            assert_heap_invariant(&pq);
        }
    }

    #[test]
    fn delete_keeps_heap_consistent() {
        let mut pq = IndexMinPQ::new(10);
        for v in 0..10 {
            pq.insert(v, (10 - v) as i64).unwrap();
        }
        pq.delete(4).unwrap();
        pq.delete(9).unwrap();
        assert_heap_invariant(&pq);
        assert!(!pq.contains(4));
        assert_eq!(pq.len(), 8);
    }
}
