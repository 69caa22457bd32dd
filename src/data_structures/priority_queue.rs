use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min priority queue over `BinaryHeap`, for the algorithms that tolerate
/// duplicate and stale entries (lazy Prim, Kruskal)
///
/// Ties on priority are broken by the item's own ordering.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a queue holding every `(item, priority)` pair, heapified in O(n)
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (V, P)>,
    {
        MinPriorityQueue {
            heap: items
                .into_iter()
                .map(|(item, priority)| Reverse((priority, item)))
                .collect(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
