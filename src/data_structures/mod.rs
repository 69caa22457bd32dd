pub mod indexed_min_pq;
pub mod priority_queue;
pub mod union_find;

pub use indexed_min_pq::IndexMinPQ;
pub use priority_queue::MinPriorityQueue;
pub use union_find::UnionFind;
