use graph_relax::data_structures::{IndexMinPQ, MinPriorityQueue};
use graph_relax::Error;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_del_min_returns_indices_in_key_order() {
    let mut pq = IndexMinPQ::new(6);
    let keys = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
    for (i, &k) in keys.iter().enumerate() {
        pq.insert(i, OrderedFloat(k)).unwrap();
    }
    assert_eq!(pq.len(), 6);
    assert_eq!(pq.min_index().unwrap(), 3);
    assert_eq!(pq.min_key().unwrap(), OrderedFloat(1.0));

    let mut order = Vec::new();
    while !pq.is_empty() {
        order.push(pq.del_min().unwrap());
    }
    assert_eq!(order, vec![3, 5, 1, 0, 2, 4]);
}

#[test]
fn test_change_moves_index_both_ways() {
    let mut pq = IndexMinPQ::new(4);
    pq.insert(0, OrderedFloat(10.0)).unwrap();
    pq.insert(1, OrderedFloat(20.0)).unwrap();
    pq.insert(2, OrderedFloat(30.0)).unwrap();

    pq.change(2, OrderedFloat(5.0)).unwrap();
    assert_eq!(pq.min_index().unwrap(), 2);
    assert_eq!(pq.key_of(2), Some(OrderedFloat(5.0)));

    pq.change(2, OrderedFloat(50.0)).unwrap();
    assert_eq!(pq.min_index().unwrap(), 0);

    pq.decrease_key(1, OrderedFloat(1.0)).unwrap();
    assert_eq!(pq.del_min().unwrap(), 1);
    assert_eq!(pq.del_min().unwrap(), 0);
    assert_eq!(pq.del_min().unwrap(), 2);
}

#[test]
fn test_contains_tracks_membership() {
    let mut pq = IndexMinPQ::new(3);
    assert!(!pq.contains(1));
    pq.insert(1, OrderedFloat(1.0)).unwrap();
    assert!(pq.contains(1));
    pq.del_min().unwrap();
    assert!(!pq.contains(1));
    assert_eq!(pq.key_of(1), None);
    // Out of range is simply absent
    assert!(!pq.contains(99));
}

#[test]
fn test_precondition_errors() {
    let mut pq: IndexMinPQ<OrderedFloat<f64>> = IndexMinPQ::new(2);
    assert!(matches!(pq.del_min(), Err(Error::EmptyQueue)));
    assert!(matches!(pq.min_index(), Err(Error::EmptyQueue)));
    assert!(matches!(pq.insert(2, OrderedFloat(0.0)), Err(Error::InvalidVertex(2))));
    assert!(matches!(pq.change(0, OrderedFloat(0.0)), Err(Error::NotInQueue(0))));

    pq.insert(0, OrderedFloat(1.0)).unwrap();
    assert!(matches!(pq.insert(0, OrderedFloat(2.0)), Err(Error::AlreadyInQueue(0))));
    assert_eq!(pq.len(), 1);
}

#[test]
fn test_index_can_be_reinserted_after_removal() {
    let mut pq = IndexMinPQ::new(2);
    pq.insert(0, OrderedFloat(4.0)).unwrap();
    pq.insert(1, OrderedFloat(2.0)).unwrap();
    pq.delete(1).unwrap();
    assert_eq!(pq.min_index().unwrap(), 0);
    pq.insert(1, OrderedFloat(3.0)).unwrap();
    assert_eq!(pq.del_min().unwrap(), 1);
}

#[test]
fn test_matches_sorted_keys_on_random_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 200;
    let mut pq = IndexMinPQ::new(n);
    let mut keys = vec![0.0f64; n];
    for (i, key) in keys.iter_mut().enumerate() {
        *key = rng.gen_range(0.0..1000.0);
        pq.insert(i, OrderedFloat(*key)).unwrap();
    }
    // Lower half of the keys, raise the rest
    for (i, key) in keys.iter_mut().enumerate() {
        *key = if i % 2 == 0 { *key / 2.0 } else { *key + 500.0 };
        pq.change(i, OrderedFloat(*key)).unwrap();
    }

    let mut popped = Vec::new();
    while !pq.is_empty() {
        let i = pq.del_min().unwrap();
        popped.push(keys[i]);
    }
    let mut sorted = keys.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(popped, sorted);
}

#[test]
fn test_min_priority_queue_keeps_duplicates_and_breaks_ties_by_item() {
    let mut queue = MinPriorityQueue::from_items(vec![(4usize, OrderedFloat(2.0)), (1, OrderedFloat(7.0))]);
    queue.push(3, OrderedFloat(2.0));
    queue.push(1, OrderedFloat(0.5));
    assert_eq!(queue.len(), 4);

    let mut popped = Vec::new();
    while let Some(entry) = queue.pop() {
        popped.push(entry);
    }
    assert_eq!(
        popped,
        vec![
            (1, OrderedFloat(0.5)),
            (3, OrderedFloat(2.0)),
            (4, OrderedFloat(2.0)),
            (1, OrderedFloat(7.0)),
        ]
    );
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_min_priority_queue_drains_random_priorities_in_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut queue: MinPriorityQueue<usize, OrderedFloat<f64>> = MinPriorityQueue::default();
    let mut priorities = Vec::new();
    for i in 0..200 {
        let p = OrderedFloat(rng.gen_range(0.0..100.0));
        queue.push(i, p);
        priorities.push(p);
    }
    priorities.sort();

    let drained: Vec<OrderedFloat<f64>> = std::iter::from_fn(|| queue.pop()).map(|(_, p)| p).collect();
    assert_eq!(drained, priorities);
}
