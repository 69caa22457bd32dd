use graph_relax::data_structures::UnionFind;
use graph_relax::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_union_merges_components() {
    let mut uf = UnionFind::new(10);
    assert_eq!(uf.count(), 10);

    assert!(uf.union(4, 3).unwrap());
    assert!(uf.union(3, 8).unwrap());
    assert!(uf.union(6, 5).unwrap());
    assert!(uf.union(9, 4).unwrap());
    assert!(uf.union(2, 1).unwrap());
    assert!(!uf.union(8, 9).unwrap());
    assert!(uf.union(5, 0).unwrap());
    assert!(uf.union(7, 2).unwrap());
    assert!(uf.union(6, 1).unwrap());

    assert_eq!(uf.count(), 2);
    assert!(uf.connected(0, 7).unwrap());
    assert!(uf.connected(8, 9).unwrap());
    assert!(!uf.connected(0, 9).unwrap());
    assert_eq!(uf.component_size(3).unwrap(), 4);
    assert_eq!(uf.component_size(1).unwrap(), 6);
}

#[test]
fn test_find_is_stable_within_component() {
    let mut uf = UnionFind::new(5);
    uf.union(0, 1).unwrap();
    uf.union(1, 2).unwrap();
    let root = uf.find(2).unwrap();
    assert_eq!(uf.find(0).unwrap(), root);
    assert_eq!(uf.find(1).unwrap(), root);
    assert_ne!(uf.find(3).unwrap(), root);
}

#[test]
fn test_invalid_site() {
    let mut uf = UnionFind::new(3);
    assert!(matches!(uf.find(3), Err(Error::InvalidVertex(3))));
    assert!(matches!(uf.union(0, 5), Err(Error::InvalidVertex(5))));
    assert_eq!(uf.count(), 3);
}

#[test]
fn test_agrees_with_naive_labels() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 100;
    let mut uf = UnionFind::new(n);
    let mut label: Vec<usize> = (0..n).collect();

    for _ in 0..150 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        let merged = uf.union(p, q).unwrap();
        assert_eq!(merged, label[p] != label[q]);
        if merged {
            let (old, new) = (label[q], label[p]);
            for l in label.iter_mut() {
                if *l == old {
                    *l = new;
                }
            }
        }
    }

    let mut distinct = label.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(uf.count(), distinct.len());
    for p in 0..n {
        for q in 0..n {
            assert_eq!(uf.connected(p, q).unwrap(), label[p] == label[q]);
        }
    }
}
