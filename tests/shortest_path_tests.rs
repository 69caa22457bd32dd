use graph_relax::algorithm::{
    AcyclicPaths, BellmanFord, Dijkstra, DirectedCycle, FloydWarshall, PathObjective, ShortestPathAlgorithm,
    ShortestPathResult,
};
use graph_relax::graph::generators::{generate_grid, generate_random_dag, generate_random_digraph};
use graph_relax::graph::{DirectedEdge, EdgeWeightedDigraph, WeightedDigraph};
use graph_relax::Error;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Weight = OrderedFloat<f64>;

fn digraph(n: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedDigraph<Weight> {
    EdgeWeightedDigraph::from_edges(n, edges.iter().map(|&(v, w, x)| (v, w, OrderedFloat(x))))
        .unwrap()
}

fn close(a: Weight, b: Weight) -> bool {
    a == b || (a.into_inner() - b.into_inner()).abs() < 1e-9
}

// Relax every edge V - 1 times; no queue, no ordering
fn naive_distances(graph: &EdgeWeightedDigraph<Weight>, source: usize) -> Vec<Weight> {
    let n = graph.vertex_count();
    let mut dist = vec![OrderedFloat(f64::INFINITY); n];
    dist[source] = OrderedFloat(0.0);
    for _ in 1..n {
        for e in graph.edges() {
            if dist[e.from()].is_finite() && dist[e.from()] + e.weight() < dist[e.to()] {
                dist[e.to()] = dist[e.from()] + e.weight();
            }
        }
    }
    dist
}

// Every reached vertex is the head of its tree edge, distances telescope
// along the tree, and no edge can still be relaxed
fn assert_shortest_path_tree(graph: &EdgeWeightedDigraph<Weight>, result: &ShortestPathResult<Weight>) {
    let source = result.source();
    assert_eq!(result.dist_to(source).unwrap(), OrderedFloat(0.0));
    assert_eq!(result.edge_to(source).unwrap(), None);

    for v in 0..graph.vertex_count() {
        match result.edge_to(v).unwrap() {
            Some(edge) => {
                assert_eq!(edge.to(), v);
                let expected = result.dist_to(edge.from()).unwrap() + edge.weight();
                assert!(close(result.dist_to(v).unwrap(), expected));
            }
            None if v != source => assert!(!result.has_path_to(v).unwrap()),
            None => {}
        }
    }
    for e in graph.edges() {
        let from = result.dist_to(e.from()).unwrap();
        if from.is_finite() {
            let to = result.dist_to(e.to()).unwrap();
            assert!(to <= from + e.weight() || close(to, from + e.weight()));
        }
    }
}

#[test]
fn test_dijkstra_small_example() {
    let graph = digraph(4, &[(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (2, 3, 1.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected: Vec<Weight> = [0.0, 1.0, 3.0, 4.0].iter().map(|&d| OrderedFloat(d)).collect();
    assert_eq!(result.distances(), expected.as_slice());
    assert_eq!(
        result.path_to(3).unwrap(),
        Some(vec![
            DirectedEdge::new(0, 1, OrderedFloat(1.0)),
            DirectedEdge::new(1, 2, OrderedFloat(2.0)),
            DirectedEdge::new(2, 3, OrderedFloat(1.0)),
        ])
    );
    assert_eq!(result.path_vertices(3).unwrap(), Some(vec![0, 1, 2, 3]));
    assert_eq!(result.path_to(0).unwrap(), Some(Vec::new()));
}

#[test]
fn test_unreached_vertex_has_no_path() {
    let graph = digraph(3, &[(0, 1, 2.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert!(!result.has_path_to(2).unwrap());
    assert_eq!(result.dist_to(2).unwrap(), OrderedFloat(f64::INFINITY));
    assert_eq!(result.path_to(2).unwrap(), None);
    assert!(matches!(result.dist_to(3), Err(Error::InvalidVertex(3))));
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let graph = digraph(3, &[(0, 1, 1.0), (1, 2, -0.5)]);
    match Dijkstra::new().compute_shortest_paths(&graph, 0) {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (1, 2));
            assert_eq!(weight, -0.5);
        }
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = digraph(2, &[(0, 1, 1.0)]);
    assert!(matches!(
        Dijkstra::new().compute_shortest_paths(&graph, 2),
        Err(Error::InvalidVertex(2))
    ));
    assert!(matches!(
        AcyclicPaths::shortest().compute_shortest_paths(&graph, 5),
        Err(Error::InvalidVertex(5))
    ));
    assert!(matches!(BellmanFord::new().run(&graph, 9), Err(Error::InvalidVertex(9))));
}

#[test]
fn test_dijkstra_matches_naive_relaxation() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..30 {
        let graph = generate_random_digraph(&mut rng, 12, 40, 0.0..10.0).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let expected = naive_distances(&graph, 0);
        for v in 0..graph.vertex_count() {
            assert!(close(result.dist_to(v).unwrap(), expected[v]), "vertex {}", v);
        }
        assert_shortest_path_tree(&graph, &result);
    }
}

#[test]
fn test_dijkstra_matches_floyd_warshall_from_every_source() {
    let mut rng = StdRng::seed_from_u64(22);
    let graph = generate_random_digraph(&mut rng, 15, 60, 1.0..20.0).unwrap();
    let all_pairs = FloydWarshall::new(&graph);
    assert!(!all_pairs.has_negative_cycle());

    for s in 0..graph.vertex_count() {
        let result = Dijkstra::new().compute_shortest_paths(&graph, s).unwrap();
        for v in 0..graph.vertex_count() {
            assert!(close(result.dist_to(v).unwrap(), all_pairs.dist(s, v).unwrap()));
            assert_eq!(result.has_path_to(v).unwrap(), all_pairs.has_path(s, v).unwrap());
        }
    }
}

#[test]
fn test_grid_distances_are_manhattan() {
    let graph = generate_grid(8, 5).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    for y in 0..5 {
        for x in 0..8 {
            let v = y * 8 + x;
            assert_eq!(result.dist_to(v).unwrap(), OrderedFloat((x + y) as f64));
            assert_eq!(result.path_to(v).unwrap().unwrap().len(), x + y);
        }
    }
}

#[test]
fn test_acyclic_shortest_and_longest() {
    // 0 -> 1 -> 3 is short, 0 -> 2 -> 3 is long
    let graph = digraph(
        5,
        &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 5.0), (2, 3, 5.0), (3, 4, -2.0), (1, 2, -1.0)],
    );

    let shortest = AcyclicPaths::shortest().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(shortest.objective(), PathObjective::Shortest);
    assert_eq!(shortest.dist_to(3).unwrap(), OrderedFloat(2.0));
    assert_eq!(shortest.dist_to(2).unwrap(), OrderedFloat(0.0));
    assert_eq!(shortest.dist_to(4).unwrap(), OrderedFloat(0.0));

    let longest = AcyclicPaths::longest().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(longest.objective(), PathObjective::Longest);
    assert_eq!(longest.dist_to(3).unwrap(), OrderedFloat(10.0));
    assert_eq!(longest.dist_to(4).unwrap(), OrderedFloat(8.0));
    assert_eq!(longest.path_vertices(4).unwrap(), Some(vec![0, 2, 3, 4]));
}

#[test]
fn test_acyclic_longest_unreached_is_negative_infinity() {
    let graph = digraph(3, &[(1, 2, 4.0)]);
    let longest = AcyclicPaths::longest().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(longest.dist_to(1).unwrap(), OrderedFloat(f64::NEG_INFINITY));
    assert!(!longest.has_path_to(2).unwrap());
    assert_eq!(longest.path_to(2).unwrap(), None);
}

#[test]
fn test_acyclic_rejects_cycle() {
    let graph = digraph(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    assert!(matches!(
        AcyclicPaths::shortest().compute_shortest_paths(&graph, 0),
        Err(Error::NotAcyclic(_))
    ));
}

#[test]
fn test_acyclic_matches_naive_with_negative_weights() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..30 {
        let graph = generate_random_dag(&mut rng, 15, 50, -10.0..10.0).unwrap();
        let result = AcyclicPaths::shortest().compute_shortest_paths(&graph, 0).unwrap();
        let expected = naive_distances(&graph, 0);
        for v in 0..graph.vertex_count() {
            assert!(close(result.dist_to(v).unwrap(), expected[v]), "vertex {}", v);
        }
        assert_shortest_path_tree(&graph, &result);
    }
}

#[test]
fn test_algorithm_names() {
    let dijkstra: &dyn ShortestPathAlgorithm<Weight, EdgeWeightedDigraph<Weight>> = &Dijkstra::new();
    let longest: &dyn ShortestPathAlgorithm<Weight, EdgeWeightedDigraph<Weight>> =
        &AcyclicPaths::longest();
    assert_eq!(dijkstra.name(), "Dijkstra");
    assert_eq!(longest.name(), "AcyclicLongestPaths");
}

// Digraph that only supplies the required trait methods and relies on the
// default `edges`
#[derive(Debug)]
struct Ring {
    vertices: usize,
}

impl WeightedDigraph<Weight> for Ring {
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn edge_count(&self) -> usize {
        self.vertices
    }

    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<Weight>> + '_> {
        let next = (vertex + 1) % self.vertices;
        Box::new(std::iter::once(DirectedEdge::new(vertex, next, OrderedFloat(2.0))))
    }
}

#[test]
fn test_custom_digraph_uses_default_edges() {
    let ring = Ring { vertices: 5 };
    let edges: Vec<(usize, usize)> = ring.edges().map(|e| (e.from(), e.to())).collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);

    let result = Dijkstra::new().compute_shortest_paths(&ring, 3).unwrap();
    assert_eq!(result.dist_to(2).unwrap(), OrderedFloat(8.0));

    let finder = DirectedCycle::new(&ring);
    assert!(finder.has_cycle());
    assert_eq!(finder.cycle().unwrap().len(), 6);
}
