use approx::assert_relative_eq;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use undirected_sssp::graph::generators::random_connected_graph;
use undirected_sssp::graph::{Graph, UndirectedGraph};
use undirected_sssp::{compute_shortest_path, Dijkstra, Error, ShortestPathAlgorithm};

type Weight = OrderedFloat<f64>;

fn build(n: usize, edges: &[(usize, usize)], weights: &[f64]) -> UndirectedGraph<Weight> {
    let weights: Vec<Weight> = weights.iter().copied().map(OrderedFloat).collect();
    UndirectedGraph::build(n, edges, &weights).unwrap()
}

// Bellman-Ford style reference: relax every edge in both directions until stable
fn reference_distances(graph: &UndirectedGraph<Weight>, source: usize) -> Vec<Option<f64>> {
    let mut dist = vec![None; graph.vertex_count()];
    dist[source] = Some(0.0);
    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for &(u, v, w) in graph.edges() {
            for (a, b) in [(u, v), (v, u)] {
                if let Some(da) = dist[a] {
                    let candidate = da + w.into_inner();
                    if dist[b].map_or(true, |db| candidate < db) {
                        dist[b] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[test]
fn test_detour_beats_direct_edge() {
    let graph = build(4, &[(0, 1), (1, 2), (0, 2), (2, 3)], &[1.0, 2.0, 4.0, 1.0]);
    let path = Dijkstra::new().shortest_path(&graph, 0, 3).unwrap();

    assert_eq!(path, vec![0, 1, 2, 3]);
    assert_eq!(graph.path_weight(&path), Some(OrderedFloat(4.0)));
    assert_eq!(graph.path_edges(&path), Some(vec![0, 1, 3]));
}

#[test]
fn test_disconnected_target_yields_empty_path() {
    let graph = build(3, &[(0, 1)], &[1.0]);
    let path = Dijkstra::new().shortest_path(&graph, 0, 2).unwrap();
    assert!(path.is_empty());

    let full = Dijkstra::new().with_early_exit(false).compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(full.distance_to(2), None);
    assert_eq!(full.predecessors[2], None);
    assert!(full.path_to(2).is_empty());
    assert_eq!(full.reachable_count(), 2);
}

#[test]
fn test_source_equals_target() {
    let graph = build(2, &[], &[]);
    assert_eq!(Dijkstra::new().shortest_path(&graph, 0, 0).unwrap(), vec![0]);

    // Holds regardless of what the graph looks like
    let graph = build(3, &[(0, 0), (0, 1), (1, 2)], &[0.5, 1.0, 1.0]);
    for v in 0..3 {
        assert_eq!(Dijkstra::new().shortest_path(&graph, v, v).unwrap(), vec![v]);
    }
}

#[test]
fn test_out_of_range_endpoints() {
    let graph = build(0, &[], &[]);
    assert_eq!(
        Dijkstra::new().shortest_path(&graph, 0, 0),
        Err(Error::VertexOutOfRange { vertex: 0, vertex_count: 0 })
    );

    let graph = build(3, &[(0, 1)], &[1.0]);
    assert_eq!(
        Dijkstra::new().shortest_path(&graph, 0, 3),
        Err(Error::VertexOutOfRange { vertex: 3, vertex_count: 3 })
    );
    assert_eq!(
        Dijkstra::new().shortest_path(&graph, 7, 1),
        Err(Error::VertexOutOfRange { vertex: 7, vertex_count: 3 })
    );
    assert!(Dijkstra::new().compute_shortest_paths(&graph, 3).is_err());
}

#[test]
fn test_parallel_edges_lightest_wins() {
    let graph = build(3, &[(0, 1), (0, 1), (1, 2), (0, 1)], &[5.0, 2.0, 1.0, 3.0]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance_to(1), Some(OrderedFloat(2.0)));
    assert_eq!(result.distance_to(2), Some(OrderedFloat(3.0)));

    let path = result.path_to(2);
    assert_eq!(path, vec![0, 1, 2]);
    assert_eq!(graph.path_edges(&path), Some(vec![1, 2]));
}

#[test]
fn test_self_loops_and_zero_weights() {
    let graph = build(3, &[(1, 1), (0, 1), (1, 2), (2, 2)], &[0.0, 0.0, 2.5, 1.0]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance_to(0), Some(OrderedFloat(0.0)));
    assert_eq!(result.distance_to(1), Some(OrderedFloat(0.0)));
    assert_eq!(result.distance_to(2), Some(OrderedFloat(2.5)));
    assert_eq!(result.predecessors[0], None);
    assert_eq!(result.path_to(2), vec![0, 1, 2]);
}

#[test]
fn test_ties_prefer_lower_vertex() {
    // Two equal routes 0-1-3 and 0-2-3
    let graph = build(4, &[(0, 2), (0, 1), (2, 3), (1, 3)], &[1.0, 1.0, 1.0, 1.0]);
    for _ in 0..5 {
        assert_eq!(Dijkstra::new().shortest_path(&graph, 0, 3).unwrap(), vec![0, 1, 3]);
    }
}

#[test]
fn test_flat_entry_point() {
    let path = compute_shortest_path(
        4,
        &[(0, 1), (1, 2), (0, 2), (2, 3)],
        &[1.0, 2.0, 4.0, 1.0],
        0,
        3,
    );
    assert_eq!(path, Ok(vec![0, 1, 2, 3]));

    assert_eq!(compute_shortest_path(3, &[(0, 1)], &[1.0], 0, 2), Ok(vec![]));
    assert_eq!(compute_shortest_path(2, &[], &[], 0, 0), Ok(vec![0]));

    assert_eq!(
        compute_shortest_path(3, &[(0, -1)], &[1.0], 0, 2),
        Err(Error::VertexOutOfRange { vertex: -1, vertex_count: 3 })
    );
    assert_eq!(
        compute_shortest_path(3, &[(0, 1)], &[1.0], -2, 2),
        Err(Error::VertexOutOfRange { vertex: -2, vertex_count: 3 })
    );
    assert_eq!(
        compute_shortest_path(3, &[(0, 1)], &[1.0, 2.0], 0, 2),
        Err(Error::DimensionMismatch { edges: 1, weights: 2 })
    );
    assert_eq!(
        compute_shortest_path(3, &[(0, 1)], &[-1.0], 0, 1),
        Err(Error::NegativeWeight { index: 0, weight: -1.0 })
    );

    // The first faulty edge decides the error, whichever check it fails
    assert_eq!(
        compute_shortest_path(2, &[(0, 1), (0, 9)], &[-1.0, 1.0], 0, 1),
        Err(Error::NegativeWeight { index: 0, weight: -1.0 })
    );
    assert_eq!(
        compute_shortest_path(2, &[(0, 9), (0, 1)], &[1.0, -1.0], 0, 1),
        Err(Error::VertexOutOfRange { vertex: 9, vertex_count: 2 })
    );
}

#[test]
fn test_relaxation_invariant_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    let dijkstra = Dijkstra::new().with_early_exit(false);

    for _ in 0..20 {
        let n = rng.gen_range(2..40);
        let max_pairs = n * (n - 1) / 2;
        let m = rng.gen_range(max_pairs.min(2 * n)..=max_pairs.min(3 * n));
        let graph = random_connected_graph(n, m, 50, &mut rng).unwrap().into_graph().unwrap();
        let source = rng.gen_range(0..n);

        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distance_to(source), Some(OrderedFloat(0.0)));

        for &(u, v, w) in graph.edges() {
            let du = result.distance_to(u).unwrap();
            let dv = result.distance_to(v).unwrap();
            assert!(dv <= du + w, "edge ({}, {}) violates relaxation", u, v);
            assert!(du <= dv + w, "edge ({}, {}) violates relaxation", v, u);
        }

        let reference = reference_distances(&graph, source);
        for v in 0..n {
            assert_relative_eq!(
                result.distance_to(v).unwrap().into_inner(),
                reference[v].unwrap()
            );
        }
    }
}

#[test]
fn test_path_weight_matches_distance() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_connected_graph(30, 60, 100, &mut rng).unwrap().into_graph().unwrap();
    let dijkstra = Dijkstra::new().with_early_exit(false);
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    for target in 0..graph.vertex_count() {
        let path = dijkstra.get_path(&result, target);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&target));

        let edges = graph.path_edges(&path).unwrap();
        assert_eq!(edges.len(), path.len() - 1);

        let weight = graph.path_weight(&path).unwrap();
        assert_relative_eq!(weight.into_inner(), result.distance_to(target).unwrap().into_inner());
    }
}

#[test]
fn test_early_exit_agrees_with_full_search() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_connected_graph(50, 120, 20, &mut rng).unwrap().into_graph().unwrap();
    let early = Dijkstra::new();
    let full = Dijkstra::new().with_early_exit(false);

    for target in 0..graph.vertex_count() {
        assert_eq!(
            early.shortest_path(&graph, 4, target).unwrap(),
            full.shortest_path(&graph, 4, target).unwrap()
        );
    }
}

#[test]
fn test_symmetric_path_weights() {
    let mut rng = StdRng::seed_from_u64(19);
    let graph = random_connected_graph(25, 40, 100, &mut rng).unwrap().into_graph().unwrap();
    let dijkstra = Dijkstra::new();

    for _ in 0..30 {
        let a = rng.gen_range(0..25);
        let b = rng.gen_range(0..25);
        let forward = dijkstra.shortest_path(&graph, a, b).unwrap();
        let backward = dijkstra.shortest_path(&graph, b, a).unwrap();

        assert_relative_eq!(
            graph.path_weight(&forward).unwrap().into_inner(),
            graph.path_weight(&backward).unwrap().into_inner()
        );
    }
}

#[test]
fn test_path_only_uses_existing_edges() {
    let graph = build(
        6,
        &[(0, 1), (1, 2), (2, 5), (0, 3), (3, 4), (4, 5), (1, 4)],
        &[7.0, 9.0, 2.0, 1.0, 1.0, 20.0, 1.0],
    );
    let path = Dijkstra::new().shortest_path(&graph, 0, 5).unwrap();

    assert_eq!(path, vec![0, 3, 4, 1, 2, 5]);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
    }
    assert_eq!(graph.path_weight(&path), Some(OrderedFloat(14.0)));
}
