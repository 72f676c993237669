//! Tour strategies on seeded random Euclidean instances and fixed scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use roadtrip_graph::approx::{christofides_route, ApproxRouter, ChristofidesConfig, Linearization};
use roadtrip_graph::constructive::nearest_neighbor_route;
use roadtrip_graph::distance::{complete_graph, Point};
use roadtrip_graph::evaluation::RouteEvaluator;
use roadtrip_graph::exact::brute_force_route;
use roadtrip_graph::graph::WeightedGraph;
use roadtrip_graph::shortest_path::shortest_route;
use roadtrip_graph::tour::{compare_strategies, Strategy};
use roadtrip_graph::GraphError;

const EPS: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_instance(seed: u64, n: usize) -> WeightedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    complete_graph((0..n).map(|i| {
        let p = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        (i, p)
    }))
}

#[test]
fn random_instances_respect_bounds() {
    init_tracing();
    for seed in 0..24u64 {
        let n = 2 + (seed as usize % 6);
        let g = random_instance(seed, n);
        let eval = RouteEvaluator::new(&g);
        let lower = eval.lower_bound();

        let exact = brute_force_route(&g, &0).unwrap();
        assert!(eval.validate_tour(&exact).is_empty(), "seed {seed}");
        assert!(exact.cost() >= lower - EPS, "seed {seed}");

        let greedy = nearest_neighbor_route(&g, &0).unwrap();
        assert!(eval.validate_tour(&greedy).is_empty(), "seed {seed}");
        assert!(greedy.cost() >= exact.cost() - EPS, "seed {seed}");

        let approx = christofides_route(&g, &0, &ChristofidesConfig::default()).unwrap();
        assert!(eval.validate_tour(&approx).is_empty(), "seed {seed}");
        assert!(approx.cost() >= exact.cost() - EPS, "seed {seed}");
        assert!(approx.cost() <= 1.5 * exact.cost() + EPS, "seed {seed}");
        assert!(approx.cost() <= 2.0 * lower + EPS, "seed {seed}");

        let config =
            ChristofidesConfig::default().with_linearization(Linearization::GreedyBacktrack);
        let walked = christofides_route(&g, &0, &config).unwrap();
        assert!(eval.validate_tour(&walked).is_empty(), "seed {seed}");
        assert!(walked.cost() >= exact.cost() - EPS, "seed {seed}");
    }
}

#[test]
fn matching_pruning_does_not_change_tours() {
    for seed in 100..110u64 {
        let g = random_instance(seed, 7);
        let pruned = christofides_route(&g, &3, &ChristofidesConfig::default()).unwrap();
        let full = christofides_route(
            &g,
            &3,
            &ChristofidesConfig::default().with_matching_pruning(false),
        )
        .unwrap();
        assert!((pruned.cost() - full.cost()).abs() < EPS, "seed {seed}");
    }
}

#[test]
fn router_agrees_with_one_shot_calls() {
    let g = random_instance(7, 6);
    let mut router = ApproxRouter::new(g.clone());
    for start in 0..6 {
        let cached = router.christofides_route(&start).unwrap();
        let fresh = christofides_route(&g, &start, &ChristofidesConfig::default()).unwrap();
        assert_eq!(cached, fresh);
    }
    assert!(router.is_cached());
}

#[test]
fn unit_square_scenario() {
    let g = complete_graph([
        ('A', Point::new(0.0, 0.0)),
        ('B', Point::new(1.0, 0.0)),
        ('C', Point::new(1.0, 1.0)),
        ('D', Point::new(0.0, 1.0)),
    ]);
    for (strategy, outcome) in compare_strategies(&g, &'A', &Strategy::ALL) {
        let route = outcome.unwrap();
        assert!((route.cost() - 4.0).abs() < 1e-10, "{strategy}");
        assert_eq!(route.num_stops(), 4, "{strategy}");
        assert_eq!(route.start(), Some(&'A'), "{strategy}");
    }

    let path = shortest_route(&g, &'A', &'C').unwrap();
    assert_eq!(path.vertices(), &['A', 'C']);
    assert!((path.cost() - 2f64.sqrt()).abs() < 1e-10);
}

#[test]
fn disconnected_scenario() {
    let g = WeightedGraph::from_edges([("a", "b", 1.0), ("c", "d", 1.0)]);
    assert!(matches!(
        shortest_route(&g, &"a", &"d"),
        Err(GraphError::Unreachable { .. })
    ));
    assert!(matches!(
        nearest_neighbor_route(&g, &"a"),
        Err(GraphError::NoFeasibleExtension(_))
    ));
    assert!(matches!(
        christofides_route(&g, &"a", &ChristofidesConfig::default()),
        Err(GraphError::Unreachable { .. })
    ));
    assert!(matches!(
        brute_force_route(&g, &"a"),
        Err(GraphError::MissingEdge { .. })
    ));
}
