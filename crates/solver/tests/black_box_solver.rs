//! Black-box tests: problems arrive as JSON (as a calling service would send
//! them) and go through the public solver only.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use supplynet_core::{AlgoError, UNREACHABLE};
use supplynet_observability::{LogFormat, TracingConfig};
use supplynet_solver::{LocalSolver, Problem, Solution, Solver, SolverLimits};

fn setup() -> LocalSolver {
    supplynet_observability::init_with(
        &TracingConfig::default()
            .with_filter("warn")
            .with_format(LogFormat::Pretty),
    );
    LocalSolver::default()
}

fn problem(value: serde_json::Value) -> Problem {
    serde_json::from_value(value).expect("valid problem json")
}

#[test]
fn routes_a_delivery_network() {
    let solver = setup();
    let graph = json!([
        [{"to": 1, "weight": 7}, {"to": 2, "weight": 2}],
        [{"to": 3, "weight": 1}],
        [{"to": 1, "weight": 3}, {"to": 3, "weight": 8}],
        [],
        []
    ]);

    let distances = solver
        .solve(&problem(json!({"kind": "shortest_path", "graph": graph.clone(), "source": 0})))
        .unwrap();
    assert_eq!(
        distances,
        Solution::Distances { distances: vec![0, 5, 2, 6, UNREACHABLE] }
    );

    let route = solver
        .solve(&problem(json!({
            "kind": "heuristic_path", "graph": graph.clone(), "start": 0, "goal": 3,
            "estimates": [4, 1, 3, 0, 0]
        })))
        .unwrap();
    assert_eq!(route, Solution::Path { path: vec![0, 2, 1, 3], cost: Some(6) });

    let Solution::DistanceMatrix { distances } = solver
        .solve(&problem(json!({"kind": "all_pairs_shortest_path", "graph": graph.clone()})))
        .unwrap()
    else {
        panic!("expected a distance matrix");
    };
    assert_eq!(distances.row(0), &[0, 5, 2, 6, UNREACHABLE]);
}

#[test]
fn negative_weights_are_rejected_by_dijkstra_but_not_floyd() {
    let solver = setup();
    let graph = json!([[{"to": 1, "weight": -2}], []]);

    let err = solver
        .solve(&problem(json!({"kind": "shortest_path", "graph": graph.clone(), "source": 0})))
        .unwrap_err();
    assert_eq!(err, AlgoError::InvalidWeight { from: 0, to: 1, weight: -2 });

    assert!(
        solver
            .solve(&problem(json!({"kind": "all_pairs_shortest_path", "graph": graph.clone()})))
            .is_ok()
    );
}

#[test]
fn plans_flow_through_a_diamond_network() {
    let solver = setup();
    let capacity = json!([[0, 3, 2, 0], [0, 0, 0, 2], [0, 0, 0, 3], [0, 0, 0, 0]]);
    let cost = json!([[0, 1, 4, 0], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 0]]);

    let Solution::MaxFlow { flow } = solver
        .solve(&problem(json!({"kind": "max_flow", "capacity": capacity.clone(), "source": 0, "sink": 3})))
        .unwrap()
    else {
        panic!("expected max flow");
    };
    assert_eq!(flow.value, 4);

    let Solution::MinCostFlow { flow } = solver
        .solve(&problem(json!({
            "kind": "min_cost_max_flow", "capacity": capacity.clone(), "cost": cost.clone(), "source": 0, "sink": 3
        })))
        .unwrap()
    else {
        panic!("expected min cost flow");
    };
    assert_eq!(flow.flow, 4);
    assert_eq!(flow.cost, 2 * 2 + 2 * 5);
}

#[test]
fn malformed_matrices_fail_at_the_boundary() {
    let result = serde_json::from_value::<Problem>(json!({
        "kind": "max_flow", "capacity": [[0, 1], [0]], "source": 0, "sink": 1
    }));
    assert!(result.is_err());
}

#[test]
fn loads_cargo_and_schedules_docks() {
    let solver = setup();

    let Solution::Knapsack { selection } = solver
        .solve(&problem(json!({
            "kind": "knapsack", "weights": [10, 20, 30], "values": [60, 100, 120], "capacity": 50
        })))
        .unwrap()
    else {
        panic!("expected knapsack selection");
    };
    assert_eq!(selection.value, 220);
    assert_eq!(selection.items, vec![1, 2]);

    let schedule = solver
        .solve(&problem(json!({
            "kind": "select_activities",
            "activities": [
                {"start": 9, "finish": 12}, {"start": 1, "finish": 3},
                {"start": 2, "finish": 5}, {"start": 3, "finish": 9}
            ]
        })))
        .unwrap();
    let Solution::Schedule { activities } = schedule else {
        panic!("expected schedule");
    };
    assert_eq!(activities.len(), 3);
}

#[test]
fn knapsack_with_unbounded_capacity_takes_every_item() {
    let solver = setup();
    let Solution::Knapsack { selection } = solver
        .solve(&problem(json!({
            "kind": "knapsack",
            "weights": [1, 2],
            "values": [5, 4],
            "capacity": 18446744073709551615u64
        })))
        .unwrap()
    else {
        panic!("expected knapsack selection");
    };
    assert_eq!(selection.value, 9);
    assert_eq!(selection.items, vec![0, 1]);

    let bounded = LocalSolver::new(SolverLimits::default().with_max_capacity(1_000_000));
    let err = bounded
        .solve(&problem(json!({
            "kind": "knapsack", "weights": [1], "values": [5], "capacity": 18446744073709551615u64
        })))
        .unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

#[test]
fn overflowing_flow_networks_are_rejected() {
    let solver = setup();
    let max = i64::MAX;
    let err = solver
        .solve(&problem(json!({
            "kind": "max_flow", "capacity": [[0, max], [max, 0]], "source": 0, "sink": 1
        })))
        .unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

#[test]
fn matches_sequences() {
    let solver = setup();
    assert_eq!(
        solver
            .solve(&problem(json!({"kind": "edit_distance", "a": "kitten", "b": "sitting"})))
            .unwrap(),
        Solution::EditDistance { distance: 3 }
    );
    assert_eq!(
        solver
            .solve(&problem(json!({"kind": "longest_common_subsequence", "a": "abcde", "b": "ace"})))
            .unwrap(),
        Solution::CommonSubsequence { length: 3, witness: "ace".to_string() }
    );
}

#[test]
fn builds_prefix_codes_from_counts() {
    let solver = setup();
    let Solution::PrefixCode { codes } = solver
        .solve(&problem(json!({"kind": "prefix_code", "frequencies": {"a": 5, "b": 2, "c": 1}})))
        .unwrap()
    else {
        panic!("expected prefix code");
    };
    assert_eq!(codes.code(&'a').map(str::len), Some(1));
    assert_eq!(codes.decode_text(&codes.encode_text("abcab").unwrap()).unwrap(), "abcab");

    let err = solver
        .solve(&problem(json!({"kind": "prefix_code", "frequencies": {}})))
        .unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

#[test]
fn solves_placement_and_filling_puzzles() {
    let solver = setup();
    let Solution::Placements { solutions } =
        solver.solve(&problem(json!({"kind": "n_queens", "n": 6}))).unwrap()
    else {
        panic!("expected placements");
    };
    assert_eq!(solutions.len(), 4);

    let Solution::SolvedBoard { board } = solver
        .solve(&problem(json!({
            "kind": "solve_board",
            "board": [[0, 0, 3, 0], [3, 0, 0, 1], [0, 3, 0, 0], [0, 0, 4, 0]]
        })))
        .unwrap()
    else {
        panic!("expected solved board");
    };
    assert!(board.is_solved());

    let err = solver
        .solve(&problem(json!({
            "kind": "solve_board",
            "board": [[1, 2, 3, 0], [0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0]]
        })))
        .unwrap_err();
    assert_eq!(err, AlgoError::Unsolvable);
}

#[test]
fn solutions_serialize_with_kind_tags() {
    let solver = setup();
    let solution = solver.solve(&problem(json!({"kind": "n_queens", "n": 4}))).unwrap();
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["kind"], "placements");
    assert_eq!(value["solutions"], json!([[1, 3, 0, 2], [2, 0, 3, 1]]));
}

#[test]
fn one_solver_serves_many_threads() {
    let solver = Arc::new(LocalSolver::new(SolverLimits::default().with_max_queens(8)));
    let handles: Vec<_> = (4..=8)
        .map(|n| {
            let solver = Arc::clone(&solver);
            thread::spawn(move || match solver.solve(&Problem::NQueens { n }) {
                Ok(Solution::Placements { solutions }) => solutions.len(),
                other => panic!("unexpected result {other:?}"),
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![2, 10, 4, 40, 92]);
}
