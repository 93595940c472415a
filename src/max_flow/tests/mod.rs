//! Tests for max-flow computation, minimum cuts, and flow attribution.
//!
//! See `logistics_network.rs` for the structure of the shared three-tier test network.


use crate::error::{FlowError, InvalidGraph};
use crate::max_flow::{
    Capacity, EdmondsKarp, FlowAlgorithm, FlowAttribution, FlowNetwork, FlowState, FordFulkerson,
    MaxFlow, solve,
};
use crate::test_utils::logistics_network::*;
use crate::test_utils::{assert_valid_flow, init_logger};
use cancel_this::Cancellable;
use computation_process::Algorithm;
use std::collections::BTreeSet;

fn diamond() -> FlowNetwork {
    FlowNetwork::from_edges(4, 0, 3, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)])
        .unwrap()
}

/// Run `ALG` on `network` and check that the result is a valid flow.
fn run_and_verify<ALG: FlowAlgorithm>(network: &FlowNetwork) -> Cancellable<MaxFlow> {
    let result = ALG::run(network, network)?;
    assert_valid_flow(network, &result);
    Ok(result)
}

// ========== Solver contract ==========

#[test]
fn test_solve_layered_hubs() {
    init_logger();
    // Two hubs fed by 1000-capacity edges, hub -> sink capacities summing to 200.
    let mut capacity = vec![vec![0; 8]; 8];
    capacity[0][1] = 1000;
    capacity[0][2] = 1000;
    for (hub, sink, c) in [(1, 3, 60), (1, 4, 40), (2, 4, 30), (2, 5, 50), (2, 6, 20)] {
        capacity[hub][sink] = c;
    }
    for sink in 3..7 {
        capacity[sink][7] = 1000;
    }

    let network = FlowNetwork::new(capacity.clone(), 0, 7).unwrap();
    let result = solve(capacity, 0, 7).unwrap();

    assert_eq!(network.capacities()[0][1], 1000);
    assert_eq!(result.value, 200);
    assert_valid_flow(&network, &result);
    assert_eq!(result.outflow(1), 100);
    assert_eq!(result.outflow(2), 100);
}

#[test]
fn test_solve_returns_value_and_flow_matrix() {
    init_logger();
    let capacity = vec![vec![0, 4, 0], vec![0, 0, 3], vec![0, 0, 0]];

    let (value, flow) = solve(capacity, 0, 2).unwrap().into_parts();

    assert_eq!(value, 3);
    assert_eq!(flow, vec![vec![0, 3, 0], vec![-3, 0, 3], vec![0, -3, 0]]);
}

#[test]
fn test_unreachable_sink_has_zero_flow() -> Cancellable<()> {
    init_logger();
    let network = FlowNetwork::from_edges(4, 0, 3, &[(0, 1, 5), (2, 3, 5)]).unwrap();

    let result = EdmondsKarp::run(&network, &network)?;

    assert_eq!(result.value, 0);
    assert_eq!(result.augmentations, 0);
    assert_eq!(result.flow, FlowState::zero(4).flow);
    Ok(())
}

#[test]
fn test_ford_fulkerson_agrees_with_edmonds_karp() -> Cancellable<()> {
    init_logger();
    let network = create_logistics_network();

    let edmonds_karp = run_and_verify::<EdmondsKarp>(&network)?;
    let ford_fulkerson = run_and_verify::<FordFulkerson>(&network)?;

    assert_eq!(edmonds_karp.value, 115);
    assert_eq!(ford_fulkerson.value, 115);
    Ok(())
}

#[test]
fn test_edmonds_karp_augmentation_bound() -> Cancellable<()> {
    init_logger();
    for network in [diamond(), create_logistics_network()] {
        let result = run_and_verify::<EdmondsKarp>(&network)?;
        assert!(result.augmentations > 0);
        let bound = network.node_count() * network.edge_count();
        assert!(
            result.augmentations <= bound,
            "{} augmentations exceed the V*E bound {}",
            result.augmentations,
            bound
        );
    }
    Ok(())
}

// ========== Iteration limit ==========

#[test]
fn test_max_iterations_cancels_computation() {
    init_logger();
    let mut network = diamond();
    network.max_iterations = 1;

    let result = EdmondsKarp::run(&network, &network);

    assert!(result.is_err(), "Diamond needs more than one augmentation");
}

#[test]
fn test_max_iterations_equal_to_augmentations_completes() -> Cancellable<()> {
    init_logger();
    let mut network = diamond();
    let unlimited = EdmondsKarp::run(&network, &network)?;

    network.max_iterations = unlimited.augmentations;
    let limited = EdmondsKarp::run(&network, &network)?;

    assert_eq!(limited, unlimited);
    Ok(())
}

// ========== Validation ==========

#[test]
fn test_empty_network_is_rejected() {
    assert_eq!(FlowNetwork::new(vec![], 0, 0), Err(InvalidGraph::Empty));
}

#[test]
fn test_non_square_network_is_rejected() {
    let capacity = vec![vec![0, 1], vec![0, 0, 0]];
    assert_eq!(
        FlowNetwork::new(capacity, 0, 1),
        Err(InvalidGraph::NotSquare {
            row: 1,
            len: 3,
            expected: 2
        })
    );
}

#[test]
fn test_negative_capacity_is_rejected() {
    let capacity = vec![vec![0, 1], vec![-2, 0]];
    assert_eq!(
        FlowNetwork::new(capacity, 0, 1),
        Err(InvalidGraph::NegativeCapacity {
            from: 1,
            to: 0,
            capacity: -2
        })
    );
}

#[test]
fn test_invalid_endpoints_are_rejected() {
    let capacity = vec![vec![0, 1], vec![0, 0]];
    assert_eq!(
        FlowNetwork::new(capacity.clone(), 1, 1),
        Err(InvalidGraph::SourceIsSink(1))
    );
    assert_eq!(
        FlowNetwork::new(capacity, 0, 2),
        Err(InvalidGraph::NodeOutOfRange {
            node: 2,
            node_count: 2
        })
    );
    assert_eq!(
        FlowNetwork::from_edges(3, 0, 2, &[(0, 5, 1)]),
        Err(InvalidGraph::NodeOutOfRange {
            node: 5,
            node_count: 3
        })
    );
}

#[test]
fn test_solve_reports_invalid_graph() {
    let result = solve(vec![vec![0, 1], vec![0, 0]], 0, 0);
    assert!(matches!(
        result,
        Err(FlowError::InvalidGraph(InvalidGraph::SourceIsSink(0)))
    ));
}

#[test]
fn test_capacity_overflow_is_rejected() {
    let m = Capacity::MAX;
    let capacity = vec![
        vec![0, m, m, 0],
        vec![0, 0, 0, m],
        vec![0, 0, 0, m],
        vec![0, 0, 0, 0],
    ];
    assert!(matches!(
        solve(capacity, 0, 3),
        Err(FlowError::InvalidGraph(InvalidGraph::SourceCapacityOverflow { source: 0 }))
    ));

    assert_eq!(
        FlowNetwork::from_edges(3, 0, 2, &[(0, 1, m), (1, 0, m), (1, 2, 5)]),
        Err(InvalidGraph::PairCapacityOverflow { from: 0, to: 1 })
    );
}

#[test]
fn test_maximal_capacity_is_supported() -> Cancellable<()> {
    init_logger();
    let m = Capacity::MAX;
    let network = FlowNetwork::from_edges(3, 0, 2, &[(0, 1, m), (1, 2, m)]).unwrap();

    let result = EdmondsKarp::run(&network, &network)?;

    assert_eq!(result.value, m);
    assert_valid_flow(&network, &result);
    let cut = result.min_cut(&network);
    assert_eq!(cut.capacity, m);
    assert_eq!(cut.source_side, BTreeSet::from([0]));
    assert_eq!(cut.cut_edges, vec![(0, 1)]);
    Ok(())
}

// ========== Minimum cut ==========

#[test]
fn test_logistics_min_cut_is_terminal_layer() -> Cancellable<()> {
    init_logger();
    let network = create_logistics_network();
    let result = EdmondsKarp::run(&network, &network)?;

    assert_eq!(result.value, 115);

    let cut = result.min_cut(&network);
    let cut_edges: BTreeSet<(usize, usize)> = cut.cut_edges.iter().copied().collect();
    let terminal_edges: BTreeSet<(usize, usize)> =
        TERMINAL_EDGES.iter().map(|(u, v, _)| (*u, *v)).collect();

    assert_eq!(cut.capacity, result.value);
    assert_eq!(cut_edges, terminal_edges);
    assert_eq!(
        cut.source_side,
        BTreeSet::from([SOURCE, TERMINAL_1, TERMINAL_2])
    );
    for (u, v) in cut_edges {
        assert!(result.is_saturated(&network, u, v));
    }
    Ok(())
}

#[test]
fn test_node_flow_totals() -> Cancellable<()> {
    init_logger();
    let network = create_logistics_network();
    let result = EdmondsKarp::run(&network, &network)?;

    assert_eq!(result.outflow(SOURCE), 115);
    assert_eq!(result.inflow(SINK), 115);
    assert_eq!(result.outflow(TERMINAL_1), 60);
    assert_eq!(result.outflow(TERMINAL_2), 55);
    for warehouse in WAREHOUSES {
        assert_eq!(result.inflow(warehouse), result.outflow(warehouse));
    }
    let shop_total: i64 = shops().into_iter().map(|s| result.edge_flow(s, SINK)).sum();
    assert_eq!(shop_total, 115);
    Ok(())
}

// ========== Attribution ==========

#[test]
fn test_attribution_of_logistics_network() -> Cancellable<()> {
    init_logger();
    let network = create_logistics_network();
    let result = EdmondsKarp::run(&network, &network)?;
    let shops = shops();

    let attribution = FlowAttribution::compute(&result, &TERMINALS, &WAREHOUSES, &shops).unwrap();

    // Warehouses 1 and 4 are each supplied by a single terminal.
    assert_eq!(attribution.share(TERMINAL_1, WAREHOUSE_1), Some(1.0));
    assert_eq!(attribution.share(TERMINAL_2, WAREHOUSE_1), Some(0.0));
    assert_eq!(attribution.share(TERMINAL_2, WAREHOUSE_4), Some(1.0));

    // Shares of every warehouse that received flow sum to one.
    for warehouse in WAREHOUSES {
        let total: f64 = TERMINALS
            .iter()
            .map(|t| attribution.share(*t, warehouse).unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    // Attributed flows of each shop add up to what the shop actually received.
    for shop in &shops {
        let attributed: f64 = TERMINALS
            .iter()
            .map(|t| attribution.attributed(*t, *shop).unwrap())
            .sum();
        assert!((attributed - result.inflow(*shop) as f64).abs() < 1e-9);
    }

    let total_1 = attribution.origin_total(TERMINAL_1).unwrap();
    let total_2 = attribution.origin_total(TERMINAL_2).unwrap();
    assert!((total_1 - 60.0).abs() < 1e-9);
    assert!((total_2 - 55.0).abs() < 1e-9);

    // Shops behind warehouse 4 are served exclusively by terminal 2.
    assert_eq!(
        attribution.rounded(TERMINAL_2, shop(13)),
        Some(result.inflow(shop(13)))
    );
    assert_eq!(attribution.rounded(TERMINAL_1, shop(13)), Some(0));
    Ok(())
}

#[test]
fn test_attribution_with_idle_hub() -> Cancellable<()> {
    init_logger();
    // Hub 3 has an outgoing edge but nothing can reach it.
    let network =
        FlowNetwork::from_edges(6, 0, 5, &[(0, 1, 4), (1, 2, 4), (3, 4, 9), (2, 5, 4), (4, 5, 9)])
            .unwrap();
    let result = EdmondsKarp::run(&network, &network)?;

    let attribution = FlowAttribution::compute(&result, &[1], &[2, 3], &[5]).unwrap();

    assert_eq!(attribution.share(1, 2), Some(1.0));
    assert_eq!(attribution.share(1, 3), Some(0.0));
    assert_eq!(attribution.attributed(1, 5), Some(4.0));
    assert_eq!(attribution.share(2, 3), None);
    Ok(())
}

#[test]
fn test_attribution_rejects_unknown_nodes() -> Cancellable<()> {
    let network = diamond();
    let result = EdmondsKarp::run(&network, &network)?;

    assert_eq!(
        FlowAttribution::compute(&result, &[1], &[2], &[7]),
        Err(InvalidGraph::NodeOutOfRange {
            node: 7,
            node_count: 4
        })
    );
    Ok(())
}
