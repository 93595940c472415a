//! A three-tier logistics network used across max-flow tests.
//!
//! ```text
//!              TERMINAL_1 ──► WAREHOUSE_1 ──► SHOP_1..SHOP_3  ─┐
//!   SOURCE ──►     │    └───► WAREHOUSE_2 ──► SHOP_4..SHOP_6   ├──► SINK
//!   (1000 each)    └────────► WAREHOUSE_3 ──► SHOP_7..SHOP_9   │
//!              TERMINAL_2 ──► WAREHOUSE_2/3/4                  │
//!                             WAREHOUSE_4 ──► SHOP_10..SHOP_14 ─┘
//! ```
//!
//! Terminal -> warehouse capacities sum to 115 and are the bottleneck (warehouse -> shop
//! capacities sum to 200, shop -> sink edges are effectively unbounded). Hence:
//!  - the max flow is 115,
//!  - the minimum cut is exactly the set of terminal -> warehouse edges,
//!  - both terminals are saturated: terminal 1 ships 60 units, terminal 2 ships 55.

use crate::max_flow::{Capacity, FlowNetwork};

pub const UNBOUNDED: Capacity = 1000;

pub const SOURCE: usize = 0;
pub const TERMINAL_1: usize = 1;
pub const TERMINAL_2: usize = 2;
pub const WAREHOUSE_1: usize = 3;
pub const WAREHOUSE_2: usize = 4;
pub const WAREHOUSE_3: usize = 5;
pub const WAREHOUSE_4: usize = 6;
/// Shop `i` (1-based) has index `SHOP_OFFSET + i - 1`.
pub const SHOP_OFFSET: usize = 7;
pub const SHOP_COUNT: usize = 14;
pub const SINK: usize = SHOP_OFFSET + SHOP_COUNT;
pub const NODE_COUNT: usize = SINK + 1;

pub const TERMINALS: [usize; 2] = [TERMINAL_1, TERMINAL_2];
pub const WAREHOUSES: [usize; 4] = [WAREHOUSE_1, WAREHOUSE_2, WAREHOUSE_3, WAREHOUSE_4];

pub const fn shop(i: usize) -> usize {
    SHOP_OFFSET + i - 1
}

pub fn shops() -> Vec<usize> {
    (1..=SHOP_COUNT).map(shop).collect()
}

/// Terminal -> warehouse edges.
pub const TERMINAL_EDGES: [(usize, usize, Capacity); 6] = [
    (TERMINAL_1, WAREHOUSE_1, 25),
    (TERMINAL_1, WAREHOUSE_2, 20),
    (TERMINAL_1, WAREHOUSE_3, 15),
    (TERMINAL_2, WAREHOUSE_3, 15),
    (TERMINAL_2, WAREHOUSE_4, 30),
    (TERMINAL_2, WAREHOUSE_2, 10),
];

/// Warehouse -> shop edges.
pub const WAREHOUSE_EDGES: [(usize, usize, Capacity); 14] = [
    (WAREHOUSE_1, shop(1), 15),
    (WAREHOUSE_1, shop(2), 10),
    (WAREHOUSE_1, shop(3), 20),
    (WAREHOUSE_2, shop(4), 15),
    (WAREHOUSE_2, shop(5), 10),
    (WAREHOUSE_2, shop(6), 25),
    (WAREHOUSE_3, shop(7), 20),
    (WAREHOUSE_3, shop(8), 15),
    (WAREHOUSE_3, shop(9), 10),
    (WAREHOUSE_4, shop(10), 20),
    (WAREHOUSE_4, shop(11), 10),
    (WAREHOUSE_4, shop(12), 15),
    (WAREHOUSE_4, shop(13), 5),
    (WAREHOUSE_4, shop(14), 10),
];

pub fn create_logistics_network() -> FlowNetwork {
    let mut edges = vec![
        (SOURCE, TERMINAL_1, UNBOUNDED),
        (SOURCE, TERMINAL_2, UNBOUNDED),
    ];
    edges.extend(TERMINAL_EDGES);
    edges.extend(WAREHOUSE_EDGES);
    edges.extend(shops().into_iter().map(|s| (s, SINK, UNBOUNDED)));

    FlowNetwork::from_edges(NODE_COUNT, SOURCE, SINK, &edges)
        .unwrap_or_else(|e| panic!("Invalid logistics network: {}", e))
}
