//! Maximum flow over a capacity-matrix network.
//!
//! The flow is computed by repeatedly finding an augmenting path in the residual graph
//! (edge `u -> v` is usable while `capacity[u][v] - flow[u][v] > 0`) and pushing the
//! bottleneck residual capacity along it. Every augmentation is one step of a
//! [`Computation`], so a long-running solve can be cancelled, inspected, or resumed.
//!
//! # Algorithm Variants
//!
//! - [`EdmondsKarp`] (default): BFS path search, i.e. always the shortest augmenting path.
//!   The number of augmentations is bounded by `O(V * E)`.
//! - [`FordFulkerson`]: DFS path search. Reaches the same maximum, but the number of
//!   augmentations is only bounded by the flow value.
//!
//! Once a [`MaxFlow`] is known, [`MaxFlow::min_cut`] extracts a minimum cut and
//! [`FlowAttribution`] splits the flow of a three-tier network among its origins.
//!
//! # Example
//!
//! ```
//! use algo_flow_trie::max_flow::{EdmondsKarp, FlowNetwork};
//! use computation_process::Algorithm;
//!
//! //   0 -> 1 (3), 0 -> 2 (2), 1 -> 3 (2), 2 -> 3 (3), 1 -> 2 (1)
//! let network =
//!     FlowNetwork::from_edges(4, 0, 3, &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)])
//!         .unwrap();
//! let result = EdmondsKarp::run(&network, &network).unwrap();
//! assert_eq!(result.value, 5);
//! ```

use crate::error::FlowError;
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};

#[cfg(test)]
mod tests;

mod attribution;
mod flow_network;
mod flow_state;
mod iterative_augmentation;
mod solution;
mod step_operators;

pub use attribution::FlowAttribution;
pub use flow_network::FlowNetwork;
pub use flow_state::FlowState;
pub use iterative_augmentation::IterativeAugmentation;
pub use solution::{MaxFlow, MinCut};
pub use step_operators::{BfsAugmentingPath, DfsAugmentingPath};

/// Integer type used for capacities and flow values.
pub type Capacity = i64;

/// A helper alias which allows us to use [`FlowComputation`] as shorthand for
/// `Computation<Context = FlowNetwork, State = FlowState, Output = MaxFlow>`.
pub type FlowComputation<STEP> = Computation<FlowNetwork, FlowState, MaxFlow, STEP>;

/// A helper trait which allows us to use [`FlowAlgorithm`] as shorthand for
/// `Algorithm<Context = FlowNetwork, State = FlowState, Output = MaxFlow>`.
pub trait FlowAlgorithm: Algorithm<FlowNetwork, FlowState, MaxFlow> + 'static {}
impl<T: Algorithm<FlowNetwork, FlowState, MaxFlow> + 'static> FlowAlgorithm for T {}

/// The Edmonds–Karp algorithm: augmenting paths are found by BFS, so every path is a shortest
/// one in the residual graph.
pub type EdmondsKarp = FlowComputation<IterativeAugmentation<BfsAugmentingPath>>;

/// The Ford–Fulkerson method with DFS path search. Mostly useful as a cross-check
/// of [`EdmondsKarp`].
pub type FordFulkerson = FlowComputation<IterativeAugmentation<DfsAugmentingPath>>;

/// Finds a single augmenting path for [`IterativeAugmentation`].
///
/// Implementors return the nodes of a `source -> sink` path (source first) whose every edge
/// has positive residual capacity under `state`, or `None` if the sink is unreachable.
pub trait AugmentingPathSearch {
    fn find(network: &FlowNetwork, state: &FlowState) -> Cancellable<Option<Vec<usize>>>;
}

/// Compute the maximum flow from `source` to `sink` in the network given by a square
/// `capacity` matrix, using [`EdmondsKarp`].
///
/// The input is validated first, see [`FlowNetwork::new`].
pub fn solve(
    capacity: Vec<Vec<Capacity>>,
    source: usize,
    sink: usize,
) -> Result<MaxFlow, FlowError> {
    let network = FlowNetwork::new(capacity, source, sink)?;
    Ok(EdmondsKarp::run(&network, &network)?)
}
