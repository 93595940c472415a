use crate::max_flow::{Capacity, FlowNetwork, FlowState};
use std::collections::{BTreeSet, VecDeque};

/// The result of a maximum flow computation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxFlow {
    /// The value of the maximum flow.
    pub value: Capacity,
    /// Net flow along every node pair. The matrix is skew-symmetric, i.e. `flow[u][v]` is
    /// negative whenever flow actually travels from `v` to `u`.
    pub flow: Vec<Vec<Capacity>>,
    /// Number of augmenting paths used to reach the maximum.
    pub augmentations: usize,
}

/// A minimum `source`/`sink` cut derived from a maximum flow.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinCut {
    /// Nodes reachable from the source in the final residual graph.
    pub source_side: BTreeSet<usize>,
    /// Edges of the original network leaving the source side. All of them are saturated.
    pub cut_edges: Vec<(usize, usize)>,
    /// Total capacity of `cut_edges`. Equals the maximum flow value.
    pub capacity: Capacity,
}

impl From<&FlowState> for MaxFlow {
    fn from(value: &FlowState) -> Self {
        MaxFlow {
            value: value.value,
            flow: value.flow.clone(),
            augmentations: value.iteration,
        }
    }
}

impl From<MaxFlow> for (Capacity, Vec<Vec<Capacity>>) {
    fn from(value: MaxFlow) -> Self {
        value.into_parts()
    }
}

impl MaxFlow {
    /// Split the result into the flow value and the (skew-symmetric) flow matrix.
    pub fn into_parts(self) -> (Capacity, Vec<Vec<Capacity>>) {
        (self.value, self.flow)
    }

    /// Number of nodes of the underlying network.
    pub fn node_count(&self) -> usize {
        self.flow.len()
    }

    /// The amount of flow actually travelling along `from -> to` (never negative).
    pub fn edge_flow(&self, from: usize, to: usize) -> Capacity {
        self.flow[from][to].max(0)
    }

    /// Total flow entering `node`.
    pub fn inflow(&self, node: usize) -> Capacity {
        (0..self.node_count()).map(|u| self.edge_flow(u, node)).sum()
    }

    /// Total flow leaving `node`.
    pub fn outflow(&self, node: usize) -> Capacity {
        (0..self.node_count()).map(|v| self.edge_flow(node, v)).sum()
    }

    /// True if the edge `from -> to` exists and carries flow equal to its capacity.
    pub fn is_saturated(&self, network: &FlowNetwork, from: usize, to: usize) -> bool {
        let capacity = network.capacity(from, to);
        capacity > 0 && self.flow[from][to] >= capacity
    }

    /// Compute a minimum cut using the residual graph of this flow: the source side consists
    /// of everything still reachable from the source.
    ///
    /// The `network` must be the one this flow was computed for.
    pub fn min_cut(&self, network: &FlowNetwork) -> MinCut {
        let node_count = network.node_count();
        let mut source_side = BTreeSet::from([network.source()]);
        let mut queue = VecDeque::from([network.source()]);
        while let Some(u) = queue.pop_front() {
            for v in 0..node_count {
                let residual = network.capacity(u, v) - self.flow[u][v];
                if residual > 0 && source_side.insert(v) {
                    queue.push_back(v);
                }
            }
        }

        let cut_edges: Vec<(usize, usize)> = network
            .edges()
            .filter(|(u, v, _)| source_side.contains(u) && !source_side.contains(v))
            .map(|(u, v, _)| (u, v))
            .collect();
        let capacity = cut_edges.iter().map(|(u, v)| network.capacity(*u, *v)).sum();

        MinCut {
            source_side,
            cut_edges,
            capacity,
        }
    }
}
