use crate::max_flow::{Capacity, FlowNetwork};

/// Intermediate state of an augmenting-path computation.
///
/// `flow` is kept skew-symmetric (`flow[u][v] == -flow[v][u]`) and never exceeds
/// the capacity of any edge. A state passed to a computation must be a
/// `node_count x node_count` matrix of the network it runs on; a mismatched state cancels
/// the computation. A hand-made partial flow must respect the same invariants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowState {
    pub iteration: usize,
    pub value: Capacity,
    pub flow: Vec<Vec<Capacity>>,
}

impl FlowState {
    /// A zero flow over `node_count` nodes.
    pub fn zero(node_count: usize) -> FlowState {
        FlowState {
            iteration: 0,
            value: 0,
            flow: vec![vec![0; node_count]; node_count],
        }
    }

    /// Residual capacity of the edge `from -> to` under the current flow.
    pub fn residual(&self, network: &FlowNetwork, from: usize, to: usize) -> Capacity {
        network.capacity(from, to) - self.flow[from][to]
    }

    /// Push `amount` units along `from -> to`, keeping the matrix skew-symmetric.
    pub(crate) fn push(&mut self, from: usize, to: usize, amount: Capacity) {
        self.flow[from][to] += amount;
        self.flow[to][from] -= amount;
    }
}

impl FlowState {
    /// True if `flow` is a square matrix over the nodes of `network`.
    pub fn fits(&self, network: &FlowNetwork) -> bool {
        let n = network.node_count();
        self.flow.len() == n && self.flow.iter().all(|row| row.len() == n)
    }
}

impl From<&FlowNetwork> for FlowState {
    fn from(value: &FlowNetwork) -> Self {
        FlowState::zero(value.node_count())
    }
}
