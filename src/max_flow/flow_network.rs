use crate::error::InvalidGraph;
use crate::max_flow::Capacity;

/// A validated capacity graph together with its source and sink. This is the configuration
/// object ("context") of every max-flow computation.
///
/// Nodes are indexed `0..node_count`. `capacity(u, v)` is the capacity of the directed
/// edge `u -> v`, where zero means there is no edge. Self-loops are tolerated, but they never
/// carry flow.
///
/// Deserialization goes through [`FlowNetwork::new`], so a deserialized network is always valid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedFlowNetwork")
)]
pub struct FlowNetwork {
    capacity: Vec<Vec<Capacity>>,
    source: usize,
    sink: usize,
    /// Cancel the procedure if it exceeds the specified number of augmentations (default:
    /// `usize::MAX`).
    pub max_iterations: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedFlowNetwork {
    capacity: Vec<Vec<Capacity>>,
    source: usize,
    sink: usize,
    max_iterations: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedFlowNetwork> for FlowNetwork {
    type Error = InvalidGraph;

    fn try_from(value: UncheckedFlowNetwork) -> Result<Self, Self::Error> {
        let mut network = FlowNetwork::new(value.capacity, value.source, value.sink)?;
        network.max_iterations = value.max_iterations;
        Ok(network)
    }
}

impl From<&FlowNetwork> for FlowNetwork {
    fn from(value: &FlowNetwork) -> Self {
        value.clone()
    }
}

impl FlowNetwork {
    /// Create a new [`FlowNetwork`] from a square capacity matrix.
    ///
    /// The matrix must be non-empty and square, all capacities must be non-negative,
    /// and `source` and `sink` must be two distinct nodes of the network. The total capacity
    /// leaving `source`, as well as `capacity[u][v] + capacity[v][u]` for every node pair,
    /// must not exceed [`Capacity::MAX`].
    pub fn new(
        capacity: Vec<Vec<Capacity>>,
        source: usize,
        sink: usize,
    ) -> Result<FlowNetwork, InvalidGraph> {
        let node_count = capacity.len();
        if node_count == 0 {
            return Err(InvalidGraph::Empty);
        }

        for (row, values) in capacity.iter().enumerate() {
            if values.len() != node_count {
                return Err(InvalidGraph::NotSquare {
                    row,
                    len: values.len(),
                    expected: node_count,
                });
            }
            if let Some((to, c)) = values.iter().enumerate().find(|(_, c)| **c < 0) {
                return Err(InvalidGraph::NegativeCapacity {
                    from: row,
                    to,
                    capacity: *c,
                });
            }
        }

        check_node(source, node_count)?;
        check_node(sink, node_count)?;
        if source == sink {
            return Err(InvalidGraph::SourceIsSink(source));
        }

        // Flow values are bounded by the source out-capacity, residuals by the sum of the
        // capacities in both directions. Both must fit into `Capacity`.
        capacity[source]
            .iter()
            .try_fold(0, |total: Capacity, c| total.checked_add(*c))
            .ok_or(InvalidGraph::SourceCapacityOverflow { source })?;
        for from in 0..node_count {
            for to in from + 1..node_count {
                if capacity[from][to].checked_add(capacity[to][from]).is_none() {
                    return Err(InvalidGraph::PairCapacityOverflow { from, to });
                }
            }
        }

        Ok(FlowNetwork {
            capacity,
            source,
            sink,
            max_iterations: usize::MAX,
        })
    }

    /// Build a [`FlowNetwork`] with `node_count` nodes from a list of `(from, to, capacity)`
    /// edges. When an edge appears repeatedly, the last capacity wins.
    pub fn from_edges(
        node_count: usize,
        source: usize,
        sink: usize,
        edges: &[(usize, usize, Capacity)],
    ) -> Result<FlowNetwork, InvalidGraph> {
        let mut capacity = vec![vec![0; node_count]; node_count];
        for &(from, to, c) in edges {
            check_node(from, node_count)?;
            check_node(to, node_count)?;
            capacity[from][to] = c;
        }
        FlowNetwork::new(capacity, source, sink)
    }

    pub fn node_count(&self) -> usize {
        self.capacity.len()
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Capacity of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of range.
    pub fn capacity(&self, from: usize, to: usize) -> Capacity {
        self.capacity[from][to]
    }

    /// The full capacity matrix.
    pub fn capacities(&self) -> &[Vec<Capacity>] {
        &self.capacity
    }

    /// Iterate over all edges with positive capacity as `(from, to, capacity)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Capacity)> + '_ {
        self.capacity.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| **c > 0)
                .map(move |(to, c)| (from, to, *c))
        })
    }

    /// Number of edges with positive capacity.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

fn check_node(node: usize, node_count: usize) -> Result<(), InvalidGraph> {
    if node < node_count {
        Ok(())
    } else {
        Err(InvalidGraph::NodeOutOfRange { node, node_count })
    }
}
