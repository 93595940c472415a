use cancel_this::Cancelled;
use thiserror::Error;

/// An empty key, prefix or pattern was given to a trie operation that requires a non-empty one.
///
/// The error is raised before the trie is touched, so a failed operation never leaves
/// a partial mutation behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("illegal argument for `{operation}`: {argument} must be a non-empty string")]
pub struct InvalidArgument {
    /// Name of the rejected operation (e.g. `put`).
    pub operation: &'static str,
    /// Name of the rejected argument (e.g. `key`).
    pub argument: &'static str,
}

impl InvalidArgument {
    pub(crate) fn empty(operation: &'static str, argument: &'static str) -> InvalidArgument {
        InvalidArgument {
            operation,
            argument,
        }
    }
}

/// A capacity matrix or its endpoints do not describe a valid flow network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidGraph {
    Empty,
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    NegativeCapacity { from: usize, to: usize, capacity: i64 },
    SourceIsSink(usize),
    NodeOutOfRange { node: usize, node_count: usize },
    SourceCapacityOverflow { source: usize },
    PairCapacityOverflow { from: usize, to: usize },
}

// `Display`/`Error` are implemented by hand: `thiserror` would treat the `source`
// field of `SourceCapacityOverflow` as the underlying error cause.
impl std::fmt::Display for InvalidGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGraph::Empty => write!(f, "the capacity matrix has no nodes"),
            InvalidGraph::NotSquare { row, len, expected } => write!(
                f,
                "capacity matrix row {row} has {len} entries, expected {expected}"
            ),
            InvalidGraph::NegativeCapacity { from, to, capacity } => {
                write!(f, "edge {from} -> {to} has negative capacity {capacity}")
            }
            InvalidGraph::SourceIsSink(node) => {
                write!(f, "source and sink are the same node ({node})")
            }
            InvalidGraph::NodeOutOfRange { node, node_count } => write!(
                f,
                "node {node} is out of range for a network with {node_count} nodes"
            ),
            InvalidGraph::SourceCapacityOverflow { source } => write!(
                f,
                "total capacity leaving source {source} exceeds the capacity range"
            ),
            InvalidGraph::PairCapacityOverflow { from, to } => write!(
                f,
                "combined capacity of {from} -> {to} and {to} -> {from} exceeds the capacity range"
            ),
        }
    }
}

impl std::error::Error for InvalidGraph {}

/// Failure of a maximum flow computation.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    InvalidGraph(#[from] InvalidGraph),
    #[error("max-flow computation cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for FlowError {
    fn from(value: Cancelled) -> Self {
        FlowError::Cancelled(value)
    }
}
