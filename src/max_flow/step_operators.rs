use crate::max_flow::{AugmentingPathSearch, FlowNetwork, FlowState};
use cancel_this::{Cancellable, is_cancelled};
use log::trace;
use std::collections::VecDeque;

/// Finds a shortest (fewest edges) augmenting path using breadth-first search over the
/// residual graph. Using this search makes the augmentation loop the Edmonds–Karp algorithm.
pub struct BfsAugmentingPath;

/// Finds an arbitrary augmenting path using depth-first search over the residual graph
/// (the classic Ford–Fulkerson method). The number of augmentations is only bounded by the
/// max-flow value, so prefer [`BfsAugmentingPath`] unless the exploration order matters.
pub struct DfsAugmentingPath;

impl AugmentingPathSearch for BfsAugmentingPath {
    fn find(network: &FlowNetwork, state: &FlowState) -> Cancellable<Option<Vec<usize>>> {
        let (source, sink) = (network.source(), network.sink());
        let mut parent = vec![None; network.node_count()];
        let mut visited = vec![false; network.node_count()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            is_cancelled!()?;
            for v in 0..network.node_count() {
                if visited[v] || state.residual(network, u, v) <= 0 {
                    continue;
                }
                parent[v] = Some(u);
                visited[v] = true;
                if v == sink {
                    trace!("BFS reached sink `{sink}` through `{u}`.");
                    return Ok(Some(trace_path(&parent, source, sink)));
                }
                queue.push_back(v);
            }
        }

        trace!("BFS exhausted the residual graph without reaching `{sink}`.");
        Ok(None)
    }
}

impl AugmentingPathSearch for DfsAugmentingPath {
    fn find(network: &FlowNetwork, state: &FlowState) -> Cancellable<Option<Vec<usize>>> {
        let (source, sink) = (network.source(), network.sink());
        let mut parent = vec![None; network.node_count()];
        let mut visited = vec![false; network.node_count()];
        let mut stack = vec![source];
        visited[source] = true;

        while let Some(u) = stack.pop() {
            is_cancelled!()?;
            if u == sink {
                trace!("DFS reached sink `{sink}`.");
                return Ok(Some(trace_path(&parent, source, sink)));
            }
            // Reverse order so that lower node indices are explored first.
            for v in (0..network.node_count()).rev() {
                if !visited[v] && state.residual(network, u, v) > 0 {
                    parent[v] = Some(u);
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }

        trace!("DFS exhausted the residual graph without reaching `{sink}`.");
        Ok(None)
    }
}

/// Walk the parent pointers from `sink` back to `source` and return the path in
/// source-to-sink order.
fn trace_path(parent: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
    let mut path = vec![sink];
    let mut node = sink;
    while node != source {
        match parent[node] {
            Some(previous) => {
                path.push(previous);
                node = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
