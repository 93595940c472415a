//! Two independent textbook algorithms:
//!
//! - [`max_flow`]: Edmonds–Karp maximum flow over a capacity matrix, minimum cut extraction,
//!   and proportional attribution of flow to origins in three-tier networks.
//! - [`trie`]: a prefix tree, and its suffix-aware extension backed by a mirrored tree.


pub mod error;
pub mod max_flow;
pub mod trie;

pub use max_flow::solve;

/// Extract the "simple name" of a type argument at compile time.
///
/// In the future, this should be a `const fn`, but `type_name` and `unwrap_or` are not
/// yet stabilized as `const` functions (even thought they probably are).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
