//! Prefix trees over string keys.
//!
//! - [`Trie`]: a keyed prefix tree with lookup, deletion (with pruning), longest-prefix
//!   matching, and prefix enumeration/counting.
//! - [`SuffixTrie`]: a [`Trie`] plus a mirror tree over reversed keys, which makes
//!   suffix counting as cheap as prefix counting.
//!
//! Keys are sequences of `char` symbols. Operations that look up a single key reject the empty
//! key with [`InvalidArgument`](crate::error::InvalidArgument); prefix/suffix queries accept
//! the empty string (it matches every key).
//!
//! # Example
//!
//! ```
//! use algo_flow_trie::trie::SuffixTrie;
//!
//! let mut trie = SuffixTrie::new();
//! for (i, word) in ["apple", "rate", "cat", "bat"].into_iter().enumerate() {
//!     trie.put(word, i).unwrap();
//! }
//! assert_eq!(trie.count_words_with_suffix("at"), 2);
//! assert_eq!(trie.count_words_with_prefix("ap"), 1);
//! assert!(trie.has_prefix("ra"));
//! ```


mod prefix_trie;
mod suffix_trie;

pub use prefix_trie::Trie;
pub use suffix_trie::SuffixTrie;
