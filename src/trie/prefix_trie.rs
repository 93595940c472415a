use crate::error::InvalidArgument;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;

/// A prefix tree mapping non-empty string keys to values.
///
/// Every node owns its children (ordered by symbol) and an optional value. A node holds a value
/// exactly when the path from the root spells a key that is currently stored. Nodes that hold
/// no value and have no children are pruned on delete, so the tree never contains
/// dead branches.
///
/// All traversals use explicit stacks, so very long keys cannot overflow the call stack.
/// This includes `Clone`, `Debug`, `Drop` and (with the `serde` feature) serialization, which
/// represents the tree as a flat list of `(key, value)` pairs.
pub struct Trie<V> {
    root: TrieNode<V>,
    size: usize,
}

struct TrieNode<V> {
    children: BTreeMap<char, TrieNode<V>>,
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: None,
        }
    }
}

impl<V> TrieNode<V> {
    /// Drop this subtree without recursion.
    fn dismantle(mut self) {
        let mut stack: Vec<TrieNode<V>> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<V> Drop for Trie<V> {
    fn drop(&mut self) {
        std::mem::take(&mut self.root).dismantle();
    }
}

impl<V: Clone> Clone for Trie<V> {
    fn clone(&self) -> Self {
        let mut copy = Trie::new();
        for (key, value) in self.entries_with_prefix("") {
            copy.insert(&key, value.clone());
        }
        copy
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries_with_prefix("")).finish()
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Trie<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut entries = serializer.serialize_seq(Some(self.size))?;
        for entry in self.entries_with_prefix("") {
            entries.serialize_element(&entry)?;
        }
        entries.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Trie<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = <Vec<(String, V)> as serde::Deserialize>::deserialize(deserializer)?;
        let mut trie = Trie::new();
        for (key, value) in entries {
            trie.put(&key, value).map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(trie)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<V> Trie<V> {
    /// Create an empty [`Trie`].
    pub fn new() -> Trie<V> {
        Trie {
            root: TrieNode::default(),
            size: 0,
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Insert `key` with `value`, creating the missing nodes along the path. Returns the value
    /// previously stored under `key` (the size only grows if there was none).
    pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("put", "key"));
        }
        Ok(self.insert(key, value))
    }

    /// The value stored under `key`, or `None` if the key is not present.
    pub fn get(&self, key: &str) -> Result<Option<&V>, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("get", "key"));
        }
        Ok(self.find(key).and_then(|node| node.value.as_ref()))
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &str) -> Result<bool, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("contains_key", "key"));
        }
        Ok(self.get(key)?.is_some())
    }

    /// Remove `key` and return whether it was present.
    pub fn delete(&mut self, key: &str) -> Result<bool, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("delete", "key"));
        }
        Ok(self.remove(key)?.is_some())
    }

    /// Remove `key` and return its value (if it was present).
    ///
    /// After the value is cleared, the chain of nodes that only existed to reach `key` is
    /// detached from the deepest ancestor that still holds a value or has other children.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("remove", "key"));
        }

        let symbols: Vec<char> = key.chars().collect();

        // `cut_depth` is the depth of the deepest proper ancestor of the key node that must
        // survive. The root (depth 0) always survives.
        let mut cut_depth = 0;
        let mut node = &self.root;
        for (depth, symbol) in symbols.iter().enumerate() {
            if depth > 0 && (node.value.is_some() || node.children.len() > 1) {
                cut_depth = depth;
            }
            let Some(child) = node.children.get(symbol) else {
                return Ok(None);
            };
            node = child;
        }

        if node.value.is_none() {
            return Ok(None);
        }
        let prune = node.children.is_empty();

        let Some(terminal) = self.find_mut(&symbols) else {
            return Ok(None);
        };
        let removed = terminal.value.take();
        self.size -= 1;

        if prune {
            if let Some(parent) = self.find_mut(&symbols[..cut_depth]) {
                if let Some(branch) = parent.children.remove(&symbols[cut_depth]) {
                    branch.dismantle();
                }
                debug!(
                    "Pruned {} dangling node(s) after deleting `{key}`.",
                    symbols.len() - cut_depth
                );
            }
        }

        Ok(removed)
    }

    /// The longest stored key that is a prefix of `text` (empty if there is none).
    pub fn longest_prefix_of(&self, text: &str) -> Result<String, InvalidArgument> {
        if text.is_empty() {
            return Err(InvalidArgument::empty("longest_prefix_of", "text"));
        }

        let mut node = &self.root;
        let mut longest = 0;
        for (index, symbol) in text.char_indices() {
            let Some(child) = node.children.get(&symbol) else {
                break;
            };
            node = child;
            if node.value.is_some() {
                longest = index + symbol.len_utf8();
            }
        }

        Ok(text[..longest].to_string())
    }

    /// True if some path of the tree spells `prefix`, regardless of whether any key ends
    /// along it. The empty prefix is always present.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// All keys that start with `prefix`, in lexicographic order of their symbols.
    /// The empty prefix matches every key.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let keys: Vec<String> = self
            .entries_with_prefix(prefix)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        trace!("Collected {} key(s) with prefix `{prefix}`.", keys.len());
        keys
    }

    /// All `(key, value)` pairs whose key starts with `prefix`, in lexicographic order.
    pub(crate) fn entries_with_prefix(&self, prefix: &str) -> Vec<(String, &V)> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        // One shared key buffer: every stack entry remembers the buffer length of its parent
        // and the symbol that leads to it.
        let mut result = Vec::new();
        let mut key = prefix.to_string();
        let mut stack = vec![(start, key.len(), None)];
        while let Some((node, parent_len, symbol)) = stack.pop() {
            key.truncate(parent_len);
            if let Some(symbol) = symbol {
                key.push(symbol);
            }
            if let Some(value) = &node.value {
                result.push((key.clone(), value));
            }
            // Children are pushed in reverse, so they are popped in symbol order.
            for (symbol, child) in node.children.iter().rev() {
                stack.push((child, key.len(), Some(*symbol)));
            }
        }
        result
    }

    /// All stored keys, in lexicographic order of their symbols.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Number of stored keys that start with `prefix`.
    ///
    /// The cost is proportional to the prefix length plus the size of the subtree below it.
    pub fn count_words_with_prefix(&self, prefix: &str) -> usize {
        let Some(start) = self.find(prefix) else {
            return 0;
        };

        let mut count = 0;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Store `value` under a non-empty `key`.
    pub(crate) fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for symbol in key.chars() {
            node = node.children.entry(symbol).or_default();
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.size += 1;
        }
        previous
    }

    fn find(&self, path: &str) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for symbol in path.chars() {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    fn find_mut(&mut self, path: &[char]) -> Option<&mut TrieNode<V>> {
        let mut node = &mut self.root;
        for symbol in path {
            node = node.children.get_mut(symbol)?;
        }
        Some(node)
    }
}
