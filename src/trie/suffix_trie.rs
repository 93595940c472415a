use crate::error::InvalidArgument;
use crate::trie::Trie;

/// A [`Trie`] that also answers suffix queries efficiently.
///
/// Next to the primary tree, it maintains a mirror tree that stores every key reversed
/// (with the same value). "Ends with `pattern`" in the primary tree is exactly "starts with
/// `reverse(pattern)`" in the mirror, so suffix queries cost the same as prefix queries.
///
/// Both trees are always updated together: for every `(key, value)` in the primary tree,
/// `(reverse(key), value)` is in the mirror, and vice versa.
///
/// With the `serde` feature, only the primary tree is serialized. The mirror is rebuilt
/// on deserialization.
#[derive(Clone, Debug)]
pub struct SuffixTrie<V> {
    forward: Trie<V>,
    mirror: Trie<V>,
}

impl<V> Default for SuffixTrie<V> {
    fn default() -> Self {
        SuffixTrie::new()
    }
}

impl<V: Clone> From<Trie<V>> for SuffixTrie<V> {
    fn from(forward: Trie<V>) -> Self {
        let mut mirror = Trie::new();
        for (key, value) in forward.entries_with_prefix("") {
            mirror.insert(&reversed(&key), value.clone());
        }
        SuffixTrie { forward, mirror }
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for SuffixTrie<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.forward, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de> + Clone> serde::Deserialize<'de> for SuffixTrie<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Trie<V> as serde::Deserialize>::deserialize(deserializer).map(SuffixTrie::from)
    }
}

fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}

impl<V> SuffixTrie<V> {
    pub fn new() -> SuffixTrie<V> {
        SuffixTrie {
            forward: Trie::new(),
            mirror: Trie::new(),
        }
    }

    /// The primary (forward) tree.
    pub fn as_trie(&self) -> &Trie<V> {
        &self.forward
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Insert `key` into both trees. Returns the value previously stored under `key`.
    pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>, InvalidArgument>
    where
        V: Clone,
    {
        if key.is_empty() {
            return Err(InvalidArgument::empty("put", "key"));
        }
        self.mirror.put(&reversed(key), value.clone())?;
        self.forward.put(key, value)
    }

    /// Remove `key` from both trees and return whether it was present.
    pub fn delete(&mut self, key: &str) -> Result<bool, InvalidArgument> {
        if key.is_empty() {
            return Err(InvalidArgument::empty("delete", "key"));
        }
        self.mirror.remove(&reversed(key))?;
        Ok(self.forward.remove(key)?.is_some())
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>, InvalidArgument> {
        self.forward.get(key)
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, InvalidArgument> {
        self.forward.contains_key(key)
    }

    pub fn longest_prefix_of(&self, text: &str) -> Result<String, InvalidArgument> {
        self.forward.longest_prefix_of(text)
    }

    pub fn keys(&self) -> Vec<String> {
        self.forward.keys()
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.forward.keys_with_prefix(prefix)
    }

    pub fn count_words_with_prefix(&self, prefix: &str) -> usize {
        self.forward.count_words_with_prefix(prefix)
    }

    /// True if some stored key passes through `prefix` (the path exists in the primary tree).
    /// The empty prefix is always present.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.forward.has_prefix(prefix)
    }

    /// Number of stored keys that end with `pattern`. The empty pattern matches every key.
    pub fn count_words_with_suffix(&self, pattern: &str) -> usize {
        self.mirror.count_words_with_prefix(&reversed(pattern))
    }

    /// All stored keys that end with `pattern`, ordered by their reversed spelling.
    pub fn keys_with_suffix(&self, pattern: &str) -> Vec<String> {
        self.mirror
            .keys_with_prefix(&reversed(pattern))
            .iter()
            .map(|key| reversed(key))
            .collect()
    }
}
