//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! storing, finding, enumerating and deleting words.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::config::TrieConfig;
use crate::iter::Iter;
use crate::key::{require, require_word};
use crate::node::{Arena, NodeId, NodeRef};
use crate::value::TrieValue;
use crate::{Error, Result};

/// A mutable prefix tree mapping words to values.
///
/// Every word is stored as a path of `char` edges from a root that never
/// holds a value itself. Children are kept in symbol order, so every listing
/// the trie produces is sorted.
///
/// Deleting a word prunes the nodes that only that word used, keeping the
/// tree minimal: apart from the root, every node either ends a word or has
/// at least one child.
///
/// The trie does no locking of its own. Callers that share one across
/// threads must serialize access, e.g. behind a `Mutex`.
#[derive(Clone)]
pub struct Trie<V> {
    /// Every node of the tree; slot 0 is the root
    nodes: Arena<V>,

    /// The number of words stored in the trie
    size: usize,

    config: TrieConfig,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given settings.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            nodes: Arena::new(),
            size: 0,
            config,
        }
    }

    /// Returns the settings this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.size(), 0);
    ///
    /// trie.insert("hello", 42).unwrap();
    /// assert_eq!(trie.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Trie::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.size = 0;
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> NodeRef<'_, V> {
        NodeRef::new(&self.nodes, NodeId::ROOT)
    }

    fn normalize<'k>(&self, key: &'k str) -> Cow<'k, str> {
        self.config.key_normalization().apply(key)
    }

    fn locate(&self, key: &str) -> Option<NodeId> {
        self.nodes.walk(&self.normalize(key))
    }

    /// Retrieves a reference to the value stored for the given word, if any.
    ///
    /// Paths that exist only as the prefix of longer words have no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello"), Some(&42));
    /// assert_eq!(trie.get("hell"), None);
    /// assert_eq!(trie.get("world"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let id = self.locate(key)?;
        self.nodes.node(id).value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored for the given word.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let id = self.locate(key)?;
        self.nodes.node_mut(id).value.as_mut()
    }

    /// Returns `true` if the trie stores a value for the given word.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Follows `key` from the root and returns the node it ends on.
    ///
    /// The node is returned whether or not a word ends there; use
    /// [`NodeRef::has_value`] to tell. Returns `Ok(None)` when the path
    /// leaves the tree and an error when `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("four", 4).unwrap();
    ///
    /// let node = trie.search("four").unwrap().unwrap();
    /// assert_eq!(node.value(), Some(&4));
    ///
    /// let inner = trie.search("fo").unwrap().unwrap();
    /// assert!(!inner.has_value());
    ///
    /// assert!(trie.search("five").unwrap().is_none());
    /// ```
    pub fn search<'k>(&self, key: impl Into<Option<&'k str>>) -> Result<Option<NodeRef<'_, V>>> {
        let key = require(key.into(), "search")?;
        Ok(self
            .locate(key)
            .map(|id| NodeRef::new(&self.nodes, id)))
    }

    /// Rebuilds the word spelled by the path from the root to `node`.
    ///
    /// Fails with [`Error::NullReference`] when `node` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("one", 1).unwrap();
    ///
    /// let node = trie.search("one").unwrap();
    /// assert_eq!(trie.get_prefix(node).unwrap(), "one");
    /// ```
    pub fn get_prefix(&self, node: Option<NodeRef<'_, V>>) -> Result<String> {
        node.map(|node| node.prefix()).ok_or(Error::NullReference)
    }

    /// Lists every stored word in ascending order.
    ///
    /// Returns `None` when the trie is empty.
    pub fn words(&self) -> Option<Vec<String>> {
        self.find_words("")
    }

    /// Lists the stored words that start with `prefix`, in ascending order.
    ///
    /// Returns `None` when the trie is empty or when no stored word starts
    /// with `prefix`. The empty prefix lists every word.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for (word, value) in &[("boa", 1), ("boat", 2), ("boar", 3), ("boats", 4)] {
    ///     trie.insert(*word, *value).unwrap();
    /// }
    ///
    /// assert_eq!(
    ///     trie.find_words("boa").unwrap(),
    ///     vec!["boa", "boar", "boat", "boats"]
    /// );
    /// assert_eq!(trie.find_words("cat"), None);
    /// ```
    pub fn find_words(&self, prefix: &str) -> Option<Vec<String>> {
        if self.is_empty() {
            return None;
        }
        let iter = self.iter_prefix(prefix);
        if !iter.has_start() {
            return None;
        }
        Some(iter.map(|(word, _)| word).collect())
    }

    /// Returns a lazy iterator over every `(word, value)` pair in ascending order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::whole(&self.nodes, self.size)
    }

    /// Returns a lazy iterator over the `(word, value)` pairs whose word
    /// starts with `prefix`, in ascending order.
    pub fn iter_prefix(&self, prefix: &str) -> Iter<'_, V> {
        let prefix = self.normalize(prefix);
        let start = self.nodes.walk(&prefix);
        Iter::new(&self.nodes, start, prefix.into_owned())
    }

    /// Removes a word from the trie, returning its value.
    ///
    /// Only a `None` key is rejected. Blank words and words that are not
    /// stored leave the trie untouched and return `Ok(None)`.
    ///
    /// After the value is removed, every node that no longer leads to a word
    /// is pruned, walking upward until a node that ends another word or
    /// still has children.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("boat", 1).unwrap();
    /// trie.insert("boats", 2).unwrap();
    ///
    /// assert_eq!(trie.delete("boats").unwrap(), Some(2));
    /// assert_eq!(trie.get("boat"), Some(&1));
    /// assert_eq!(trie.delete("boats").unwrap(), None);
    /// ```
    pub fn delete<'k>(&mut self, key: impl Into<Option<&'k str>>) -> Result<Option<V>> {
        let key = require(key.into(), "delete")?;

        let id = match self.locate(key) {
            Some(id) => id,
            None => {
                debug!(key, "delete missed: no such path");
                return Ok(None);
            }
        };
        let removed = match self.nodes.node_mut(id).clear_value() {
            Some(value) => value,
            None => {
                debug!(key, "delete missed: path holds no word");
                return Ok(None);
            }
        };
        self.size -= 1;

        let pruned = self.compact(id);
        debug!(key, pruned, size = self.size, "deleted word");
        Ok(Some(removed))
    }

    /// Prunes vacant nodes from `id` upward, returning how many were removed.
    fn compact(&mut self, mut id: NodeId) -> usize {
        let mut pruned = 0;
        while id != NodeId::ROOT {
            let node = self.nodes.node(id);
            if !node.is_vacant() {
                break;
            }
            let (symbol, parent) = match (node.symbol, node.parent) {
                (Some(symbol), Some(parent)) => (symbol, parent),
                _ => break,
            };
            self.nodes.remove_child(parent, symbol);
            pruned += 1;
            id = parent;
        }
        pruned
    }
}

impl<V: TrieValue> Trie<V> {
    /// Inserts a word, returning the value it replaced.
    ///
    /// Fails with [`Error::InvalidArgument`] when the key is `None`, empty,
    /// whitespace only (or nothing once normalized), or when the value is
    /// blank. Nothing is modified on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("hello", 1).unwrap(), None);
    /// assert_eq!(trie.insert("hello", 2).unwrap(), Some(1));
    /// assert_eq!(trie.size(), 1);
    ///
    /// assert!(matches!(trie.insert("  ", 3), Err(Error::InvalidArgument(_))));
    /// ```
    pub fn insert<'k>(&mut self, key: impl Into<Option<&'k str>>, value: V) -> Result<Option<V>> {
        let word = require_word(key.into(), self.config.key_normalization())?;
        if value.is_blank() {
            debug!(key = %word, "rejected blank value");
            return Err(Error::InvalidArgument(format!(
                "insert: value for {:?} must not be blank",
                word
            )));
        }

        let mut id = NodeId::ROOT;
        for symbol in word.chars() {
            id = self.nodes.get_or_create_child(id, symbol);
        }

        let previous = self.nodes.node_mut(id).set_value(value);
        if previous.is_none() {
            self.size += 1;
        }
        debug!(key = %word, replaced = previous.is_some(), size = self.size, "inserted word");
        Ok(previous)
    }

    /// Builds a trie from `(word, value)` pairs, failing on the first invalid pair.
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::from_entries(vec![("one", 1), ("two", 2)]).unwrap();
    /// assert_eq!(trie.to_string(), "{\n  \"one -> 1\",\n  \"two -> 2\",\n}");
    /// ```
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = Trie::new();
        for (key, value) in entries {
            trie.insert(key.as_ref(), value)?;
        }
        Ok(trie)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders `{}` when empty, otherwise one quoted `"word -> value",` line per
/// word in sorted order between braces.
impl<V: fmt::Display> fmt::Display for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{\n")?;
        for (word, value) in self {
            writeln!(f, "  \"{} -> {}\",", word, value)?;
        }
        f.write_str("}")
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Two tries are equal when they store the same words with equal values
impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Trie<V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyNormalization;

    /// Checks the structural invariants by walking every live node.
    fn assert_minimal<V>(trie: &Trie<V>) {
        let mut stack = vec![trie.root()];
        let mut live = 0;
        let mut terminals = 0;
        while let Some(node) = stack.pop() {
            live += 1;
            if node.has_value() {
                terminals += 1;
            }
            if !node.is_root() {
                assert!(
                    node.has_value() || node.has_children(),
                    "dangling node at {:?}",
                    node.prefix()
                );
                let parent = node.parent().unwrap();
                let symbol = node.symbol().unwrap();
                assert_eq!(parent.child(symbol).map(|n| n.id()), Some(node.id()));
            }
            stack.extend(node.children());
        }
        assert!(!trie.root().has_value());
        assert_eq!(terminals, trie.size());
        assert_eq!(live, trie.node_count());
    }

    fn close_words() -> Trie<u32> {
        let mut trie = Trie::new();
        trie.insert("boa", 1).unwrap();
        trie.insert("boat", 2).unwrap();
        trie.insert("boar", 3).unwrap();
        trie.insert("boats", 4).unwrap();
        trie
    }

    #[test]
    fn test_new_trie() {
        let trie: Trie<u32> = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 1);
        assert_minimal(&trie);
    }

    #[test]
    fn test_get_nonexistent() {
        let trie: Trie<u32> = Trie::new();
        assert_eq!(trie.get("test"), None);
        assert!(!trie.contains_key("test"));
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("hello", 42).unwrap(), None);

        assert_eq!(trie.size(), 1);
        assert_eq!(trie.get("hello"), Some(&42));
        assert_eq!(trie.get("world"), None);
        assert_minimal(&trie);
    }

    #[test]
    fn test_insert_replace() {
        let mut trie = Trie::new();
        trie.insert("hello", 42).unwrap();
        let nodes = trie.node_count();

        assert_eq!(trie.insert("hello", 100).unwrap(), Some(42));
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.get("hello"), Some(&100));
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = Trie::new();
        trie.insert("alphabet", 1).unwrap();

        assert_eq!(trie.get("alpha"), None);
        trie.insert("alpha", 2).unwrap();
        assert_eq!(trie.get("alpha"), Some(&2));
        assert_eq!(trie.get("alphabet"), Some(&1));
        assert_eq!(trie.size(), 2);
        assert_minimal(&trie);
    }

    #[test]
    fn test_shared_prefix_shares_nodes() {
        let mut trie = Trie::new();
        trie.insert("hello", 1).unwrap();
        trie.insert("help", 2).unwrap();

        // root + h e l + l o + p
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn test_insert_rejects_bad_keys() {
        let mut trie = Trie::new();
        for key in &[None, Some(""), Some(" "), Some("  "), Some("\t"), Some("\n")] {
            assert!(matches!(
                trie.insert(*key, 1),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_insert_rejects_blank_values() {
        let mut trie: Trie<Option<String>> = Trie::new();
        assert!(matches!(
            trie.insert("one", None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            trie.insert("one", Some(" ".to_string())),
            Err(Error::InvalidArgument(_))
        ));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        trie.insert("one", Some("uno".to_string())).unwrap();
        assert_eq!(trie.get("one"), Some(&Some("uno".to_string())));
    }

    #[test]
    fn test_search() {
        let trie = close_words();

        let node = trie.search("boat").unwrap().unwrap();
        assert_eq!(node.value(), Some(&2));
        assert_eq!(node.symbol(), Some('t'));
        assert_eq!(node.child_count(), 1);

        let inner = trie.search("bo").unwrap().unwrap();
        assert!(!inner.has_value());
        assert!(inner.has_children());

        assert!(trie.search("bot").unwrap().is_none());
        assert!(trie.search("").unwrap().unwrap().is_root());
        assert!(matches!(
            trie.search(None::<&str>),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_get_prefix() {
        let trie = close_words();
        for word in &["boa", "boat", "boar", "boats", "bo"] {
            let node = trie.search(*word).unwrap();
            assert_eq!(trie.get_prefix(node).unwrap(), *word);
        }
        assert_eq!(trie.get_prefix(Some(trie.root())).unwrap(), "");
        assert_eq!(trie.get_prefix(None), Err(Error::NullReference));
    }

    #[test]
    fn test_find_words() {
        let trie = close_words();
        let words = vec!["boa", "boar", "boat", "boats"];

        assert_eq!(trie.find_words("boa").unwrap(), words);
        assert_eq!(trie.find_words("").unwrap(), words);
        assert_eq!(trie.words().unwrap(), words);
        assert_eq!(trie.find_words("boat").unwrap(), vec!["boat", "boats"]);
        assert_eq!(trie.find_words("boats").unwrap(), vec!["boats"]);
        assert_eq!(trie.find_words("c"), None);
        assert_eq!(trie.find_words("boatsman"), None);
    }

    #[test]
    fn test_find_words_empty() {
        let mut trie: Trie<u32> = Trie::new();
        assert_eq!(trie.words(), None);
        assert_eq!(trie.find_words(""), None);
        assert_eq!(trie.find_words("a"), None);

        // Empty again after deletion
        trie.insert("a", 1).unwrap();
        trie.delete("a").unwrap();
        assert_eq!(trie.words(), None);
    }

    #[test]
    fn test_delete_leaf_compacts() {
        let mut trie = Trie::new();
        trie.insert("boat", 2).unwrap();
        let nodes = trie.node_count();
        trie.insert("boats", 4).unwrap();

        assert_eq!(trie.delete("boats").unwrap(), Some(4));
        assert_eq!(trie.get("boat"), Some(&2));
        assert_eq!(trie.get("boats"), None);
        assert_eq!(trie.node_count(), nodes);
        assert_minimal(&trie);
    }

    #[test]
    fn test_delete_inner_keeps_children() {
        let mut trie = close_words();
        let nodes = trie.node_count();

        assert_eq!(trie.delete("boat").unwrap(), Some(2));
        assert_eq!(trie.get("boats"), Some(&4));
        assert_eq!(trie.get("boat"), None);
        assert_eq!(trie.size(), 3);
        assert_eq!(trie.node_count(), nodes);
        assert_minimal(&trie);
    }

    #[test]
    fn test_delete_whole_branch() {
        let mut trie = Trie::new();
        trie.insert("one", 1).unwrap();
        trie.insert("two", 2).unwrap();

        trie.delete("one").unwrap();
        assert_eq!(trie.node_count(), 4);
        trie.delete("two").unwrap();
        assert_eq!(trie.node_count(), 1);
        assert!(trie.is_empty());
        assert_minimal(&trie);
    }

    #[test]
    fn test_delete_stops_at_branch() {
        let mut trie = Trie::new();
        trie.insert("abcd", 1).unwrap();
        trie.insert("abxy", 2).unwrap();

        trie.delete("abcd").unwrap();
        assert_eq!(trie.words().unwrap(), vec!["abxy"]);
        // root + a b + x y
        assert_eq!(trie.node_count(), 5);
        assert_minimal(&trie);
    }

    #[test]
    fn test_delete_lenient() {
        let mut trie = close_words();
        let nodes = trie.node_count();

        assert_eq!(trie.delete("missing").unwrap(), None);
        assert_eq!(trie.delete("bo").unwrap(), None);
        assert_eq!(trie.delete("").unwrap(), None);
        assert_eq!(trie.delete("  ").unwrap(), None);
        assert_eq!(trie.size(), 4);
        assert_eq!(trie.node_count(), nodes);

        assert!(matches!(
            trie.delete(None::<&str>),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(trie.size(), 4);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut trie = Trie::new();
        trie.insert("abc", 1).unwrap();
        trie.delete("abc").unwrap();
        trie.insert("xyz", 2).unwrap();

        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.words().unwrap(), vec!["xyz"]);
        assert_minimal(&trie);
    }

    #[test]
    fn test_display() {
        let mut trie = Trie::new();
        assert_eq!(trie.to_string(), "{}");

        trie.insert("two", 2).unwrap();
        trie.insert("one", 1).unwrap();
        assert_eq!(trie.to_string(), "{\n  \"one -> 1\",\n  \"two -> 2\",\n}");
    }

    #[test]
    fn test_debug() {
        let trie = Trie::from_entries(vec![("b", 2), ("a", 1)]).unwrap();
        assert_eq!(format!("{:?}", trie), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut left = Trie::new();
        left.insert("a", 1).unwrap();
        left.insert("b", 2).unwrap();
        left.insert("c", 3).unwrap();
        left.delete("c").unwrap();

        let right = Trie::from_entries(vec![("b", 2), ("a", 1)]).unwrap();
        assert_eq!(left, right);

        left.insert("a", 5).unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn test_get_mut() {
        let mut trie = close_words();
        *trie.get_mut("boar").unwrap() += 10;
        assert_eq!(trie.get("boar"), Some(&13));
        assert!(trie.get_mut("bo").is_none());
    }

    #[test]
    fn test_clear() {
        let mut trie = close_words();
        trie.clear();

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.get("boa"), None);
        trie.insert("boa", 9).unwrap();
        assert_eq!(trie.get("boa"), Some(&9));
    }

    #[test]
    fn test_iter_prefix_values() {
        let trie = close_words();
        let pairs: Vec<(String, u32)> = trie
            .iter_prefix("boat")
            .map(|(word, value)| (word, *value))
            .collect();
        assert_eq!(
            pairs,
            vec![("boat".to_string(), 2), ("boats".to_string(), 4)]
        );
        assert_eq!(trie.iter_prefix("x").count(), 0);
    }

    #[test]
    fn test_normalized_keys() {
        let config = TrieConfig::new().normalization(KeyNormalization::StripPunctuation);
        let mut trie = Trie::with_config(config);
        trie.insert("one-hundred-ten", 110).unwrap();
        trie.insert("one-hundred-twenty", 120).unwrap();

        assert_eq!(trie.get("onehundredten"), Some(&110));
        assert_eq!(trie.get("one-hundred-ten"), Some(&110));
        assert_eq!(
            trie.find_words("one-hundred").unwrap(),
            vec!["onehundredten", "onehundredtwenty"]
        );

        assert_eq!(trie.delete("onehundredten").unwrap(), Some(110));
        assert_eq!(trie.get("onehundredtwenty"), Some(&120));
        assert!(matches!(
            trie.insert("---", 1),
            Err(Error::InvalidArgument(_))
        ));
        assert_minimal(&trie);
    }

    #[test]
    fn test_lowercase_keys() {
        let config = TrieConfig::new().normalization(KeyNormalization::Lowercase);
        let mut trie = Trie::with_config(config);
        trie.insert("Boat", 1).unwrap();

        assert_eq!(trie.get("BOAT"), Some(&1));
        assert_eq!(trie.words().unwrap(), vec!["boat"]);
        assert_eq!(trie.config().key_normalization(), KeyNormalization::Lowercase);
    }
}
