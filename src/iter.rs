//! Sorted depth-first iteration over stored words.

use std::iter::FusedIterator;

use crate::node::{Arena, NodeId};

/// An iterator over the `(word, value)` pairs below one node of a trie.
///
/// Words come out in ascending symbol order: each node is visited before its
/// children, and children are visited smallest symbol first.
pub struct Iter<'a, V> {
    arena: &'a Arena<V>,

    /// The node the walk started from; its symbol is already part of `path`
    start: Option<NodeId>,

    /// Nodes still to visit, each with the byte length of `path` above it
    stack: Vec<(NodeId, usize)>,

    /// Word spelled by the node currently being visited
    path: String,

    /// Words not yet yielded, when known up front
    remaining: Option<usize>,
}

impl<'a, V> Iter<'a, V> {
    /// Walks the subtree rooted at `start`, whose path spells `prefix`
    pub(crate) fn new(arena: &'a Arena<V>, start: Option<NodeId>, prefix: String) -> Self {
        let mut stack = Vec::new();
        if let Some(id) = start {
            stack.push((id, prefix.len()));
        }
        Iter {
            arena,
            start,
            stack,
            path: prefix,
            remaining: None,
        }
    }

    /// Walks the whole trie, which is known to hold `len` words
    pub(crate) fn whole(arena: &'a Arena<V>, len: usize) -> Self {
        let mut iter = Iter::new(arena, Some(NodeId::ROOT), String::new());
        iter.remaining = Some(len);
        iter
    }

    /// Whether the walk has a starting node at all
    pub(crate) fn has_start(&self) -> bool {
        self.start.is_some()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, above)) = self.stack.pop() {
            let node = self.arena.node(id);

            self.path.truncate(above);
            if Some(id) != self.start {
                if let Some(symbol) = node.symbol {
                    self.path.push(symbol);
                }
            }

            // Reverse so the smallest symbol is popped first
            let depth = self.path.len();
            self.stack
                .extend(node.children.values().rev().map(|&child| (child, depth)));

            if let Some(value) = &node.value {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some((self.path.clone(), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None if self.stack.is_empty() => (0, Some(0)),
            None => (0, None),
        }
    }
}

impl<'a, V> FusedIterator for Iter<'a, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[(&str, u32)]) -> Arena<u32> {
        let mut arena = Arena::new();
        for &(word, value) in words {
            let mut id = NodeId::ROOT;
            for symbol in word.chars() {
                id = arena.get_or_create_child(id, symbol);
            }
            arena.node_mut(id).set_value(value);
        }
        arena
    }

    #[test]
    fn test_lexicographic_order() {
        // Deliberately not inserted in order
        let arena = build(&[
            ("zebra", 5),
            ("apple", 1),
            ("banana", 2),
            ("apricot", 6),
            ("blackberry", 8),
            ("blueberry", 7),
        ]);

        let words: Vec<String> = Iter::whole(&arena, 6).map(|(word, _)| word).collect();
        assert_eq!(
            words,
            vec!["apple", "apricot", "banana", "blackberry", "blueberry", "zebra"]
        );
    }

    #[test]
    fn test_prefix_before_extensions() {
        let arena = build(&[("boats", 4), ("boa", 1), ("boar", 3), ("boat", 2)]);
        let start = arena.walk("boa");

        let pairs: Vec<(String, u32)> = Iter::new(&arena, start, "boa".to_string())
            .map(|(word, value)| (word, *value))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("boa".to_string(), 1),
                ("boar".to_string(), 3),
                ("boat".to_string(), 2),
                ("boats".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_multibyte_symbols() {
        let arena = build(&[("über", 1), ("üb", 2), ("a", 3)]);
        let words: Vec<String> = Iter::whole(&arena, 3).map(|(word, _)| word).collect();
        assert_eq!(words, vec!["a", "üb", "über"]);
    }

    #[test]
    fn test_missing_start() {
        let arena = build(&[("a", 1)]);
        let mut iter = Iter::new(&arena, None, "x".to_string());

        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_size_hint_counts_down() {
        let arena = build(&[("a", 1), ("b", 2)]);
        let mut iter = Iter::whole(&arena, 2);

        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
    }
}
