//! # Char Trie
//!
//! A mutable prefix tree mapping string keys to values, one `char` per edge.
//!
//! Nodes live in an arena and refer to their parent by index, which lets
//! deletion walk back up the tree and prune the branch it leaves behind. The
//! tree therefore never holds a non-terminal node without children.
//!
//! ## Features
//!
//! - **Exact lookup**: `get`, `get_mut` and `contains_key`
//! - **Path search**: `search` returns a handle to any node on a stored path
//! - **Prefix enumeration**: `find_words` lists stored words under a prefix in sorted order
//! - **Compacting deletion**: `delete` prunes the nodes only the removed word used
//! - **Key normalization**: optional punctuation stripping and lowercasing via `TrieConfig`
//!
//! The trie is not synchronized. Share it between threads behind a lock.
//!
//! ## Example
//!
//! ```rust
//! use char_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("boat", 1).unwrap();
//! trie.insert("boar", 2).unwrap();
//!
//! assert_eq!(trie.get("boat"), Some(&1));
//! assert_eq!(trie.find_words("bo"), Some(vec!["boar".to_string(), "boat".to_string()]));
//!
//! let node = trie.search("boa").unwrap();
//! assert_eq!(trie.get_prefix(node).unwrap(), "boa");
//! ```

mod config;
mod iter;
mod key;
pub mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod trie;
mod value;

pub use crate::config::TrieConfig;
pub use crate::iter::Iter;
pub use crate::key::KeyNormalization;
pub use crate::node::{NodeId, NodeRef};
pub use crate::trie::Trie;
pub use crate::value::TrieValue;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key or value was missing or blank
    #[error("invalid argument: {}", .0)]
    InvalidArgument(String),
    /// A node handle was required but none was given
    #[error("node reference must not be null")]
    NullReference,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
