//! Construction-time settings for a [`Trie`](crate::Trie).

use crate::key::KeyNormalization;

/// Settings applied to every key a trie sees.
///
/// ```
/// use char_trie::{KeyNormalization, Trie, TrieConfig};
///
/// let config = TrieConfig::new().normalization(KeyNormalization::StripPunctuation);
/// let mut trie = Trie::with_config(config);
/// trie.insert("one-hundred-ten", 110).unwrap();
/// assert_eq!(trie.get("onehundredten"), Some(&110));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrieConfig {
    normalization: KeyNormalization,
}

impl TrieConfig {
    /// Default settings: keys are used verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key normalization rule.
    pub fn normalization(mut self, normalization: KeyNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Returns the key normalization rule.
    pub fn key_normalization(&self) -> KeyNormalization {
        self.normalization
    }
}
