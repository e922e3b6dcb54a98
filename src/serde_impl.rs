//! `serde` support: a trie serializes as a map from word to value, in sorted
//! word order, and deserializes by inserting every entry.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Trie, TrieValue};

impl<V: Serialize> Serialize for Trie<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (word, value) in self {
            map.serialize_entry(&word, value)?;
        }
        map.end()
    }
}

struct TrieVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for TrieVisitor<V>
where
    V: Deserialize<'de> + TrieValue,
{
    type Value = Trie<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of non-blank words to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut trie = Trie::new();
        while let Some((word, value)) = access.next_entry::<String, V>()? {
            trie.insert(word.as_str(), value).map_err(A::Error::custom)?;
        }
        Ok(trie)
    }
}

impl<'de, V> Deserialize<'de> for Trie<V>
where
    V: Deserialize<'de> + TrieValue,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TrieVisitor(PhantomData))
    }
}
