//! Payload validation for values stored in the trie.
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be stored in a [`Trie`](crate::Trie).
///
/// `insert` rejects blank values. Most types are never blank, so the default
/// implementation returns `false` and custom types only need an empty impl:
///
/// ```
/// use char_trie::{Trie, TrieValue};
///
/// #[derive(Debug, PartialEq)]
/// struct Score(u32);
/// impl TrieValue for Score {}
///
/// let mut trie = Trie::new();
/// trie.insert("ada", Score(3)).unwrap();
/// assert_eq!(trie.get("ada"), Some(&Score(3)));
/// ```
pub trait TrieValue {
    /// Returns `true` if this value counts as empty for insertion purposes.
    fn is_blank(&self) -> bool {
        false
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(impl TrieValue for $ty {})*
    };
}

never_blank!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
);

impl TrieValue for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl TrieValue for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<'a> TrieValue for Cow<'a, str> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_blank()
    }
}

impl<'a, T: TrieValue + ?Sized> TrieValue for &'a T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: TrieValue + ?Sized> TrieValue for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: TrieValue + ?Sized> TrieValue for Rc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: TrieValue + ?Sized> TrieValue for Arc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

// `None` plays the role of a null payload.
impl<T: TrieValue> TrieValue for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, TrieValue::is_blank)
    }
}

impl<T> TrieValue for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}
