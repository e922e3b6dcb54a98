//! Key normalization applied before a key is turned into symbol transitions.
use std::borrow::Cow;

use crate::{Error, Result};

/// How keys are rewritten before they reach the tree.
///
/// The same rule is applied on every operation, so a word stored as
/// `"one-hundred-ten"` under [`KeyNormalization::StripPunctuation`] is found
/// again with either `"one-hundred-ten"` or `"onehundredten"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyNormalization {
    /// Keys are used exactly as given.
    Verbatim,
    /// Characters that are neither alphanumeric nor whitespace are dropped.
    StripPunctuation,
    /// Keys are lowercased.
    Lowercase,
    /// Punctuation is dropped and the remainder lowercased.
    StripPunctuationLowercase,
}

impl Default for KeyNormalization {
    fn default() -> Self {
        KeyNormalization::Verbatim
    }
}

impl KeyNormalization {
    /// Rewrites `key`, borrowing it when nothing needs to change.
    pub fn apply<'a>(self, key: &'a str) -> Cow<'a, str> {
        let strip = matches!(
            self,
            KeyNormalization::StripPunctuation | KeyNormalization::StripPunctuationLowercase
        );
        let lower = matches!(
            self,
            KeyNormalization::Lowercase | KeyNormalization::StripPunctuationLowercase
        );

        let needs_strip = strip && key.chars().any(is_punctuation);
        let needs_lower = lower && key.chars().any(char::is_uppercase);
        if !needs_strip && !needs_lower {
            return Cow::Borrowed(key);
        }

        let mut out = String::with_capacity(key.len());
        for c in key.chars() {
            if strip && is_punctuation(c) {
                continue;
            }
            if lower {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Unwraps a nullable key argument, naming the operation in the error.
pub(crate) fn require<'k>(key: Option<&'k str>, op: &str) -> Result<&'k str> {
    key.ok_or_else(|| {
        tracing::debug!(op, "rejected null key");
        Error::InvalidArgument(format!("{}: key must not be null", op))
    })
}

/// Checks that a key can be stored: not blank before or after normalization.
pub(crate) fn require_word<'k>(
    key: Option<&'k str>,
    normalization: KeyNormalization,
) -> Result<Cow<'k, str>> {
    let key = require(key, "insert")?;
    if key.trim().is_empty() {
        tracing::debug!(key, "rejected blank key");
        return Err(Error::InvalidArgument(
            "insert: key must not be empty or whitespace".to_string(),
        ));
    }
    let normalized = normalization.apply(key);
    if normalized.trim().is_empty() {
        tracing::debug!(key, "rejected key that normalizes to nothing");
        return Err(Error::InvalidArgument(format!(
            "insert: key {:?} is empty after normalization",
            key
        )));
    }
    Ok(normalized)
}
