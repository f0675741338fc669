//! Key-value context attached to handlers and individual records.
//!
//! Metadata comes from two places: a handler instance carries a map that
//! persists across calls, and each call may supply its own one-off map.
//! When a record is rendered the two are merged into a read-only
//! projection, with the call map winning on key collisions.
//!
//! Values are stored as display strings. The [`metadata!`][crate::metadata!]
//! macro accepts anything implementing [`Display`][std::fmt::Display] and
//! stringifies it on insertion.

use std::collections::BTreeMap;

/// A map from string keys to display-string values.
///
/// Backed by a [`BTreeMap`] so that iteration, and therefore the rendered
/// `key=value` block, is always sorted by key independent of insertion
/// order.
///
/// # Examples
///
/// ```
/// use timberline::metadata;
///
/// let meta = metadata! {
///     "thread" => "worker-1",
///     "request" => 42,
/// };
/// assert_eq!(meta["request"], "42");
/// ```
pub type Metadata = BTreeMap<String, String>;

/// Merges call metadata over instance metadata without mutating either.
///
/// Call entries overwrite instance entries that share a key.
pub(crate) fn merge(instance: &Metadata, call: Option<&Metadata>) -> Metadata {
    let mut merged = instance.clone();
    if let Some(call) = call {
        for (key, value) in call {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::{merge, Metadata};

    #[test]
    fn call_metadata_wins_on_collision() {
        let mut instance = Metadata::new();
        instance.insert("k".to_owned(), "v1".to_owned());
        instance.insert("j".to_owned(), "x".to_owned());

        let mut call = Metadata::new();
        call.insert("k".to_owned(), "v2".to_owned());

        let merged = merge(&instance, Some(&call));
        assert_eq!(merged["k"], "v2");
        assert_eq!(merged["j"], "x");

        // the sources are untouched
        assert_eq!(instance["k"], "v1");
        assert_eq!(call["k"], "v2");
    }

    #[test]
    fn absent_call_metadata_is_empty() {
        let mut instance = Metadata::new();
        instance.insert("k".to_owned(), "v".to_owned());

        assert_eq!(merge(&instance, None), instance);
    }
}
