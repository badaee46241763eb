//! Reusable per-field merge strategies.
//!
//! Every strategy takes the original value first and the other value second,
//! and returns a freshly owned result. Absent on both sides always stays
//! absent.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use super::Merge;
use crate::license::Conjunction;

/// Keep the original value if set, otherwise take the other one.
pub fn first_present<T: Clone>(original: Option<&T>, other: Option<&T>) -> Option<T> {
    original.or(other).cloned()
}

/// Join two distinct texts with `separator`; equal texts are kept once.
pub fn concat_distinct(
    original: Option<&str>,
    other: Option<&str>,
    separator: &str,
) -> Option<String> {
    match (original, other) {
        (Some(original), Some(other)) if original != other => {
            trace!(separator, "concatenating distinct texts");
            Some(format!("{original}{separator}{other}"))
        }
        (Some(original), _) => Some(original.to_string()),
        (None, other) => other.map(str::to_string),
    }
}

/// Union of two sets; an absent set behaves as empty unless both are absent.
pub fn union<T>(
    original: Option<&IndexSet<T>>,
    other: Option<&IndexSet<T>>,
) -> Option<IndexSet<T>>
where
    T: Eq + Hash + Clone,
{
    if original.is_none() && other.is_none() {
        return None;
    }

    Some(original.into_iter().chain(other).flatten().cloned().collect())
}

/// Key-wise union of two maps where the other value wins on shared keys.
///
/// Keys keep the original's order, keys only present in `other` are
/// appended. An absent map behaves as empty unless both are absent.
pub fn union_right_biased<K, V>(
    original: Option<&IndexMap<K, V>>,
    other: Option<&IndexMap<K, V>>,
) -> Option<IndexMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    if original.is_none() && other.is_none() {
        return None;
    }

    let mut merged = original.cloned().unwrap_or_default();
    for (key, value) in other.into_iter().flatten() {
        merged.insert(key.clone(), value.clone());
    }

    Some(merged)
}

/// Combine both values with a logical AND if both are set.
pub fn conjoin<T>(original: Option<&T>, other: Option<&T>) -> Option<T>
where
    T: Conjunction + Clone,
{
    match (original, other) {
        (Some(original), Some(other)) => {
            trace!("conjoining two values");
            Some(original.and(other))
        }
        (original, other) => first_present(original, other),
    }
}

/// Merge nested records field by field if both are set.
pub fn nested<T>(original: Option<&T>, other: Option<&T>) -> Option<T>
where
    T: Merge + Clone,
{
    match (original, other) {
        (Some(original), Some(other)) => Some(original.merge(other)),
        (original, other) => first_present(original, other),
    }
}
