//! Merging of curations from independent sources.
//!
//! Each field of a curation has a fixed merge policy chosen by the kind of
//! information it carries:
//!
//! | Field | Policy |
//! |-------|--------|
//! | `comment` | concatenated with a newline if both differ |
//! | `authors` | set union |
//! | `concluded_license` | combined with `AND` |
//! | `vcs` | merged per sub-field, original first |
//! | `declared_license_mapping`, `labels` | key-wise union, other wins |
//! | everything else | original if set, else other |
//!
//! Merging is not commutative. Several curations for one package are folded
//! strictly from the left with [`merge_all`].
//!
//! # Example
//!
//! ```
//! use curator::{Merge, PackageCurationData};
//!
//! let original = PackageCurationData::new()
//!     .with_comment("original")
//!     .with_label("k1", "v1-o")
//!     .with_label("k2", "v2-o");
//! let other = PackageCurationData::new()
//!     .with_comment("other")
//!     .with_label("k2", "v2-x");
//!
//! let merged = original.merge(&other);
//! assert_eq!(merged.comment.as_deref(), Some("original\nother"));
//! assert_eq!(merged.labels.unwrap()["k2"], "v2-x");
//! ```

mod records;
pub mod strategy;

pub use records::COMMENT_SEPARATOR;

use tracing::debug;

/// A value that can be merged with another value of the same type.
pub trait Merge {
    /// Merge `other` into a copy of `self`, leaving both inputs untouched.
    fn merge(&self, other: &Self) -> Self;
}

/// Fold records from left to right, starting from the empty record.
///
/// Returns the empty record if there is nothing to fold.
pub fn merge_all<'a, T, I>(records: I) -> T
where
    T: Merge + Default + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut count = 0usize;
    let merged = records.into_iter().fold(T::default(), |merged, record| {
        count += 1;
        merged.merge(record)
    });

    debug!(count, "folded records");
    merged
}
