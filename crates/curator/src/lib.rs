//! Curator: consolidation of package curations from independent sources.
//!
//! Several sources may supply corrections to the license and provenance
//! metadata of the same package. Curator folds them into one record without
//! silently dropping or duplicating information.
//!
//! # Core Principles
//!
//! - **Field-aware**: each field merges according to what it means
//! - **Non-destructive**: inputs are never modified, every merge returns a new record
//! - **Absence is explicit**: an unset field differs from an empty collection
//!
//! # Example
//!
//! ```
//! use curator::{merge_all, PackageCurationData};
//!
//! let first = PackageCurationData::new()
//!     .with_concluded_license("MIT".parse().unwrap())
//!     .with_author("original");
//! let second = PackageCurationData::new()
//!     .with_concluded_license("Apache-2.0".parse().unwrap())
//!     .with_author("other");
//!
//! let merged = merge_all([&first, &second]);
//! assert_eq!(merged.concluded_license.unwrap().to_string(), "MIT AND Apache-2.0");
//! assert_eq!(merged.authors.unwrap().len(), 2);
//! ```

pub mod error;
pub mod license;
pub mod merge;
pub mod model;

pub use error::{CuratorError, Result};
pub use license::{Conjunction, SpdxExpression};
pub use merge::{Merge, merge_all};
pub use model::{
    Hash, HashAlgorithm, PackageCurationData, RemoteArtifact, SourceCodeOrigin,
    VcsInfoCurationData, VcsType,
};
