//! Data model for package curations.

mod artifact;
mod curation;
mod origin;
mod vcs;

pub use artifact::{Hash, HashAlgorithm, RemoteArtifact};
pub use curation::PackageCurationData;
pub use origin::SourceCodeOrigin;
pub use vcs::{VcsInfoCurationData, VcsType};
