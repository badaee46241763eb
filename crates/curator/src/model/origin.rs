//! Where to look for the source code of a package.

use serde::{Deserialize, Serialize};

/// A place source code can be obtained from.
///
/// A list of origins declares the order in which they should be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceCodeOrigin {
    /// The version control repository.
    Vcs,
    /// The published source artifact.
    Artifact,
}
