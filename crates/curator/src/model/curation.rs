//! The curation record for a single package.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::license::SpdxExpression;

use super::artifact::RemoteArtifact;
use super::origin::SourceCodeOrigin;
use super::vcs::VcsInfoCurationData;

/// Corrections and additions to the metadata of one package.
///
/// Every field is optional. An absent field carries no information, which is
/// different from a collection that is present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCurationData {
    /// Free-text explanation of the curation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// CPE identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,

    /// Package authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<IndexSet<String>>,

    /// The license concluded for the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concluded_license: Option<SpdxExpression>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,

    /// The binary artifact of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_artifact: Option<RemoteArtifact>,

    /// The source artifact of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_artifact: Option<RemoteArtifact>,

    /// Version control location overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<VcsInfoCurationData>,

    /// Whether the package only consists of metadata, without any code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_metadata_only: Option<bool>,

    /// Whether the package was modified compared to its upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_modified: Option<bool>,

    /// Maps raw declared license strings to normalized expressions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_license_mapping: Option<IndexMap<String, SpdxExpression>>,

    /// Order in which source code origins should be tried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code_origins: Option<Vec<SourceCodeOrigin>>,

    /// Free-form key-value tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<IndexMap<String, String>>,
}

impl PackageCurationData {
    /// Create an empty curation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of fields that are set.
    pub fn set_field_count(&self) -> usize {
        [
            self.comment.is_some(),
            self.purl.is_some(),
            self.cpe.is_some(),
            self.authors.is_some(),
            self.concluded_license.is_some(),
            self.description.is_some(),
            self.homepage_url.is_some(),
            self.binary_artifact.is_some(),
            self.source_artifact.is_some(),
            self.vcs.is_some(),
            self.is_metadata_only.is_some(),
            self.is_modified.is_some(),
            self.declared_license_mapping.is_some(),
            self.source_code_origins.is_some(),
            self.labels.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Parse a curation from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to single-line JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    pub fn with_cpe(mut self, cpe: impl Into<String>) -> Self {
        self.cpe = Some(cpe.into());
        self
    }

    /// Add an author, creating the author set if needed.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors
            .get_or_insert_with(IndexSet::new)
            .insert(author.into());
        self
    }

    /// Replace the author set.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_concluded_license(mut self, license: SpdxExpression) -> Self {
        self.concluded_license = Some(license);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_homepage_url(mut self, url: impl Into<String>) -> Self {
        self.homepage_url = Some(url.into());
        self
    }

    pub fn with_binary_artifact(mut self, artifact: RemoteArtifact) -> Self {
        self.binary_artifact = Some(artifact);
        self
    }

    pub fn with_source_artifact(mut self, artifact: RemoteArtifact) -> Self {
        self.source_artifact = Some(artifact);
        self
    }

    pub fn with_vcs(mut self, vcs: VcsInfoCurationData) -> Self {
        self.vcs = Some(vcs);
        self
    }

    pub fn with_metadata_only(mut self, is_metadata_only: bool) -> Self {
        self.is_metadata_only = Some(is_metadata_only);
        self
    }

    pub fn with_modified(mut self, is_modified: bool) -> Self {
        self.is_modified = Some(is_modified);
        self
    }

    /// Add a declared license mapping entry, creating the map if needed.
    pub fn with_declared_license_mapping(
        mut self,
        declared: impl Into<String>,
        license: SpdxExpression,
    ) -> Self {
        self.declared_license_mapping
            .get_or_insert_with(IndexMap::new)
            .insert(declared.into(), license);
        self
    }

    pub fn with_source_code_origins(mut self, origins: Vec<SourceCodeOrigin>) -> Self {
        self.source_code_origins = Some(origins);
        self
    }

    /// Add a label, creating the label map if needed.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }
}
