//! Merge policies of the curation record types.

use super::Merge;
use super::strategy::{concat_distinct, conjoin, first_present, nested, union, union_right_biased};
use crate::model::{PackageCurationData, VcsInfoCurationData};

/// Separator between the comments of merged curations.
pub const COMMENT_SEPARATOR: &str = "\n";

impl Merge for VcsInfoCurationData {
    fn merge(&self, other: &Self) -> Self {
        Self {
            vcs_type: first_present(self.vcs_type.as_ref(), other.vcs_type.as_ref()),
            url: first_present(self.url.as_ref(), other.url.as_ref()),
            revision: first_present(self.revision.as_ref(), other.revision.as_ref()),
            path: first_present(self.path.as_ref(), other.path.as_ref()),
        }
    }
}

impl Merge for PackageCurationData {
    fn merge(&self, other: &Self) -> Self {
        Self {
            comment: concat_distinct(
                self.comment.as_deref(),
                other.comment.as_deref(),
                COMMENT_SEPARATOR,
            ),
            purl: first_present(self.purl.as_ref(), other.purl.as_ref()),
            cpe: first_present(self.cpe.as_ref(), other.cpe.as_ref()),
            authors: union(self.authors.as_ref(), other.authors.as_ref()),
            concluded_license: conjoin(
                self.concluded_license.as_ref(),
                other.concluded_license.as_ref(),
            ),
            description: first_present(self.description.as_ref(), other.description.as_ref()),
            homepage_url: first_present(self.homepage_url.as_ref(), other.homepage_url.as_ref()),
            binary_artifact: first_present(
                self.binary_artifact.as_ref(),
                other.binary_artifact.as_ref(),
            ),
            source_artifact: first_present(
                self.source_artifact.as_ref(),
                other.source_artifact.as_ref(),
            ),
            vcs: nested(self.vcs.as_ref(), other.vcs.as_ref()),
            is_metadata_only: first_present(
                self.is_metadata_only.as_ref(),
                other.is_metadata_only.as_ref(),
            ),
            is_modified: first_present(self.is_modified.as_ref(), other.is_modified.as_ref()),
            declared_license_mapping: union_right_biased(
                self.declared_license_mapping.as_ref(),
                other.declared_license_mapping.as_ref(),
            ),
            source_code_origins: first_present(
                self.source_code_origins.as_ref(),
                other.source_code_origins.as_ref(),
            ),
            labels: union_right_biased(self.labels.as_ref(), other.labels.as_ref()),
        }
    }
}
