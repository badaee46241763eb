//! Version control location curations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of version control system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VcsType {
    Git,
    /// A Git-Repo manifest repository.
    GitRepo,
    Mercurial,
    Subversion,
    Cvs,
    /// Any other system, kept by its trimmed name.
    ///
    /// Construct this through [`VcsType::for_name`]; a known name held here
    /// resolves to its own variant when deserialized.
    Other(String),
}

impl VcsType {
    /// Resolve a VCS type by name, ignoring case and accepting common aliases.
    pub fn for_name(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "git" => VcsType::Git,
            "gitrepo" | "git-repo" | "repo" => VcsType::GitRepo,
            "hg" | "mercurial" => VcsType::Mercurial,
            "svn" | "subversion" => VcsType::Subversion,
            "cvs" => VcsType::Cvs,
            _ => VcsType::Other(name.to_string()),
        }
    }

    /// Get the canonical name.
    pub fn name(&self) -> &str {
        match self {
            VcsType::Git => "Git",
            VcsType::GitRepo => "GitRepo",
            VcsType::Mercurial => "Mercurial",
            VcsType::Subversion => "Subversion",
            VcsType::Cvs => "CVS",
            VcsType::Other(name) => name,
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for VcsType {
    fn from(name: String) -> Self {
        VcsType::for_name(&name)
    }
}

impl From<VcsType> for String {
    fn from(vcs_type: VcsType) -> Self {
        vcs_type.name().to_string()
    }
}

/// Overrides for the version control location of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsInfoCurationData {
    /// Version control system.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vcs_type: Option<VcsType>,

    /// Repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Revision, e.g. a commit, tag or branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Path inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl VcsInfoCurationData {
    /// Create an empty VCS curation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the VCS type.
    pub fn with_type(mut self, vcs_type: VcsType) -> Self {
        self.vcs_type = Some(vcs_type);
        self
    }

    /// Set the repository URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the revision.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Set the path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name_aliases() {
        assert_eq!(VcsType::for_name("git"), VcsType::Git);
        assert_eq!(VcsType::for_name("GIT"), VcsType::Git);
        assert_eq!(VcsType::for_name("git-repo"), VcsType::GitRepo);
        assert_eq!(VcsType::for_name("hg"), VcsType::Mercurial);
        assert_eq!(VcsType::for_name("SVN"), VcsType::Subversion);
        assert_eq!(VcsType::for_name("cvs"), VcsType::Cvs);
    }

    #[test]
    fn test_unknown_name_is_preserved() {
        let vcs_type = VcsType::for_name("Fossil");
        assert_eq!(vcs_type, VcsType::Other("Fossil".to_string()));
        assert_eq!(vcs_type.to_string(), "Fossil");
    }

    #[test]
    fn test_for_name_trims_every_name() {
        assert_eq!(VcsType::for_name(" git "), VcsType::Git);
        assert_eq!(VcsType::for_name(" Fossil "), VcsType::Other("Fossil".to_string()));
    }

    #[test]
    fn test_other_round_trips_through_serde() {
        let fossil = VcsType::for_name("Fossil");
        let json = serde_json::to_string(&fossil).unwrap();
        assert_eq!(serde_json::from_str::<VcsType>(&json).unwrap(), fossil);

        let misnamed: VcsType = serde_json::from_str(r#""git""#).unwrap();
        assert_eq!(misnamed, VcsType::Git);
    }

    #[test]
    fn test_serde_uses_type_key() {
        let vcs = VcsInfoCurationData::new()
            .with_type(VcsType::Subversion)
            .with_url("https://svn.example.org/repo");
        let json = serde_json::to_value(&vcs).unwrap();

        assert_eq!(json["type"], "Subversion");
        assert!(json.get("revision").is_none());

        let back: VcsInfoCurationData = serde_json::from_value(json).unwrap();
        assert_eq!(back, vcs);
    }
}
