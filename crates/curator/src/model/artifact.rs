//! Remote artifacts and their content hashes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Algorithm used to compute a [`Hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
    /// The value does not look like any supported digest.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl HashAlgorithm {
    /// Algorithms that can be detected from the digest length.
    const DETECTABLE: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Get the display name.
    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Unknown => "UNKNOWN",
        }
    }

    /// Length of the hex-encoded digest, if fixed.
    pub fn hex_len(&self) -> Option<usize> {
        match self {
            HashAlgorithm::Md5 => Some(32),
            HashAlgorithm::Sha1 => Some(40),
            HashAlgorithm::Sha256 => Some(64),
            HashAlgorithm::Sha384 => Some(96),
            HashAlgorithm::Sha512 => Some(128),
            HashAlgorithm::Unknown => None,
        }
    }

    /// Guess the algorithm from a hex-encoded digest.
    pub fn detect(value: &str) -> Self {
        if !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return HashAlgorithm::Unknown;
        }

        Self::DETECTABLE
            .into_iter()
            .find(|algorithm| algorithm.hex_len() == Some(value.len()))
            .unwrap_or(HashAlgorithm::Unknown)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A content hash together with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash {
    /// The digest value, usually hex-encoded.
    pub value: String,

    /// Algorithm of the digest.
    pub algorithm: HashAlgorithm,
}

impl Hash {
    /// Create a hash with an explicit algorithm.
    pub fn new(value: impl Into<String>, algorithm: HashAlgorithm) -> Self {
        Self {
            value: value.into(),
            algorithm,
        }
    }

    /// Create a hash, detecting the algorithm from the value.
    pub fn create(value: impl Into<String>) -> Self {
        let value = value.into();
        let algorithm = HashAlgorithm::detect(&value);
        Self { value, algorithm }
    }
}

/// An artifact downloadable from a URL, identified by its hash.
///
/// Always handled as a whole; URL and hash are never merged separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteArtifact {
    /// Download location.
    pub url: String,

    /// Expected hash of the downloaded content.
    pub hash: Hash,
}

impl RemoteArtifact {
    /// Create a new remote artifact.
    pub fn new(url: impl Into<String>, hash: Hash) -> Self {
        Self {
            url: url.into(),
            hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_length() {
        assert_eq!(HashAlgorithm::detect(&"a".repeat(32)), HashAlgorithm::Md5);
        assert_eq!(HashAlgorithm::detect(&"b".repeat(40)), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::detect(&"0".repeat(64)), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::detect(&"F".repeat(96)), HashAlgorithm::Sha384);
        assert_eq!(HashAlgorithm::detect(&"9".repeat(128)), HashAlgorithm::Sha512);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(HashAlgorithm::detect("original"), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::detect(&"z".repeat(40)), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::detect(""), HashAlgorithm::Unknown);
    }

    #[test]
    fn test_create_keeps_value() {
        let hash = Hash::create("da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(hash.algorithm, HashAlgorithm::Sha1);
        assert_eq!(hash.value, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_serialize_algorithm_name() {
        let artifact = RemoteArtifact::new("https://example.org/a.tgz", Hash::create("x"));
        let json = serde_json::to_value(&artifact).unwrap();

        assert_eq!(json["hash"]["algorithm"], "UNKNOWN");
        assert_eq!(
            serde_json::to_value(HashAlgorithm::Sha256).unwrap(),
            HashAlgorithm::Sha256.label()
        );
    }
}
