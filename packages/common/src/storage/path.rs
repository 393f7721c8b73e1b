use std::fmt;

use super::error::StorageError;

/// A validated relative path inside a blob store, e.g. `clothing/u1/1700000000000.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobPath(String);

impl BlobPath {
    /// Validate a slash-separated relative path.
    pub fn parse(path: &str) -> Result<Self, StorageError> {
        let trimmed = path.trim();
        let invalid = |msg: &str| Err(StorageError::InvalidPath(msg.to_string()));

        if trimmed.is_empty() {
            return invalid("path cannot be empty");
        }
        if trimmed.len() > 512 {
            return invalid("path exceeds maximum length of 512 characters");
        }
        if trimmed.starts_with('/') || trimmed.ends_with('/') {
            return invalid("path must not start or end with '/'");
        }
        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return invalid("path must not contain empty segments");
            }
            // Also rejects `..` traversal.
            if segment.starts_with('.') {
                return invalid("path segments must not start with '.'");
            }
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'))
        {
            return invalid("path contains invalid characters (allowed: a-zA-Z0-9, /, -, _, .)");
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Destination for an uploaded clothing photo: `clothing/{owner}/{millis}.jpg`.
    ///
    /// Characters outside the allowed set in the owner id are replaced by `_`.
    pub fn clothing_image(user_id: &str, timestamp_millis: i64) -> Self {
        let owner: String = user_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let owner = if owner.is_empty() { "_".to_string() } else { owner };
        Self(format!("clothing/{owner}/{timestamp_millis}.jpg"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for BlobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
