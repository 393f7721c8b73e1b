use thiserror::Error;

/// Failures of a [`BlobStore`](super::BlobStore) call.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no image stored at {0}")]
    NotFound(String),

    #[error("image storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Paths are relative and no segment may start with `.`.
    #[error("bad image path: {0}")]
    InvalidPath(String),

    #[error("image is {actual} bytes, over the {limit}-byte upload limit")]
    SizeLimitExceeded { actual: u64, limit: u64 },
}
