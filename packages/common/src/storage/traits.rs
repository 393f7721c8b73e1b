use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::error::StorageError;
use super::path::BlobPath;

/// Type alias for a boxed async reader.
pub type BoxReader = Box<dyn AsyncRead + Unpin + Send>;

/// Path-addressed blob storage that hands out public URLs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes at `path`, replacing any existing blob, and return its public URL.
    async fn upload(&self, path: &BlobPath, data: &[u8]) -> Result<String, StorageError>;

    /// Public URL under which the blob at `path` is served.
    fn public_url(&self, path: &BlobPath) -> String;

    /// Retrieve all bytes for a blob.
    async fn get(&self, path: &BlobPath) -> Result<Vec<u8>, StorageError> {
        let mut reader = self.get_stream(path).await?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    /// Retrieve a blob as a streaming async reader.
    async fn get_stream(&self, path: &BlobPath) -> Result<BoxReader, StorageError>;

    /// Check whether a blob exists.
    async fn exists(&self, path: &BlobPath) -> Result<bool, StorageError>;

    /// Delete a blob.
    ///
    /// Returns `true` if the blob was deleted, `false` if it did not exist.
    async fn delete(&self, path: &BlobPath) -> Result<bool, StorageError>;
}
