use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::BufReader;

use super::error::StorageError;
use super::path::BlobPath;
use super::traits::{BlobStore, BoxReader};

/// Filesystem-backed blob store.
///
/// Blobs live at `{base_path}/{blob path}` and are served publicly as
/// `{public_base_url}/{blob path}`.
pub struct FilesystemBlobStore {
    base_path: PathBuf,
    public_base_url: String,
    max_size: u64,
}

impl FilesystemBlobStore {
    /// Create a new filesystem blob store.
    pub async fn new(
        base_path: PathBuf,
        public_base_url: impl Into<String>,
        max_size: u64,
    ) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            max_size,
        })
    }

    fn blob_path(&self, path: &BlobPath) -> PathBuf {
        path.segments()
            .fold(self.base_path.clone(), |acc, segment| acc.join(segment))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn upload(&self, path: &BlobPath, data: &[u8]) -> Result<String, StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let blob_path = self.blob_path(path);
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Some(parent) = blob_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Upsert: the rename replaces any blob already at this path.
        if let Err(e) = fs::rename(&temp_path, &blob_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(self.public_url(path))
    }

    fn public_url(&self, path: &BlobPath) -> String {
        format!("{}/{}", self.public_base_url, path)
    }

    async fn get_stream(&self, path: &BlobPath) -> Result<BoxReader, StorageError> {
        match fs::File::open(self.blob_path(path)).await {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, path: &BlobPath) -> Result<bool, StorageError> {
        Ok(fs::try_exists(self.blob_path(path)).await?)
    }

    async fn delete(&self, path: &BlobPath) -> Result<bool, StorageError> {
        match fs::remove_file(self.blob_path(path)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
