//! Record-store seams for the two owner-scoped collections and the
//! per-owner preference map.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::clothing::ClothingItem;
use crate::outfit::OutfitRecommendation;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record store error: {0}")]
    Backend(String),

    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Limit for a list call. Results are always newest first and the owner
/// filter is always applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub limit: Option<u64>,
}

impl ListOptions {
    pub fn newest_first() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
pub trait ClothingStore: Send + Sync {
    async fn create_item(&self, item: &ClothingItem) -> Result<(), StoreError>;

    async fn list_items(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<ClothingItem>, StoreError>;

    async fn count_items(&self, user_id: &str) -> Result<u64, StoreError> {
        Ok(self.list_items(user_id, ListOptions::default()).await?.len() as u64)
    }

    /// Delete one item owned by `user_id`. Returns `false` when no such item exists.
    async fn delete_item(&self, user_id: &str, id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait OutfitStore: Send + Sync {
    async fn create_outfit(&self, outfit: &OutfitRecommendation) -> Result<(), StoreError>;

    async fn list_outfits(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<OutfitRecommendation>, StoreError>;

    async fn count_outfits(&self, user_id: &str) -> Result<u64, StoreError> {
        Ok(self.list_outfits(user_id, ListOptions::default()).await?.len() as u64)
    }
}

/// Small per-owner key-value map for local preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get_preference(&self, user_id: &str, key: &str) -> Result<Option<String>, StoreError>;

    async fn set_preference(&self, user_id: &str, key: &str, value: &str)
    -> Result<(), StoreError>;
}
