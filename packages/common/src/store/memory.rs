use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::{ClothingStore, ListOptions, OutfitStore, PreferenceStore, StoreError};
use crate::clothing::ClothingItem;
use crate::outfit::OutfitRecommendation;

/// In-process record store keyed by owner.
///
/// Records are kept per owner in insertion order; equal timestamps keep that
/// order when sorted.
#[derive(Default)]
pub struct MemoryStore {
    items: DashMap<String, Vec<ClothingItem>>,
    outfits: DashMap<String, Vec<OutfitRecommendation>>,
    preferences: DashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first. Reversing before the stable sort puts later inserts first
/// among equal timestamps.
fn ordered<T: Clone>(
    records: &[T],
    created_at: impl Fn(&T) -> DateTime<Utc>,
    options: ListOptions,
) -> Vec<T> {
    let mut out: Vec<T> = records.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    if let Some(limit) = options.limit {
        out.truncate(limit as usize);
    }
    out
}

#[async_trait]
impl ClothingStore for MemoryStore {
    async fn create_item(&self, item: &ClothingItem) -> Result<(), StoreError> {
        self.items
            .entry(item.user_id.clone())
            .or_default()
            .push(item.clone());
        Ok(())
    }

    async fn list_items(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<ClothingItem>, StoreError> {
        Ok(self
            .items
            .get(user_id)
            .map(|items| ordered(items.as_slice(), |i| i.created_at, options))
            .unwrap_or_default())
    }

    async fn count_items(&self, user_id: &str) -> Result<u64, StoreError> {
        Ok(self.items.get(user_id).map_or(0, |items| items.len() as u64))
    }

    async fn delete_item(&self, user_id: &str, id: &str) -> Result<bool, StoreError> {
        let Some(mut items) = self.items.get_mut(user_id) else {
            return Ok(false);
        };
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() != before)
    }
}

#[async_trait]
impl OutfitStore for MemoryStore {
    async fn create_outfit(&self, outfit: &OutfitRecommendation) -> Result<(), StoreError> {
        self.outfits
            .entry(outfit.user_id.clone())
            .or_default()
            .push(outfit.clone());
        Ok(())
    }

    async fn list_outfits(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<OutfitRecommendation>, StoreError> {
        Ok(self
            .outfits
            .get(user_id)
            .map(|outfits| ordered(outfits.as_slice(), |o| o.created_at, options))
            .unwrap_or_default())
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get_preference(&self, user_id: &str, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .preferences
            .get(&(user_id.to_string(), key.to_string()))
            .map(|v| v.value().clone()))
    }

    async fn set_preference(
        &self,
        user_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.preferences
            .insert((user_id.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
