use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::clothing::{CategoryFilter, ClothingItem, ItemDraft};
use crate::error::WardrobeError;
use crate::gate::{Gate, UpgradeOffer, UpgradeTier};
use crate::session::Session;
use crate::store::{ClothingStore, ListOptions};

/// Result of a gated save.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(ClothingItem),
    /// Nothing was persisted; the owner must accept the offer first.
    UpgradeRequired(UpgradeOffer),
}

/// Owner-scoped wardrobe operations: listing, gated saves, deletion.
#[derive(Clone)]
pub struct Wardrobe {
    items: Arc<dyn ClothingStore>,
}

impl Wardrobe {
    pub fn new(items: Arc<dyn ClothingStore>) -> Self {
        Self { items }
    }

    /// The owner's items, newest first, narrowed by `filter`.
    pub async fn list(
        &self,
        session: &Session,
        filter: &CategoryFilter,
    ) -> Result<Vec<ClothingItem>, WardrobeError> {
        let items = self
            .items
            .list_items(&session.user_id, ListOptions::newest_first())
            .await?;
        Ok(filter.apply(items))
    }

    pub async fn count(&self, session: &Session) -> Result<u64, WardrobeError> {
        Ok(self.items.count_items(&session.user_id).await?)
    }

    /// Save a draft unless the current item count triggers the tier gate.
    ///
    /// The count and the insert are separate calls, so concurrent saves from
    /// one owner can each pass the gate. One owner saves one item at a time.
    pub async fn save(&self, session: &Session, draft: ItemDraft) -> Result<SaveOutcome, WardrobeError> {
        validate_draft(&draft)?;

        let count = self.count(session).await?;
        match Gate::for_item_count(count) {
            Gate::Open => Ok(SaveOutcome::Saved(self.persist(session, draft).await?)),
            Gate::Requires(tier) => {
                info!(user_id = %session.user_id, count, tier = tier.name(), "Save blocked by tier gate");
                Ok(SaveOutcome::UpgradeRequired(UpgradeOffer::new(count, tier)))
            }
        }
    }

    /// Simulated purchase of `tier` followed by the save it unblocks.
    ///
    /// No payment happens and nothing about the purchase is stored: the
    /// accepted tier authorizes this one save when its limit is above the
    /// current count.
    pub async fn save_after_upgrade(
        &self,
        session: &Session,
        draft: ItemDraft,
        tier: UpgradeTier,
    ) -> Result<ClothingItem, WardrobeError> {
        validate_draft(&draft)?;

        let count = self.count(session).await?;
        if count >= tier.item_limit() {
            return Err(WardrobeError::UpgradeInsufficient { tier, count });
        }

        info!(user_id = %session.user_id, tier = tier.name(), price_usd = tier.price_usd(), "Simulated upgrade accepted");
        self.persist(session, draft).await
    }

    /// Remove one of the owner's items.
    pub async fn delete(&self, session: &Session, id: &str) -> Result<(), WardrobeError> {
        if self.items.delete_item(&session.user_id, id).await? {
            info!(user_id = %session.user_id, item_id = id, "Deleted clothing item");
            Ok(())
        } else {
            Err(WardrobeError::NotFound(format!("clothing item {id}")))
        }
    }

    async fn persist(&self, session: &Session, draft: ItemDraft) -> Result<ClothingItem, WardrobeError> {
        let item = draft.into_item(Uuid::now_v7().to_string(), session.user_id.clone(), Utc::now());
        self.items.create_item(&item).await?;
        info!(user_id = %session.user_id, item_id = %item.id, category = %item.category, "Saved clothing item");
        Ok(item)
    }
}

fn validate_draft(draft: &ItemDraft) -> Result<(), WardrobeError> {
    if draft.image_url.trim().is_empty() {
        return Err(WardrobeError::Invalid("image_url must not be empty".into()));
    }
    if draft.category.trim().is_empty() {
        return Err(WardrobeError::Invalid("category must not be empty".into()));
    }
    Ok(())
}
