use thiserror::Error;

use crate::ai::AiError;
use crate::gate::UpgradeTier;
use crate::outfit::OutfitRecommendation;
use crate::storage::StorageError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Ai(#[from] AiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("The wardrobe is empty")]
    EmptyWardrobe,

    #[error("{tier:?} allows {limit} items but the wardrobe already holds {count}", limit = .tier.item_limit())]
    UpgradeInsufficient { tier: UpgradeTier, count: u64 },

    /// Saving a batch of recommendations stopped part way; `saved` were persisted.
    #[error("Saved {} of {total} recommendations before failing: {source}", .saved.len())]
    PartialSave {
        saved: Vec<OutfitRecommendation>,
        total: usize,
        source: StoreError,
    },
}
