use std::collections::HashMap;

use serde::Serialize;

use crate::clothing::ClothingItem;
use crate::error::WardrobeError;
use crate::session::Session;
use crate::store::{ClothingStore, ListOptions, OutfitStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct WardrobeStats {
    pub total_items: u64,
    pub total_outfits: u64,
    /// `None` while the wardrobe is empty.
    pub favorite_category: Option<String>,
}

/// The most frequent category. On a tie the category first seen later wins.
pub fn favorite_category(items: &[ClothingItem]) -> Option<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.category.as_str()).or_insert(0);
        if *count == 0 {
            order.push(item.category.as_str());
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for category in order {
        let count = counts[category];
        match best {
            Some((_, top)) if top > count => {}
            _ => best = Some((category, count)),
        }
    }
    best.map(|(category, _)| category.to_string())
}

pub async fn compute(
    session: &Session,
    items: &dyn ClothingStore,
    outfits: &dyn OutfitStore,
) -> Result<WardrobeStats, WardrobeError> {
    let wardrobe = items
        .list_items(&session.user_id, ListOptions::default())
        .await?;
    let total_outfits = outfits.count_outfits(&session.user_id).await?;

    Ok(WardrobeStats {
        total_items: wardrobe.len() as u64,
        total_outfits,
        favorite_category: favorite_category(&wardrobe),
    })
}
