use serde::{Deserialize, Serialize};
use wardrobe_common::clothing::{COLORS, Category, ClothingItem, ItemDraft, SEASONS, STYLES};
use wardrobe_common::classify::StagedItem;
use wardrobe_common::gate::UpgradeTier;
use wardrobe_common::i18n::{Language, translate};

/// Response for an analyzed upload: the classification and the prefilled edit form.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AnalyzeResponse {
    pub staged: StagedItem,
    /// Edit-form values with defaults applied; post this (edited) to save.
    pub draft: ItemDraft,
}

impl From<StagedItem> for AnalyzeResponse {
    fn from(staged: StagedItem) -> Self {
        let draft = staged.draft();
        Self { staged, draft }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ClothingListQuery {
    /// A category name, or `all` (the default) for every item.
    #[param(example = "tops")]
    pub category: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ClothingListResponse {
    pub items: Vec<ClothingItem>,
    pub total: u64,
}

/// Simulated purchase of a tier followed by the save it unblocks.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpgradeRequest {
    pub tier: UpgradeTier,
    pub item: ItemDraft,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryOption {
    #[schema(example = "shoes")]
    pub value: String,
    /// Label in the caller's language.
    #[schema(example = "Shoes")]
    pub label: String,
    pub subcategories: Vec<String>,
}

/// Suggestion lists for the edit form. Values outside them are still accepted.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ClothingOptionsResponse {
    pub categories: Vec<CategoryOption>,
    pub colors: Vec<String>,
    pub styles: Vec<String>,
    pub seasons: Vec<String>,
}

impl ClothingOptionsResponse {
    pub fn localized(language: Language) -> Self {
        let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
        Self {
            categories: Category::ALL
                .iter()
                .map(|category| CategoryOption {
                    value: category.as_str().to_string(),
                    label: translate(language, category.as_str()).to_string(),
                    subcategories: owned(category.subcategories()),
                })
                .collect(),
            colors: owned(COLORS),
            styles: owned(STYLES),
            seasons: owned(SEASONS),
        }
    }
}
