use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed clothing categories offered by the edit form and the wardrobe filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
    Outerwear,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Accessories,
        Category::Outerwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Outerwear => "outerwear",
        }
    }

    /// Suggested subcategories for this category.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Self::Tops => &[
                "t-shirt", "shirt", "blouse", "tank top", "sweater", "hoodie", "polo",
                "crop top", "cardigan",
            ],
            Self::Bottoms => &[
                "jeans", "trousers", "shorts", "skirt", "leggings", "joggers", "chinos",
            ],
            Self::Shoes => &[
                "sneakers", "boots", "sandals", "heels", "loafers", "flats", "dress shoes",
            ],
            Self::Accessories => &[
                "hat", "scarf", "belt", "bag", "watch", "jewelry", "sunglasses",
            ],
            Self::Outerwear => &[
                "jacket", "coat", "blazer", "raincoat", "vest", "parka",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

pub const COLORS: &[&str] = &[
    "black", "white", "gray", "navy", "blue", "red", "green", "yellow", "orange", "pink",
    "purple", "brown", "beige", "multicolor",
];

pub const STYLES: &[&str] = &[
    "casual", "formal", "sporty", "business", "streetwear", "elegant", "vintage", "bohemian",
];

pub const SEASONS: &[&str] = &["spring", "summer", "fall", "winter", "all"];

/// A stored wardrobe entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClothingItem {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    /// Persisted as received; not checked against [`Category`].
    pub category: String,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub season: Option<String>,
    pub ai_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Attributes the classifier asks the AI service for.
///
/// Every field is optional on input because the service output is not
/// guaranteed to carry all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClothingAnalysis {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClothingAnalysis {
    /// Substituted whenever the classification response is not parseable.
    pub fn fallback() -> Self {
        Self {
            category: Some("tops".into()),
            subcategory: Some("clothing item".into()),
            color: Some("unknown".into()),
            style: Some("casual".into()),
            season: Some("all".into()),
            description: Some("Clothing item".into()),
        }
    }
}

/// The user-editable form for a staged item, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemDraft {
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub color: String,
    pub style: String,
    pub season: String,
    #[serde(default)]
    pub description: String,
}

impl ItemDraft {
    /// Fill the edit form from an analysis, defaulting blank fields.
    pub fn from_analysis(image_url: impl Into<String>, analysis: &ClothingAnalysis) -> Self {
        fn or(value: &Option<String>, default: &str) -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            image_url: image_url.into(),
            category: or(&analysis.category, "tops"),
            subcategory: or(&analysis.subcategory, ""),
            color: or(&analysis.color, "black"),
            style: or(&analysis.style, "casual"),
            season: or(&analysis.season, "all"),
            description: or(&analysis.description, ""),
        }
    }

    /// Switching category clears the subcategory, which belonged to the old one.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.subcategory.clear();
    }

    pub(crate) fn into_item(self, id: String, user_id: String, now: DateTime<Utc>) -> ClothingItem {
        fn non_empty(s: String) -> Option<String> {
            if s.is_empty() { None } else { Some(s) }
        }

        ClothingItem {
            id,
            user_id,
            image_url: self.image_url,
            category: self.category,
            subcategory: non_empty(self.subcategory),
            color: non_empty(self.color),
            style: non_empty(self.style),
            season: non_empty(self.season),
            ai_description: non_empty(self.description),
            created_at: now,
        }
    }
}

/// Wardrobe filter selected from the category tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` selects everything; any other value is an exact category match.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }

    pub fn apply(&self, items: Vec<ClothingItem>) -> Vec<ClothingItem> {
        match self {
            Self::All => items,
            Self::Only(_) => items.into_iter().filter(|i| self.matches(i)).collect(),
        }
    }
}
