pub mod ai;
pub mod classify;
pub mod clothing;
pub mod config;
pub mod error;
pub mod gate;
pub mod i18n;
pub mod outfit;
pub mod recommend;
pub mod session;
pub mod stats;
pub mod storage;
pub mod store;
pub mod wardrobe;

#[cfg(test)]
mod testing;

pub use classify::{Classifier, StagedItem};
pub use clothing::{Category, CategoryFilter, ClothingAnalysis, ClothingItem, ItemDraft};
pub use error::WardrobeError;
pub use gate::{Gate, UpgradeOffer, UpgradeTier};
pub use i18n::{Language, Localizer};
pub use outfit::{OutfitRecommendation, OutfitSuggestion, QuizAnswers};
pub use recommend::Stylist;
pub use session::Session;
pub use stats::WardrobeStats;
pub use wardrobe::{SaveOutcome, Wardrobe};
