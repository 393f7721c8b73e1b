use serde::{Deserialize, Serialize};
use wardrobe_common::i18n::{Language, LocalizedQuestion};
use wardrobe_common::outfit::OutfitRecommendation;

#[derive(Serialize, utoipa::ToSchema)]
pub struct QuizResponse {
    pub language: Language,
    pub questions: Vec<LocalizedQuestion>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct HistoryQuery {
    /// Maximum records to return (1-100). Default: 10.
    #[param(example = 10)]
    pub limit: Option<u64>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RecommendationListResponse {
    pub recommendations: Vec<OutfitRecommendation>,
    pub total: u64,
}

impl From<Vec<OutfitRecommendation>> for RecommendationListResponse {
    fn from(recommendations: Vec<OutfitRecommendation>) -> Self {
        let total = recommendations.len() as u64;
        Self {
            recommendations,
            total,
        }
    }
}
