use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use wardrobe_common::WardrobeError;
use wardrobe_common::gate::{Gate, UpgradeOffer, UpgradeTier};
use wardrobe_common::i18n::{Language, translate};
use wardrobe_common::outfit::OutfitRecommendation;
use wardrobe_common::storage::StorageError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `TOKEN_MISSING`,
    /// `TOKEN_INVALID`, `UPGRADE_REQUIRED`, `NOT_FOUND`, `EMPTY_WARDROBE`,
    /// `AI_UNAVAILABLE`, `PARTIAL_SAVE`, `INTERNAL_ERROR`.
    #[schema(example = "UPGRADE_REQUIRED")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Upgrade to Pro for $10 to add up to 100 clothing items")]
    pub message: String,
    /// Present with `UPGRADE_REQUIRED`: the tier that unblocks the save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<UpgradeOffer>,
    /// Present with `PARTIAL_SAVE`: recommendations persisted before the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<Vec<OutfitRecommendation>>,
}

impl ErrorBody {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            offer: None,
            saved: None,
        }
    }
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    TokenMissing,
    TokenInvalid,
    UpgradeRequired {
        offer: UpgradeOffer,
        message: String,
    },
    NotFound(String),
    EmptyWardrobe,
    AiUnavailable(String),
    PartialSave {
        saved: Vec<OutfitRecommendation>,
        detail: String,
    },
    Internal(String),
}

impl AppError {
    /// Upgrade error with the offer text in `language`.
    pub fn upgrade_required(offer: UpgradeOffer, language: Language) -> Self {
        let message = translate(language, offer.required_tier.message_key()).to_string();
        AppError::UpgradeRequired { offer, message }
    }

    /// The accepted tier does not cover `count` items: offer the tier the gate
    /// requires now, worded in `language`.
    pub fn upgrade_insufficient(tier: UpgradeTier, count: u64, language: Language) -> Self {
        let needed = match Gate::for_item_count(count) {
            Gate::Requires(needed) => needed,
            Gate::Open => UpgradeTier::Pro,
        };
        tracing::info!(
            "{} does not cover {} items, offering {}",
            tier.name(),
            count,
            needed.name()
        );
        Self::upgrade_required(UpgradeOffer::new(count, needed), language)
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("VALIDATION_ERROR", msg),
            ),
            AppError::TokenMissing => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("TOKEN_MISSING", "Authentication required"),
            ),
            AppError::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("TOKEN_INVALID", "Invalid or expired token"),
            ),
            AppError::UpgradeRequired { offer, message } => (
                StatusCode::PAYMENT_REQUIRED,
                ErrorBody {
                    offer: Some(offer),
                    ..ErrorBody::new("UPGRADE_REQUIRED", message)
                },
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new("NOT_FOUND", msg)),
            AppError::EmptyWardrobe => (
                StatusCode::CONFLICT,
                ErrorBody::new(
                    "EMPTY_WARDROBE",
                    "Add clothing items before asking for outfits",
                ),
            ),
            AppError::AiUnavailable(detail) => {
                tracing::warn!("AI service failure: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::new("AI_UNAVAILABLE", "The AI service could not be reached"),
                )
            }
            AppError::PartialSave { saved, detail } => {
                tracing::error!("Partial save: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        saved: Some(saved),
                        ..ErrorBody::new("PARTIAL_SAVE", detail)
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("INTERNAL_ERROR", "An unexpected error occurred"),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => AppError::NotFound("Image not found".into()),
            StorageError::InvalidPath(msg) => AppError::Validation(msg),
            StorageError::SizeLimitExceeded { .. } => AppError::Validation(err.to_string()),
            StorageError::Io(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<WardrobeError> for AppError {
    fn from(err: WardrobeError) -> Self {
        match err {
            WardrobeError::Storage(e) => e.into(),
            WardrobeError::Store(e) => AppError::Internal(e.to_string()),
            WardrobeError::Ai(e) => AppError::AiUnavailable(e.to_string()),
            WardrobeError::NotFound(msg) => AppError::NotFound(msg),
            WardrobeError::Invalid(msg) => AppError::Validation(msg),
            WardrobeError::EmptyWardrobe => AppError::EmptyWardrobe,
            WardrobeError::UpgradeInsufficient { tier, count } => {
                AppError::upgrade_insufficient(tier, count, Language::En)
            }
            WardrobeError::PartialSave {
                saved,
                total,
                source,
            } => {
                let detail = format!(
                    "Saved {} of {total} recommendations before failing: {source}",
                    saved.len()
                );
                AppError::PartialSave { saved, detail }
            }
        }
    }
}
