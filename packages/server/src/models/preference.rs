use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wardrobe_common::i18n::Language;

use crate::error::AppError;

#[derive(Serialize, utoipa::ToSchema)]
pub struct LanguageResponse {
    pub language: Language,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateLanguageRequest {
    /// `en` or `es`.
    #[schema(example = "es")]
    pub language: String,
}

impl UpdateLanguageRequest {
    pub fn validate(&self) -> Result<Language, AppError> {
        Language::parse(&self.language).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported language '{}', expected 'en' or 'es'",
                self.language
            ))
        })
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TranslationsResponse {
    pub language: Language,
    pub translations: BTreeMap<String, String>,
}

impl TranslationsResponse {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            translations: language
                .table()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
