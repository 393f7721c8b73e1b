use axum::extract::State;
use axum::Json;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::preference::{LanguageResponse, TranslationsResponse, UpdateLanguageRequest};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/preferences/language",
    tag = "Preferences",
    operation_id = "getLanguage",
    summary = "Current language",
    description = "The caller's stored language. Defaults to `en` when unset or unreadable.",
    responses(
        (status = 200, description = "Language", body = LanguageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_language(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Json<LanguageResponse> {
    let language = state.localizer().load(&auth_user.session()).await;
    Json(LanguageResponse { language })
}

#[utoipa::path(
    put,
    path = "/preferences/language",
    tag = "Preferences",
    operation_id = "setLanguage",
    summary = "Change language",
    description = "Stores `en` or `es`. If the write fails the previous language stays in effect.",
    request_body = UpdateLanguageRequest,
    responses(
        (status = 200, description = "Language stored", body = LanguageResponse),
        (status = 400, description = "Unsupported code (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = %auth_user.user_id))]
pub async fn set_language(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateLanguageRequest>,
) -> Result<Json<LanguageResponse>, AppError> {
    let language = payload.validate()?;
    let language = state
        .localizer()
        .change(&auth_user.session(), language)
        .await?;
    Ok(Json(LanguageResponse { language }))
}

#[utoipa::path(
    get,
    path = "/translations",
    tag = "Preferences",
    operation_id = "getTranslations",
    summary = "Translation table",
    description = "Every UI string in the caller's language, keyed by translation key.",
    responses(
        (status = 200, description = "Translations", body = TranslationsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_translations(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Json<TranslationsResponse> {
    let language = state.localizer().load(&auth_user.session()).await;
    Json(TranslationsResponse::for_language(language))
}
