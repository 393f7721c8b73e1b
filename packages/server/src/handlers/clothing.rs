use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;
use wardrobe_common::clothing::{CategoryFilter, ClothingItem, ItemDraft};
use wardrobe_common::{SaveOutcome, WardrobeError};

use crate::config::AppConfig;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::clothing::{
    AnalyzeResponse, ClothingListQuery, ClothingListResponse, ClothingOptionsResponse,
    UpgradeRequest,
};
use crate::state::AppState;

/// Multipart limit for image uploads: the blob limit plus room for form framing.
pub fn image_upload_body_limit(config: &AppConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.storage.max_blob_size as usize + 64 * 1024)
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Clothing",
    operation_id = "analyzeClothing",
    summary = "Upload and classify a clothing photo",
    description = "Stores the `image` multipart field under the caller's clothing prefix and asks \
        the AI service to classify it. An unparseable classification is replaced by a default \
        record and flagged with `fallback: true`. Nothing is saved to the wardrobe yet.",
    request_body(content_type = "multipart/form-data", description = "Image upload"),
    responses(
        (status = 200, description = "Classified upload", body = AnalyzeResponse),
        (status = 400, description = "Missing or oversized image (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 502, description = "AI service failed (AI_UNAVAILABLE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, multipart), fields(user_id = %auth_user.user_id))]
pub async fn analyze_clothing(
    auth_user: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read image: {e}")))?;
            image = Some(bytes);
        }
    }

    let image = image.ok_or_else(|| AppError::Validation("Missing 'image' field".into()))?;
    let staged = state
        .classifier()
        .analyze(&auth_user.session(), &image)
        .await?;

    Ok(Json(AnalyzeResponse::from(staged)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Clothing",
    operation_id = "saveClothing",
    summary = "Save an edited item to the wardrobe",
    description = "Recomputes the tier gate from the caller's item count. At 15 items and above \
        the item is not saved and a 402 carries the upgrade offer.",
    request_body = ItemDraft,
    responses(
        (status = 201, description = "Item saved", body = ClothingItem),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 402, description = "Tier gate reached (UPGRADE_REQUIRED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, draft), fields(user_id = %auth_user.user_id))]
pub async fn save_clothing(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(draft): AppJson<ItemDraft>,
) -> Result<impl IntoResponse, AppError> {
    let session = auth_user.session();
    match state.wardrobe().save(&session, draft).await? {
        SaveOutcome::Saved(item) => Ok((StatusCode::CREATED, Json(item))),
        SaveOutcome::UpgradeRequired(offer) => {
            let language = state.localizer().load(&session).await;
            Err(AppError::upgrade_required(offer, language))
        }
    }
}

#[utoipa::path(
    post,
    path = "/upgrade",
    tag = "Clothing",
    operation_id = "upgradeAndSave",
    summary = "Accept an upgrade offer and save the pending item",
    description = "Simulated purchase: no payment is taken and the tier is not remembered. \
        The item is saved when the tier's limit exceeds the current item count.",
    request_body = UpgradeRequest,
    responses(
        (status = 201, description = "Item saved", body = ClothingItem),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 402, description = "Tier too small for the wardrobe (UPGRADE_REQUIRED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = %auth_user.user_id, tier = ?payload.tier))]
pub async fn upgrade_and_save(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpgradeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = auth_user.session();
    match state
        .wardrobe()
        .save_after_upgrade(&session, payload.item, payload.tier)
        .await
    {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(WardrobeError::UpgradeInsufficient { tier, count }) => {
            let language = state.localizer().load(&session).await;
            Err(AppError::upgrade_insufficient(tier, count, language))
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Clothing",
    operation_id = "listClothing",
    summary = "List wardrobe items",
    description = "Returns the caller's items newest first. `category=all` or no category \
        returns everything; any other value is matched exactly.",
    params(ClothingListQuery),
    responses(
        (status = 200, description = "Wardrobe items", body = ClothingListResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = %auth_user.user_id))]
pub async fn list_clothing(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ClothingListQuery>,
) -> Result<Json<ClothingListResponse>, AppError> {
    let filter = query
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or_default();
    let items = state.wardrobe().list(&auth_user.session(), &filter).await?;
    let total = items.len() as u64;

    Ok(Json(ClothingListResponse { items, total }))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Clothing",
    operation_id = "deleteClothing",
    summary = "Delete a wardrobe item",
    description = "Removes exactly one of the caller's items. The stored image is kept.",
    params(("id" = String, Path, description = "Clothing item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "No such item for this owner (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn delete_clothing(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.wardrobe().delete(&auth_user.session(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/options",
    tag = "Clothing",
    operation_id = "clothingOptions",
    summary = "Edit-form suggestion lists",
    description = "Categories with localized labels and subcategories, plus colors, styles and seasons.",
    responses(
        (status = 200, description = "Suggestion lists", body = ClothingOptionsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn clothing_options(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Json<ClothingOptionsResponse> {
    let language = state.localizer().load(&auth_user.session()).await;
    Json(ClothingOptionsResponse::localized(language))
}
