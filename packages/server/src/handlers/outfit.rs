use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;
use wardrobe_common::i18n::localized_quiz;
use wardrobe_common::outfit::QuizAnswers;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::outfit::{HistoryQuery, QuizResponse, RecommendationListResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/quiz",
    tag = "Outfits",
    operation_id = "getQuiz",
    summary = "Style quiz",
    description = "The three quiz questions (occasion, weather, vibe) with five options each, \
        labelled in the caller's language.",
    responses(
        (status = 200, description = "Localized quiz", body = QuizResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_quiz(auth_user: AuthUser, State(state): State<AppState>) -> Json<QuizResponse> {
    let language = state.localizer().load(&auth_user.session()).await;
    Json(QuizResponse {
        language,
        questions: localized_quiz(language),
    })
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "Outfits",
    operation_id = "createRecommendations",
    summary = "Generate outfit recommendations",
    description = "Describes the caller's wardrobe to the AI service together with the quiz \
        answers and saves one record per suggested outfit. An unparseable answer yields a single \
        fallback outfit. If a save fails part way the response is `PARTIAL_SAVE` and lists the \
        records that were kept.",
    request_body = QuizAnswers,
    responses(
        (status = 201, description = "Saved recommendations", body = RecommendationListResponse),
        (status = 400, description = "Incomplete answers (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Wardrobe is empty (EMPTY_WARDROBE)", body = ErrorBody),
        (status = 500, description = "Stopped part way (PARTIAL_SAVE)", body = ErrorBody),
        (status = 502, description = "AI service failed (AI_UNAVAILABLE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, answers), fields(user_id = %auth_user.user_id))]
pub async fn create_recommendations(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(answers): AppJson<QuizAnswers>,
) -> Result<impl IntoResponse, AppError> {
    let saved = state
        .stylist()
        .recommend(&auth_user.session(), &answers)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RecommendationListResponse::from(saved)),
    ))
}

#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "Outfits",
    operation_id = "listRecommendations",
    summary = "Recommendation history",
    description = "The caller's past recommendations, newest first.",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Past recommendations", body = RecommendationListResponse),
        (status = 400, description = "Limit out of range (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = %auth_user.user_id))]
pub async fn list_recommendations(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<RecommendationListResponse>, AppError> {
    if let Some(limit) = query.limit
        && !(1..=100).contains(&limit)
    {
        return Err(AppError::Validation("limit must be between 1 and 100".into()));
    }

    let history = state
        .stylist()
        .history(&auth_user.session(), query.limit)
        .await?;
    Ok(Json(RecommendationListResponse::from(history)))
}
