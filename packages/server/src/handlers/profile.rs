use axum::extract::State;
use axum::Json;
use tracing::instrument;
use wardrobe_common::stats::{self, WardrobeStats};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Profile",
    operation_id = "getStats",
    summary = "Wardrobe statistics",
    description = "Total items, total outfits and the most frequent category. On a tie the \
        category first seen later wins; `favorite_category` is null for an empty wardrobe.",
    responses(
        (status = 200, description = "Statistics", body = WardrobeStats),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_stats(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<WardrobeStats>, AppError> {
    let store = state.store();
    let stats = stats::compute(&auth_user.session(), &*store, &*store).await?;
    Ok(Json(stats))
}
