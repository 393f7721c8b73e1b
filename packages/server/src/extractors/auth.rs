use axum::{extract::FromRequestParts, http::request::Parts};
use wardrobe_common::Session;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Authenticated owner extracted from the `Authorization: Bearer <token>` header.
///
/// Add this as a handler parameter to require authentication. The token's
/// `sub` claim is the owner id every record is scoped to.
pub struct AuthUser {
    pub user_id: String,
}

impl AuthUser {
    pub fn session(&self) -> Session {
        Session::new(self.user_id.clone())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims =
            jwt::verify(token, &state.config.auth.jwt_secret).map_err(|_| AppError::TokenInvalid)?;
        if claims.sub.trim().is_empty() {
            return Err(AppError::TokenInvalid);
        }

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
