use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Owner id
    pub exp: usize,  // Expiration timestamp
}

/// Sign a token for `user_id`, valid for `ttl`.
///
/// Tokens normally come from the identity provider; this exists for tooling
/// and tests that share its secret.
pub fn sign(user_id: &str, secret: &str, ttl: Duration) -> Result<String> {
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .context("token expiry out of range")?
        .timestamp();

    let claims = Claims {
        sub: user_id.to_owned(),
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a JWT token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
