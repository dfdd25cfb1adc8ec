use crate::auth::config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("signing error: {0}")]
    Sign(String),
    #[error("verification error: {0}")]
    Verify(String),
}

#[derive(Serialize, Deserialize)]
struct Claims {
    user_id: i32,
    iat: u64,
    exp: u64,
}

pub fn issue_token(user_id: i32, cfg: &AuthConfig) -> Result<String, TokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        user_id,
        iat: now,
        exp: now + cfg.expiry_secs,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(cfg.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Sign(e.to_string()))
}

pub fn verify_token(token: &str, cfg: &AuthConfig) -> Result<i32, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| TokenError::Verify(e.to_string()))?;
    Ok(data.claims.user_id)
}
