use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("stored password hash is invalid: {0}")]
    InvalidHash(String),
    #[error("password mismatch")]
    Mismatch,
}

/// Salted Argon2 hash in PHC string format. Deliberately slow; callers run
/// this on a blocking executor.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(rand::thread_rng());
    Ok(PasswordHash::generate(Argon2::default(), password, &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?
        .to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<(), PasswordError> {
    let hash =
        PasswordHash::new(password_hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    hash.verify_password(&[&Argon2::default()], password)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => PasswordError::Mismatch,
            other => PasswordError::InvalidHash(other.to_string()),
        })
}
