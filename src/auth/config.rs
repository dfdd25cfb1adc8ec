use dotenvy::var;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiry_secs: u64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let secret = var("JWT_SECRET").expect("JWT_SECRET must be set");
        // 24 hours unless overridden; tokens always carry an expiry claim
        let expiry_secs = var("JWT_EXPIRY_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(24 * 60 * 60);
        Self {
            secret,
            expiry_secs,
        }
    }
}
