use dotenvy::var;

/// Process configuration, resolved once at startup and passed down
/// explicitly.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let database_url = var("DATABASE_URL").expect("DATABASE_URL must be set");
        Self {
            host,
            port,
            database_url,
        }
    }
}
