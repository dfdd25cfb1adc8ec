pub mod config;
pub mod extractors;
pub mod middleware;
pub mod password;
pub mod principal;
pub mod token;

pub use config::AuthConfig;
pub use extractors::UserPrincipal;
pub use middleware::AuthLayer;
pub use principal::Principal;
