#[macro_use]
extern crate log;
extern crate pretty_env_logger;

use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use mealy::auth::{AuthConfig, AuthLayer};
use mealy::config::AppConfig;
use mealy::{api, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }

    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = AppConfig::from_env();
    let auth_cfg = AuthConfig::from_env();

    info!("Initializing database connection pool...");
    let state = AppState::new(&config.database_url);

    info!("Starting server at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(AuthLayer::new(auth_cfg.clone(), state.user_ops.clone()))
            .app_data(web::Data::new(auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state))
    })
    .bind(bind_addr)?
    .run()
    .await
}
