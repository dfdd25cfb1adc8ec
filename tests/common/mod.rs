//! Test conventions:
//! - Each test gets its own SQLite database under a TempDir; keep the
//!   returned `TestDb` alive for the duration of the test.
//! - Seed fixtures through `mealy::test_utils`.
//! - Tokens come from `token_for`, signed with the shared test config.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use mealy::api;
use mealy::auth::token::issue_token;
use mealy::auth::AuthLayer;
use mealy::test_utils::{build_test_pool, seed_basic_fixtures, test_auth_config, TestFixtures};
use mealy::AppState;
use tempfile::TempDir;

pub struct TestDb {
    pub database_url: String,
    _dir: TempDir,
}

pub fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database_url = dir
        .path()
        .join("mealy-test.sqlite3")
        .to_str()
        .expect("utf-8 temp path")
        .to_string();
    TestDb {
        database_url,
        _dir: dir,
    }
}

pub fn setup_pool() -> (Pool<ConnectionManager<SqliteConnection>>, TestDb) {
    let db = setup_test_db();
    let pool = build_test_pool(&db.database_url);
    (pool, db)
}

pub fn setup_pool_with_fixtures() -> (
    Pool<ConnectionManager<SqliteConnection>>,
    TestFixtures,
    TestDb,
) {
    let (pool, db) = setup_pool();
    let fixtures = seed_basic_fixtures(&pool).expect("seed fixtures");
    (pool, fixtures, db)
}

pub async fn setup_api_app() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    TestFixtures,
    TestDb,
) {
    let (pool, fixtures, db) = setup_pool_with_fixtures();
    drop(pool);

    let auth_cfg = test_auth_config();
    let state = AppState::new(&db.database_url);
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(auth_cfg.clone(), state.user_ops.clone()))
            .app_data(web::Data::new(auth_cfg))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;
    (app, fixtures, db)
}

pub fn token_for(user_id: i32) -> String {
    issue_token(user_id, &test_auth_config()).expect("issue test token")
}

pub fn auth_header(user_id: i32) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user_id)))
}
