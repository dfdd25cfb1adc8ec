//! Fixture helpers shared by the integration tests. Databases are
//! file-backed SQLite, one per test, so no external services are needed.

use crate::auth::config::AuthConfig;
use crate::auth::password::hash_password;
use crate::db::{establish_connection_pool, run_db_migrations, DbConnection, RepositoryError};
use crate::models::caterer::NewCaterer;
use crate::models::meal::NewMealOption;
use crate::models::user::{NewUser, Role};
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_secs: 3600,
    }
}

pub fn build_test_pool(database_url: &str) -> Pool<ConnectionManager<SqliteConnection>> {
    let pool = establish_connection_pool(database_url);
    run_db_migrations(pool.clone()).expect("Unable to run migrations");
    pool
}

/// Seeded rows every API test starts from: a plain customer, two caterers
/// with profiles, an admin, and three meals (two owned by caterer one).
pub struct TestFixtures {
    pub customer_id: i32,
    pub caterer_one_user_id: i32,
    pub caterer_one_id: i32,
    pub caterer_two_user_id: i32,
    pub caterer_two_id: i32,
    pub admin_id: i32,
    pub meal_ids: Vec<i32>,
}

pub fn seed_basic_fixtures(
    pool: &Pool<ConnectionManager<SqliteConnection>>,
) -> Result<TestFixtures, RepositoryError> {
    let mut conn = DbConnection::new(pool)?;

    let customer_id = insert_user(
        conn.connection(),
        "customer1",
        "customer1@example.com",
        TEST_PASSWORD,
        Role::Customer,
    )?;
    let caterer_one_user_id = insert_user(
        conn.connection(),
        "caterer1",
        "caterer1@example.com",
        TEST_PASSWORD,
        Role::Customer,
    )?;
    let caterer_two_user_id = insert_user(
        conn.connection(),
        "caterer2",
        "caterer2@example.com",
        TEST_PASSWORD,
        Role::Customer,
    )?;
    let admin_id = insert_user(
        conn.connection(),
        "admin1",
        "admin1@example.com",
        TEST_PASSWORD,
        Role::Admin,
    )?;

    let caterer_one_id = insert_caterer(
        conn.connection(),
        caterer_one_user_id,
        "Mama's Kitchen",
        Some("Homestyle cooking"),
    )?;
    let caterer_two_id = insert_caterer(
        conn.connection(),
        caterer_two_user_id,
        "Green Bowl",
        None,
    )?;

    let meal_one = seed_meal_option(
        conn.connection(),
        caterer_one_id,
        "Ugali and Sukuma",
        8.5,
        Some("lunch"),
        Some("Staple plate"),
    )?;
    let meal_two = seed_meal_option(
        conn.connection(),
        caterer_one_id,
        "Chicken Biryani",
        12.0,
        Some("lunch"),
        None,
    )?;
    let meal_three = seed_meal_option(
        conn.connection(),
        caterer_two_id,
        "Mango Smoothie",
        4.0,
        Some("drinks"),
        None,
    )?;

    Ok(TestFixtures {
        customer_id,
        caterer_one_user_id,
        caterer_one_id,
        caterer_two_user_id,
        caterer_two_id,
        admin_id,
        meal_ids: vec![meal_one, meal_two, meal_three],
    })
}

pub fn insert_user(
    conn: &mut SqliteConnection,
    username_val: &str,
    email_val: &str,
    password_val: &str,
    role_val: Role,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::users::dsl::*;

    let hashed = hash_password(password_val).expect("hash test password");
    let new_user = NewUser {
        username: username_val.to_string(),
        email: email_val.to_string(),
        password_hash: hashed,
        role: role_val,
    };

    diesel::insert_into(users)
        .values(&new_user)
        .returning(user_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_caterer(
    conn: &mut SqliteConnection,
    owner_id: i32,
    name_val: &str,
    description_val: Option<&str>,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::caterers::dsl::*;

    let new_caterer = NewCaterer {
        user_id: owner_id,
        name: name_val.to_string(),
        description: description_val.map(|val| val.to_string()),
    };

    diesel::insert_into(caterers)
        .values(&new_caterer)
        .returning(caterer_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn seed_meal_option(
    conn: &mut SqliteConnection,
    caterer_id_val: i32,
    name_val: &str,
    price_val: f64,
    category_val: Option<&str>,
    description_val: Option<&str>,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::meal_options::dsl::*;

    let new_meal = NewMealOption {
        caterer_id: caterer_id_val,
        name: name_val.to_string(),
        description: description_val.map(|val| val.to_string()),
        price: price_val,
        category: category_val.map(|val| val.to_string()),
        created_at: Utc::now().naive_utc(),
    };

    diesel::insert_into(meal_options)
        .values(&new_meal)
        .returning(meal_option_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}
