#[macro_use]
extern crate log;

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod enums;
pub mod models;
pub mod test_utils;
pub mod validation;

use crate::db::{
    establish_connection_pool, run_db_migrations, CatererOperations, MealOperations, UserOperations,
};

#[derive(Clone)]
pub struct AppState {
    pub user_ops: UserOperations,
    pub caterer_ops: CatererOperations,
    pub meal_ops: MealOperations,
}

impl AppState {
    pub fn new(database_url: &str) -> Self {
        let db = establish_connection_pool(database_url);
        run_db_migrations(db.clone()).expect("Unable to run migrations");

        let user_ops = UserOperations::new(db.clone());
        let caterer_ops = CatererOperations::new(db.clone());
        let meal_ops = MealOperations::new(db.clone());
        AppState {
            user_ops,
            caterer_ops,
            meal_ops,
        }
    }
}
