use crate::db::errors::RepositoryError;
use crate::db::schema::meal_options::dsl::*;
use crate::db::DbConnection;
use crate::enums::meals::MealFilters;
use crate::models::meal::{MealOption, NewMealOption, UpdateMealOption};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::{debug, error};

#[derive(Clone)]
pub struct MealOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl MealOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    pub fn add_meal_option(&self, new_meal: NewMealOption) -> Result<MealOption, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("add_meal_option: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(meal_options)
            .values(&new_meal)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "add_meal_option: error inserting meal option '{}': {}",
                    new_meal.name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_meal_option(&self, id: i32) -> Result<MealOption, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_meal_option: failed to acquire DB connection for id {}: {}",
                id, e
            );
            e
        })?;

        meal_options
            .find(id)
            .get_result::<MealOption>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(format!("meal_options: {id}")),
                other => {
                    error!(
                        "get_meal_option: error fetching meal option with id {}: {}",
                        id, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    /// All filters are optional and combined with AND semantics; an absent
    /// filter imposes no constraint.
    pub fn list_meal_options(
        &self,
        filters: &MealFilters,
    ) -> Result<Vec<MealOption>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("list_meal_options: failed to acquire DB connection: {}", e);
            e
        })?;
        debug!("list_meal_options: applying filters {:?}", filters);

        let mut query = meal_options.into_boxed();
        if let Some(wanted) = &filters.category {
            query = query.filter(category.eq(wanted.clone()));
        }
        if let Some(min) = filters.min_price {
            query = query.filter(price.ge(min));
        }
        if let Some(max) = filters.max_price {
            query = query.filter(price.le(max));
        }

        query
            .order_by(meal_option_id.asc())
            .load::<MealOption>(conn.connection())
            .map_err(|e| {
                error!("list_meal_options: error fetching meal options: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn update_meal_option(
        &self,
        id: i32,
        changes: UpdateMealOption,
    ) -> Result<MealOption, RepositoryError> {
        // An all-None changeset is a diesel error; nothing to persist anyway.
        if changes.is_empty() {
            return self.get_meal_option(id);
        }

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_meal_option: failed to acquire DB connection for id {}: {}",
                id, e
            );
            e
        })?;

        diesel::update(meal_options.find(id))
            .set(&changes)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "update_meal_option: error updating meal option with id {}: {}",
                    id, e
                );
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("meal_options: {id}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    pub fn remove_meal_option(&self, id: i32) -> Result<MealOption, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "remove_meal_option: failed to acquire DB connection for id {}: {}",
                id, e
            );
            e
        })?;

        diesel::delete(meal_options.find(id))
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "remove_meal_option: error deleting meal option with id {}: {}",
                    id, e
                );
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("meal_options: {id}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }
}
