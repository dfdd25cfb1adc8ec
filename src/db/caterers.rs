use crate::db::errors::RepositoryError;
use crate::db::DbConnection;
use crate::models::caterer::Caterer;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct CatererOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl CatererOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    /// Resolves the caterer profile owned by the given user, if any.
    /// Profiles are provisioned out of band; meal mutation endpoints fail
    /// with 403 when this returns `NotFound`.
    pub fn get_caterer_for_user(&self, owner_id: i32) -> Result<Caterer, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_caterer_for_user: failed to acquire DB connection for user {}: {}",
                owner_id, e
            );
            e
        })?;

        use crate::db::schema::caterers::dsl::*;
        caterers
            .filter(user_id.eq(owner_id))
            .limit(1)
            .get_result::<Caterer>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(format!("caterers: user {owner_id}")),
                other => {
                    error!(
                        "get_caterer_for_user: error fetching caterer for user {}: {}",
                        owner_id, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }
}
