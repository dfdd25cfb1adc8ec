use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, PartialEq, Selectable, Debug, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::caterers)]
#[diesel(primary_key(caterer_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Caterer {
    pub caterer_id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::caterers)]
pub struct NewCaterer {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
}
