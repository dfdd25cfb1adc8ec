use chrono::NaiveDateTime;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, PartialEq, Selectable, Debug, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::meal_options)]
#[diesel(primary_key(meal_option_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MealOption {
    pub meal_option_id: i32,
    pub caterer_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::meal_options)]
pub struct NewMealOption {
    pub caterer_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Partial update; `None` fields are left untouched by the changeset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = crate::db::schema::meal_options)]
pub struct UpdateMealOption {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl UpdateMealOption {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }
}
