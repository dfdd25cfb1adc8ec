use crate::models::meal::MealOption;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Wire shape of a meal option. Identifier and timestamp stay internal.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MealResp {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl From<&MealOption> for MealResp {
    fn from(meal: &MealOption) -> Self {
        Self {
            name: meal.name.clone(),
            description: meal.description.clone(),
            price: meal.price,
            category: meal.category.clone(),
        }
    }
}

impl From<MealOption> for MealResp {
    fn from(meal: MealOption) -> Self {
        Self {
            name: meal.name,
            description: meal.description,
            price: meal.price,
            category: meal.category,
        }
    }
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct MealFilters {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
