//! Meal payload validation. Bounds mirror the catalog schema: name 1-100
//! chars, description up to 500, category up to 50, price non-negative.
//! Failures carry field-level messages so the client sees every problem
//! at once.

use crate::models::meal::UpdateMealOption;
use serde::Deserialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const CATEGORY_MAX_LEN: usize = 50;

/// Raw request body for meal create/update. Everything is optional at the
/// serde level; `validate_create` enforces required fields, while
/// `validate_partial` only checks the fields that are present.
#[derive(Deserialize, Debug, Default, Clone, ToSchema)]
pub struct MealPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// A fully validated create payload.
#[derive(Debug)]
pub struct ValidatedMeal {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field_messages(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn into_messages(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl MealPayload {
    pub fn validate_create(self) -> Result<ValidatedMeal, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        match &self.name {
            None => errors.add("name", "Missing data for required field."),
            Some(value) => check_name(value, &mut errors),
        }
        if let Some(value) = &self.description {
            check_description(value, &mut errors);
        }
        match self.price {
            None => errors.add("price", "Missing data for required field."),
            Some(value) => check_price(value, &mut errors),
        }
        if let Some(value) = &self.category {
            check_category(value, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ValidatedMeal {
            // Both unwraps guarded by the required-field checks above.
            name: self.name.unwrap(),
            description: self.description,
            price: self.price.unwrap(),
            category: self.category,
        })
    }

    /// Partial semantics: absent fields pass through unvalidated and
    /// unchanged.
    pub fn validate_partial(self) -> Result<UpdateMealOption, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if let Some(value) = &self.name {
            check_name(value, &mut errors);
        }
        if let Some(value) = &self.description {
            check_description(value, &mut errors);
        }
        if let Some(value) = self.price {
            check_price(value, &mut errors);
        }
        if let Some(value) = &self.category {
            check_category(value, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdateMealOption {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        })
    }
}

fn check_name(value: &str, errors: &mut ValidationErrors) {
    let len = value.chars().count();
    if len < 1 || len > NAME_MAX_LEN {
        errors.add("name", format!("Length must be between 1 and {NAME_MAX_LEN}."));
    }
}

fn check_description(value: &str, errors: &mut ValidationErrors) {
    if value.chars().count() > DESCRIPTION_MAX_LEN {
        errors.add(
            "description",
            format!("Longer than maximum length {DESCRIPTION_MAX_LEN}."),
        );
    }
}

fn check_price(value: f64, errors: &mut ValidationErrors) {
    if !value.is_finite() || value < 0.0 {
        errors.add("price", "Price must be non-negative.");
    }
}

fn check_category(value: &str, errors: &mut ValidationErrors) {
    if value.chars().count() > CATEGORY_MAX_LEN {
        errors.add(
            "category",
            format!("Longer than maximum length {CATEGORY_MAX_LEN}."),
        );
    }
}
