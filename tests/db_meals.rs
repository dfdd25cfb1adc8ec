mod common;

use mealy::db::{CatererOperations, MealOperations, RepositoryError};
use mealy::enums::meals::MealFilters;
use mealy::models::meal::UpdateMealOption;

#[test]
fn list_without_filters_returns_everything_in_id_order() {
    let (pool, fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let meals = meal_ops
        .list_meal_options(&MealFilters::default())
        .expect("list meals");
    let ids: Vec<i32> = meals.iter().map(|m| m.meal_option_id).collect();
    assert_eq!(ids, fixtures.meal_ids);
}

#[test]
fn price_filters_are_inclusive_bounds() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    // Seeded prices: 8.5, 12.0, 4.0
    let filters = MealFilters {
        min_price: Some(4.0),
        max_price: Some(8.5),
        ..Default::default()
    };
    let meals = meal_ops.list_meal_options(&filters).expect("list meals");
    let prices: Vec<f64> = meals.iter().map(|m| m.price).collect();
    assert_eq!(prices, vec![8.5, 4.0]);
}

#[test]
fn category_and_price_filters_combine() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let filters = MealFilters {
        category: Some("lunch".to_string()),
        max_price: Some(10.0),
        ..Default::default()
    };
    let meals = meal_ops.list_meal_options(&filters).expect("list meals");
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "Ugali and Sukuma");
}

#[test]
fn update_changes_only_supplied_fields() {
    let (pool, fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let changes = UpdateMealOption {
        price: Some(9.25),
        ..Default::default()
    };
    let updated = meal_ops
        .update_meal_option(fixtures.meal_ids[0], changes)
        .expect("update meal");
    assert_eq!(updated.price, 9.25);
    assert_eq!(updated.name, "Ugali and Sukuma");
    assert_eq!(updated.category.as_deref(), Some("lunch"));
}

#[test]
fn update_with_empty_changeset_is_a_read() {
    let (pool, fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let before = meal_ops
        .get_meal_option(fixtures.meal_ids[1])
        .expect("fetch meal");
    let after = meal_ops
        .update_meal_option(fixtures.meal_ids[1], UpdateMealOption::default())
        .expect("no-op update");
    assert_eq!(before, after);
}

#[test]
fn update_unknown_id_is_not_found() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let changes = UpdateMealOption {
        price: Some(1.0),
        ..Default::default()
    };
    assert!(matches!(
        meal_ops.update_meal_option(9999, changes),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn remove_deletes_the_row() {
    let (pool, fixtures, _db) = common::setup_pool_with_fixtures();
    let meal_ops = MealOperations::new(pool);

    let removed = meal_ops
        .remove_meal_option(fixtures.meal_ids[2])
        .expect("remove meal");
    assert_eq!(removed.name, "Mango Smoothie");

    assert!(matches!(
        meal_ops.get_meal_option(fixtures.meal_ids[2]),
        Err(RepositoryError::NotFound(_))
    ));
    assert!(matches!(
        meal_ops.remove_meal_option(fixtures.meal_ids[2]),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn caterer_profile_resolution() {
    let (pool, fixtures, _db) = common::setup_pool_with_fixtures();
    let caterer_ops = CatererOperations::new(pool);

    let caterer = caterer_ops
        .get_caterer_for_user(fixtures.caterer_one_user_id)
        .expect("resolve caterer");
    assert_eq!(caterer.caterer_id, fixtures.caterer_one_id);

    assert!(matches!(
        caterer_ops.get_caterer_for_user(fixtures.customer_id),
        Err(RepositoryError::NotFound(_))
    ));
}
