mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::auth_header;
use serde_json::{json, Value};

#[actix_rt::test]
async fn list_meals_returns_all_seeded() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/api/meals").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let meals = body.as_array().expect("meal array");
    assert_eq!(meals.len(), 3);
    // Wire shape carries no identifier or timestamp
    assert!(meals[0].get("meal_option_id").is_none());
    assert!(meals[0].get("created_at").is_none());
}

#[actix_rt::test]
async fn list_meals_filters_by_category() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri("/api/meals?category=drinks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let meals = body.as_array().expect("meal array");
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["name"], "Mango Smoothie");
}

#[actix_rt::test]
async fn list_meals_combines_filters_with_and_semantics() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri("/api/meals?category=lunch&min_price=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let meals = body.as_array().expect("meal array");
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["name"], "Chicken Biryani");
}

#[actix_rt::test]
async fn list_meals_inverted_price_range_is_empty() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri("/api/meals?min_price=10&max_price=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().expect("meal array").is_empty());
}

#[actix_rt::test]
async fn get_meal_by_id() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ugali and Sukuma");
    assert_eq!(body["price"], 8.5);
}

#[actix_rt::test]
async fn get_meal_unknown_id_is_404() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/api/meals/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn create_meal_without_token_is_401() {
    let (app, _fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .set_json(json!({ "name": "Pilau", "price": 9.0 }))
        .to_request();
    let result = test::try_call_service(&app, req).await;
    let status = match result {
        Ok(r) => r.status(),
        Err(e) => e.as_response_error().status_code(),
    };
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn create_meal_without_caterer_profile_is_403() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(auth_header(fixtures.customer_id))
        .set_json(json!({ "name": "Pilau", "price": 9.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Caterer profile not found");
}

#[actix_rt::test]
async fn create_meal_as_caterer() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({
            "name": "Pilau",
            "description": "Spiced rice",
            "price": 9.0,
            "category": "lunch",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Pilau");
    assert_eq!(body["price"], 9.0);
    assert_eq!(body["category"], "lunch");

    let req = test::TestRequest::get().uri("/api/meals").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().expect("meal array").len(), 4);
}

#[actix_rt::test]
async fn create_meal_negative_price_fails_validation() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({ "name": "Pilau", "price": -1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["price"].is_array());
}

#[actix_rt::test]
async fn create_meal_zero_price_is_allowed() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({ "name": "Free Sample", "price": 0.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn create_meal_reports_every_invalid_field() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({ "name": "", "category": "c".repeat(51) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["name"].is_array());
    assert!(body["error"]["price"].is_array());
    assert!(body["error"]["category"].is_array());
}

#[actix_rt::test]
async fn update_meal_partial_change_keeps_other_fields() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({ "category": "drinks" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["category"], "drinks");
    assert_eq!(body["name"], "Ugali and Sukuma");
    assert_eq!(body["description"], "Staple plate");
    assert_eq!(body["price"], 8.5);
}

#[actix_rt::test]
async fn update_meal_empty_patch_returns_row_unchanged() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ugali and Sukuma");
}

#[actix_rt::test]
async fn update_meal_of_other_caterer_is_403() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .insert_header(auth_header(fixtures.caterer_two_user_id))
        .set_json(json!({ "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn update_meal_unknown_id_is_404_even_without_profile() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    // Existence check comes before the ownership check
    let req = test::TestRequest::put()
        .uri("/api/meals/9999")
        .insert_header(auth_header(fixtures.customer_id))
        .set_json(json!({ "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn update_meal_invalid_field_is_400() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .set_json(json!({ "price": -3.5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["price"].is_array());
}

#[actix_rt::test]
async fn admin_may_update_any_meal() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[2]))
        .insert_header(auth_header(fixtures.admin_id))
        .set_json(json!({ "price": 5.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], 5.0);
}

#[actix_rt::test]
async fn delete_meal_as_owner_is_204_without_body() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Row is gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_meal_of_other_caterer_is_403() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[2]))
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Still there
    let req = test::TestRequest::get()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[2]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn delete_meal_unknown_id_is_404() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::delete()
        .uri("/api/meals/9999")
        .insert_header(auth_header(fixtures.caterer_one_user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn admin_may_delete_any_meal() {
    let (app, fixtures, _db) = common::setup_api_app().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/meals/{}", fixtures.meal_ids[1]))
        .insert_header(auth_header(fixtures.admin_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
