use crate::auth::UserPrincipal;
use crate::db::{CatererOperations, MealOperations, RepositoryError};
use crate::enums::common::{ErrorResponse, ValidationErrorResponse};
use crate::enums::meals::{MealFilters, MealResp};
use crate::models::caterer::Caterer;
use crate::models::meal::{MealOption, NewMealOption};
use crate::validation::MealPayload;
use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use log::{debug, error, info};

fn caterer_profile_missing() -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorResponse {
        error: "Caterer profile not found".to_string(),
    })
}

fn meal_not_found(id: i32) -> HttpResponse {
    debug!("meal lookup: no meal option with id {}", id);
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Meal not found".to_string(),
    })
}

fn server_error(context: &str, e: &RepositoryError) -> HttpResponse {
    error!("MEALS: {}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: e.to_string(),
    })
}

/// Update/delete gate: the caller must own the meal through their caterer
/// profile, or hold the admin role.
fn may_mutate(principal: &UserPrincipal, caterer: Option<&Caterer>, meal: &MealOption) -> bool {
    if principal.is_admin() {
        return true;
    }
    matches!(caterer, Some(c) if c.caterer_id == meal.caterer_id)
}

#[utoipa::path(
    post,
    tag = "Meals",
    path = "/api/meals",
    request_body = MealPayload,
    responses(
        (status = 201, description = "Meal option created", body = MealResp),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller has no caterer profile", body = ErrorResponse)
    ),
    summary = "Create a new meal option"
)]
#[post("/meals")]
pub(super) async fn create_meal(
    meal_ops: web::Data<MealOperations>,
    caterer_ops: web::Data<CatererOperations>,
    principal: UserPrincipal,
    req_data: web::Json<MealPayload>,
) -> HttpResponse {
    let validated = match req_data.into_inner().validate_create() {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("create_meal: payload rejected: {:?}", errors);
            return HttpResponse::BadRequest().json(ValidationErrorResponse {
                error: errors.into_messages(),
            });
        }
    };

    let caterer = match caterer_ops.get_caterer_for_user(principal.user_id()) {
        Ok(caterer) => caterer,
        Err(RepositoryError::NotFound(_)) => return caterer_profile_missing(),
        Err(e) => return server_error("create_meal: caterer lookup", &e),
    };

    let new_meal = NewMealOption {
        caterer_id: caterer.caterer_id,
        name: validated.name,
        description: validated.description,
        price: validated.price,
        category: validated.category,
        created_at: Utc::now().naive_utc(),
    };
    match meal_ops.add_meal_option(new_meal) {
        Ok(meal) => {
            info!(
                "create_meal: caterer {} created meal option '{}'",
                caterer.caterer_id, meal.name
            );
            HttpResponse::Created().json(MealResp::from(meal))
        }
        Err(e) => server_error("create_meal", &e),
    }
}

#[utoipa::path(
    get,
    tag = "Meals",
    path = "/api/meals",
    params(MealFilters),
    responses(
        (status = 200, description = "Meal options matching every supplied filter", body = [MealResp])
    ),
    summary = "List meal options with optional category/price filters"
)]
#[get("/meals")]
pub(super) async fn list_meals(
    meal_ops: web::Data<MealOperations>,
    filters: web::Query<MealFilters>,
) -> HttpResponse {
    match meal_ops.list_meal_options(&filters.into_inner()) {
        Ok(meals) => {
            debug!("list_meals: returning {} meal options", meals.len());
            let body: Vec<MealResp> = meals.iter().map(MealResp::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(e) => server_error("list_meals", &e),
    }
}

#[utoipa::path(
    get,
    tag = "Meals",
    path = "/api/meals/{id}",
    params(("id", description = "Unique id of the meal option")),
    responses(
        (status = 200, description = "Meal option fetched", body = MealResp),
        (status = 404, description = "No meal option with that id", body = ErrorResponse)
    ),
    summary = "Fetch a single meal option"
)]
#[get("/meals/{id}")]
pub(super) async fn get_meal(
    meal_ops: web::Data<MealOperations>,
    path: web::Path<(i32,)>,
) -> HttpResponse {
    let id = path.into_inner().0;
    match meal_ops.get_meal_option(id) {
        Ok(meal) => HttpResponse::Ok().json(MealResp::from(meal)),
        Err(RepositoryError::NotFound(_)) => meal_not_found(id),
        Err(e) => server_error("get_meal", &e),
    }
}

#[utoipa::path(
    put,
    tag = "Meals",
    path = "/api/meals/{id}",
    params(("id", description = "Unique id of the meal option")),
    request_body = MealPayload,
    responses(
        (status = 200, description = "Meal option updated", body = MealResp),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own this meal", body = ErrorResponse),
        (status = 404, description = "No meal option with that id", body = ErrorResponse)
    ),
    summary = "Partially update a meal option"
)]
#[put("/meals/{id}")]
pub(super) async fn update_meal(
    meal_ops: web::Data<MealOperations>,
    caterer_ops: web::Data<CatererOperations>,
    principal: UserPrincipal,
    path: web::Path<(i32,)>,
    req_data: web::Json<MealPayload>,
) -> HttpResponse {
    let id = path.into_inner().0;
    let meal = match meal_ops.get_meal_option(id) {
        Ok(meal) => meal,
        Err(RepositoryError::NotFound(_)) => return meal_not_found(id),
        Err(e) => return server_error("update_meal: lookup", &e),
    };

    let caterer = match caterer_ops.get_caterer_for_user(principal.user_id()) {
        Ok(caterer) => Some(caterer),
        Err(RepositoryError::NotFound(_)) => None,
        Err(e) => return server_error("update_meal: caterer lookup", &e),
    };
    if !may_mutate(&principal, caterer.as_ref(), &meal) {
        return HttpResponse::Forbidden().json(ErrorResponse {
            error: "Unauthorized to modify this meal".to_string(),
        });
    }

    let changes = match req_data.into_inner().validate_partial() {
        Ok(changes) => changes,
        Err(errors) => {
            debug!("update_meal: payload rejected for id {}: {:?}", id, errors);
            return HttpResponse::BadRequest().json(ValidationErrorResponse {
                error: errors.into_messages(),
            });
        }
    };

    match meal_ops.update_meal_option(id, changes) {
        Ok(updated) => {
            info!("update_meal: meal option {} updated", id);
            HttpResponse::Ok().json(MealResp::from(updated))
        }
        Err(e) => server_error("update_meal", &e),
    }
}

#[utoipa::path(
    delete,
    tag = "Meals",
    path = "/api/meals/{id}",
    params(("id", description = "Unique id of the meal option")),
    responses(
        (status = 204, description = "Meal option deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own this meal", body = ErrorResponse),
        (status = 404, description = "No meal option with that id", body = ErrorResponse)
    ),
    summary = "Delete a meal option"
)]
#[delete("/meals/{id}")]
pub(super) async fn delete_meal(
    meal_ops: web::Data<MealOperations>,
    caterer_ops: web::Data<CatererOperations>,
    principal: UserPrincipal,
    path: web::Path<(i32,)>,
) -> HttpResponse {
    let id = path.into_inner().0;
    let meal = match meal_ops.get_meal_option(id) {
        Ok(meal) => meal,
        Err(RepositoryError::NotFound(_)) => return meal_not_found(id),
        Err(e) => return server_error("delete_meal: lookup", &e),
    };

    let caterer = match caterer_ops.get_caterer_for_user(principal.user_id()) {
        Ok(caterer) => Some(caterer),
        Err(RepositoryError::NotFound(_)) => None,
        Err(e) => return server_error("delete_meal: caterer lookup", &e),
    };
    if !may_mutate(&principal, caterer.as_ref(), &meal) {
        return HttpResponse::Forbidden().json(ErrorResponse {
            error: "Unauthorized to delete this meal".to_string(),
        });
    }

    match meal_ops.remove_meal_option(id) {
        Ok(removed) => {
            info!("delete_meal: meal option '{}' removed", removed.name);
            HttpResponse::NoContent().finish()
        }
        Err(RepositoryError::NotFound(_)) => meal_not_found(id),
        Err(e) => server_error("delete_meal", &e),
    }
}
