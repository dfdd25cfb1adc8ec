mod errors;
mod meals;
mod users;

use crate::enums::common::MessageResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
pub use errors::error_response;

#[get("/")]
async fn root_endpoint() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Mealy API".to_string(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(root_endpoint).service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(errors::default_error_handler))
            .app_data(web::Data::new(state.user_ops.clone()))
            .app_data(web::Data::new(state.caterer_ops.clone()))
            .app_data(web::Data::new(state.meal_ops.clone()))
            .service(users::register)
            .service(users::login)
            .service(meals::create_meal)
            .service(meals::list_meals)
            .service(meals::get_meal)
            .service(meals::update_meal)
            .service(meals::delete_meal),
    );
}
