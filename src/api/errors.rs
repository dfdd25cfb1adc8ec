use crate::enums::common::ErrorResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse};
use log::error;

/// Builds an actix error whose response is the canonical `{"error": ...}`
/// JSON body instead of actix's plain-text default.
pub fn error_response(status: StatusCode, message: &str) -> Error {
    let response = HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
    });
    actix_web::error::InternalError::from_response(message.to_string(), response).into()
}

pub(crate) fn default_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    error!("Error in request: {} \n Error: {}", req.full_url(), err);
    error_response(StatusCode::BAD_REQUEST, "Malformed request body")
}
