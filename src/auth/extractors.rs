use crate::api::error_response;
use crate::auth::principal::Principal;
use crate::models::user::Role;
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};

/// Extracts the `Principal` the middleware stored for this request. Absence
/// means the route was registered outside the auth layer.
pub struct UserPrincipal(Principal);

impl UserPrincipal {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == Role::Admin
    }
}

impl FromRequest for UserPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(p) = req.extensions().get::<Principal>() {
            return ready(Ok(UserPrincipal(p.clone())));
        }
        ready(Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Token is missing",
        )))
    }
}
