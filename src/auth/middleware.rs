use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method, StatusCode};
use actix_web::{Error, HttpMessage};
use futures::future::LocalBoxFuture;
use log::debug;

use crate::api::error_response;
use crate::auth::config::AuthConfig;
use crate::auth::token::verify_token;
use crate::auth::Principal;
use crate::db::UserOperations;

/// Bearer-token guard for mutating catalog routes. Registration, login and
/// all catalog reads stay public; everything else must present a token that
/// resolves to a stored user.
#[derive(Clone)]
pub struct AuthLayer {
    cfg: AuthConfig,
    user_ops: UserOperations,
}

impl AuthLayer {
    pub fn new(cfg: AuthConfig, user_ops: UserOperations) -> Self {
        Self { cfg, user_ops }
    }
}

fn is_public(req: &ServiceRequest) -> bool {
    let path = req.path();
    if path == "/" || path == "/api/users" || path == "/api/login" {
        return true;
    }
    path.starts_with("/api/meals") && req.method() == Method::GET
}

impl<S, B> Transform<S, ServiceRequest> for AuthLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware {
            service: Rc::new(service),
            inner: self.clone(),
        }))
    }
}

pub struct AuthMiddleware<S> {
    service: Rc<S>,
    inner: AuthLayer,
}

impl<S, B> Service<ServiceRequest> for AuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(&req) {
            let fut = self.service.call(req);
            #[allow(clippy::redundant_async_block)]
            return Box::pin(async move { fut.await });
        }

        let token_opt = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string());
        if token_opt.as_deref().unwrap_or("").is_empty() {
            return Box::pin(async {
                Err(error_response(StatusCode::UNAUTHORIZED, "Token is missing"))
            });
        }

        let token = token_opt.unwrap();
        let inner = self.inner.clone();
        let srv = self.service.clone();
        Box::pin(async move {
            let user_id = match verify_token(&token, &inner.cfg) {
                Ok(id) => id,
                Err(e) => {
                    debug!("auth: token rejected: {}", e);
                    return Err(error_response(StatusCode::UNAUTHORIZED, "Invalid token"));
                }
            };

            // A well-signed token naming a deleted user is still invalid.
            let user_ops = inner.user_ops.clone();
            let lookup = actix_web::web::block(move || user_ops.get_user_by_id(user_id)).await;

            match lookup {
                Ok(Ok(user)) => {
                    req.extensions_mut().insert(Principal {
                        user_id: user.user_id,
                        role: user.role,
                    });
                    srv.call(req).await
                }
                _ => Err(error_response(StatusCode::UNAUTHORIZED, "Invalid token")),
            }
        })
    }
}
