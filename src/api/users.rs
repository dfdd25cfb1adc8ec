use crate::auth::config::AuthConfig;
use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::auth::token::issue_token;
use crate::db::{RepositoryError, UserOperations};
use crate::enums::common::{ErrorResponse, MessageResponse};
use crate::enums::users::{LoginReq, RegisterReq, TokenResp};
use crate::models::user::{NewUser, Role};
use actix_web::{post, web, HttpResponse};
use log::{debug, error};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[utoipa::path(
    post,
    tag = "User",
    path = "/api/users",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User account created", body = MessageResponse),
        (status = 409, description = "Username or email already registered", body = ErrorResponse)
    ),
    summary = "Register a new user account"
)]
#[post("/users")]
pub(super) async fn register(
    user_ops: web::Data<UserOperations>,
    req_data: web::Json<RegisterReq>,
) -> HttpResponse {
    let req_data = req_data.into_inner();
    let email = req_data.email.clone();

    let password = req_data.password;
    let hashed = match web::block(move || hash_password(&password)).await {
        Ok(Ok(hash)) => hash,
        Ok(Err(e)) => {
            error!("register: failed to hash password for '{}': {}", email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create user".to_string(),
            });
        }
        Err(e) => {
            error!("register: hashing task failed for '{}': {}", email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create user".to_string(),
            });
        }
    };

    let new_user = NewUser {
        username: req_data.username,
        email: req_data.email,
        password_hash: hashed,
        role: Role::Customer,
    };
    match user_ops.create_user(new_user) {
        Ok(user) => {
            debug!(
                "register: created user account '{}' with email '{}'",
                user.username, user.email
            );
            HttpResponse::Created().json(MessageResponse {
                message: "User created".to_string(),
            })
        }
        Err(e @ RepositoryError::Conflict(_)) => {
            debug!("register: rejected duplicate account for '{}'", email);
            HttpResponse::Conflict().json(ErrorResponse {
                error: e.to_string(),
            })
        }
        Err(e) => {
            error!("register: failed to create account for '{}': {}", email, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create user".to_string(),
            })
        }
    }
}

#[utoipa::path(
    post,
    tag = "User",
    path = "/api/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "User authenticated, token issued", body = TokenResp),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse)
    ),
    summary = "Authenticate and obtain a bearer token"
)]
#[post("/login")]
pub(super) async fn login(
    user_ops: web::Data<UserOperations>,
    auth_cfg: web::Data<AuthConfig>,
    req_body: web::Json<LoginReq>,
) -> HttpResponse {
    let req_body = req_body.into_inner();
    let email = req_body.email;

    // Unknown email and bad password produce the same body: no account
    // existence leak.
    let user = match user_ops.get_user_by_email(&email) {
        Ok(user) => user,
        Err(RepositoryError::NotFound(_)) => {
            debug!("login: unknown email '{}'", email);
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: INVALID_CREDENTIALS.to_string(),
            });
        }
        Err(e) => {
            error!("login: failed to look up email '{}': {}", email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Login failed".to_string(),
            });
        }
    };

    let password = req_body.password;
    let stored_hash = user.password_hash.clone();
    match web::block(move || verify_password(&password, &stored_hash)).await {
        Ok(Ok(())) => {}
        Ok(Err(PasswordError::Mismatch)) => {
            debug!("login: wrong password for '{}'", email);
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: INVALID_CREDENTIALS.to_string(),
            });
        }
        Ok(Err(e)) => {
            error!("login: hash verification failed for '{}': {}", email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Login failed".to_string(),
            });
        }
        Err(e) => {
            error!("login: verification task failed for '{}': {}", email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Login failed".to_string(),
            });
        }
    }

    match issue_token(user.user_id, &auth_cfg) {
        Ok(token) => {
            debug!("login: issued token for user {}", user.user_id);
            HttpResponse::Ok().json(TokenResp { token })
        }
        Err(e) => {
            error!("login: failed to issue token for user {}: {}", user.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Login failed".to_string(),
            })
        }
    }
}
