use crate::models::user::Role;

/// Authenticated identity attached to request extensions by the auth
/// middleware.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: i32,
    pub role: Role,
}
