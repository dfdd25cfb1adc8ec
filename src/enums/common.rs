use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// 400 body for schema validation failures: field name to messages.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: BTreeMap<String, Vec<String>>,
}
