// src/api/schemas.rs
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserSummary;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
    /// Human-readable outcome
    #[schema(example = "Topic query succeed.")]
    pub msg: String,
}

/// Success with `data: null`
#[derive(Serialize, ToSchema)]
pub struct EmptySuccessResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Option<Object>, example = json!(null))]
    pub data: Option<()>,
    #[schema(example = "Topic delete succeed.")]
    pub msg: String,
}

/// Paginated listing
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PaginatedSchema<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<T>,
    #[schema(example = "Topics query succeed.")]
    pub msg: String,
    /// Number of matching items across all pages
    #[schema(example = 42)]
    pub total: u64,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
}

/// Paginated listing scoped to one user
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct UserPaginatedSchema<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<T>,
    pub msg: String,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub user: UserSummary,
}

/// Field-level validation failure: `data` maps field name to messages
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = json!({ "title": ["This field may not be blank."] }))]
    pub data: BTreeMap<String, Vec<String>>,
    #[schema(example = "Topic create failed.")]
    pub msg: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    #[schema(value_type = Option<Object>, example = json!(null))]
    pub data: Option<()>,
    #[schema(example = "Topic not found")]
    pub msg: String,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "TOPIC_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Topic not found")]
    pub message: String,
}
