use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{TopicPayload, TopicResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::topic::application::ports::incoming::use_cases::CreateTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const FAILED: &str = "Topic create failed.";

#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = TopicPayload,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Field errors", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller is not an active user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<TopicPayload>,
) -> impl Responder {
    // 1️⃣ Validate
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(errors, FAILED),
    };

    // 2️⃣ Persist with the caller as owner
    match data.topic.create.execute(user.user_id, command).await {
        Ok(topic) => ApiResponse::created(TopicResponse::from(topic), "Topic create succeed."),
        Err(err) => map_create_topic_error(err),
    }
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        CreateTopicError::RepositoryError(msg) => {
            error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
