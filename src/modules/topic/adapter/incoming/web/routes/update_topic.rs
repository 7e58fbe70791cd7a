use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{TopicPayload, TopicResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::topic::application::ports::incoming::use_cases::UpdateTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    request_body = TopicPayload,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topic replaced", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Field errors", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<TopicPayload>,
) -> impl Responder {
    match data
        .topic
        .update
        .execute(path.into_inner(), payload.into_inner().into_draft())
        .await
    {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic), "Topic update succeed."),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        UpdateTopicError::Validation(errors) => {
            ApiResponse::validation_failed(errors, "Topic update failed.")
        }
        UpdateTopicError::RepositoryError(msg) => {
            error!("Failed to update topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
