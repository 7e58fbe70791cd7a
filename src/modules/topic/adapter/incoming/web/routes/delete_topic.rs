use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{EmptySuccessResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::topic::application::ports::incoming::use_cases::DeleteTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topic deleted", body = EmptySuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[delete("/api/topics/{id}")]
pub async fn delete_topic_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::empty("Topic delete succeed."),
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        DeleteTopicError::RepositoryError(msg) => {
            error!("Failed to delete topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
