use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::TopicResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::topic::application::ports::incoming::use_cases::GetSingleTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic found", body = inline(SuccessResponse<TopicResponse>)),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[get("/api/topics/{id}")]
pub async fn get_single_topic_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.get_single.execute(path.into_inner()).await {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic), "Topic query succeed."),
        Err(err) => map_get_single_topic_error(err),
    }
}

fn map_get_single_topic_error(err: GetSingleTopicError) -> HttpResponse {
    match err {
        GetSingleTopicError::NotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        GetSingleTopicError::QueryFailed(msg) => {
            error!("Failed to fetch topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
