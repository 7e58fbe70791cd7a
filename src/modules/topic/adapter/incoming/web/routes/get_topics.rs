use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::TopicResponse;
use crate::api::schemas::{ErrorResponse, PaginatedSchema};
use crate::modules::topic::application::ports::incoming::use_cases::GetTopicsError;
use crate::shared::api::{ApiResponse, PageQuery, PageRequest, PaginatedResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    params(PageQuery),
    responses(
        (status = 200, description = "Topics, newest first", body = inline(PaginatedSchema<TopicResponse>)),
        (status = 400, description = "Malformed pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::from(query.into_inner());

    match data.topic.get_list.execute(page).await {
        Ok(result) => {
            PaginatedResponse::page(result.map(TopicResponse::from), "Topics query succeed.")
        }

        Err(GetTopicsError::QueryFailed(msg)) => {
            error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
