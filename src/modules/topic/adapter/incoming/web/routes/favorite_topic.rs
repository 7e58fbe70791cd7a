use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{EmptySuccessResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::topic::application::ports::incoming::use_cases::{
    FavoriteAction, FavoriteTopicError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn apply(
    data: &AppState,
    user: AuthenticatedUser,
    topic_id: Uuid,
    action: FavoriteAction,
) -> HttpResponse {
    let msg = match action {
        FavoriteAction::Add => "Topic favorite succeed.",
        FavoriteAction::Remove => "Topic unfavorite succeed.",
    };

    match data
        .topic
        .favorite
        .execute(user.user_id, topic_id, action)
        .await
    {
        Ok(()) => ApiResponse::empty(msg),
        Err(err) => map_favorite_topic_error(err),
    }
}

fn map_favorite_topic_error(err: FavoriteTopicError) -> HttpResponse {
    match err {
        FavoriteTopicError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FavoriteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        FavoriteTopicError::RepositoryError(msg) => {
            error!("Failed to change favorite: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/topics/{id}/favorite",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topic is in the caller's favorites", body = EmptySuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic or caller not found", body = ErrorResponse)
    )
)]
#[post("/api/topics/{id}/favorite")]
pub async fn favorite_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply(&data, user, path.into_inner(), FavoriteAction::Add).await
}

#[utoipa::path(
    delete,
    path = "/api/topics/{id}/favorite",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topic is no longer a favorite", body = EmptySuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic or caller not found", body = ErrorResponse)
    )
)]
#[delete("/api/topics/{id}/favorite")]
pub async fn unfavorite_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply(&data, user, path.into_inner(), FavoriteAction::Remove).await
}
