use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::dto::TopicResponse;
use crate::api::schemas::{ErrorResponse, UserPaginatedSchema};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::topic::application::ports::incoming::use_cases::{
    GetUserTopicsError, UserSubject, UserTopicsKind,
};
use crate::shared::api::{ApiResponse, PageQuery, PageRequest, PaginatedResponse};
use crate::AppState;

const OWN_MSG: &str = "User's own topics query succeed.";
const FAVORITE_MSG: &str = "User's favorite topics query succeed.";

//
// ──────────────────────────────────────────────────────────
// Shared flow
// ──────────────────────────────────────────────────────────
//

async fn respond(
    data: &AppState,
    subject: UserSubject,
    kind: UserTopicsKind,
    page: PageRequest,
) -> HttpResponse {
    let msg = match kind {
        UserTopicsKind::Owned => OWN_MSG,
        UserTopicsKind::Favorites => FAVORITE_MSG,
    };

    match data.topic.get_user_topics.execute(subject, kind, page).await {
        Ok(result) => PaginatedResponse::page_with_user(
            result.topics.map(TopicResponse::from),
            msg,
            result.user,
        ),
        Err(err) => map_get_user_topics_error(err),
    }
}

fn map_get_user_topics_error(err: GetUserTopicsError) -> HttpResponse {
    match err {
        GetUserTopicsError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        GetUserTopicsError::QueryFailed(msg) => {
            error!("Failed to list user topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Public, by username
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/users/{username}/topics",
    tag = "topics",
    params(("username" = String, Path, description = "Author's username"), PageQuery),
    responses(
        (status = 200, description = "Topics the user wrote", body = inline(UserPaginatedSchema<TopicResponse>)),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[get("/api/users/{username}/topics")]
pub async fn get_user_topics_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        &data,
        UserSubject::Username(path.into_inner()),
        UserTopicsKind::Owned,
        query.into_inner().into(),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/users/{username}/favorites",
    tag = "topics",
    params(("username" = String, Path, description = "Username"), PageQuery),
    responses(
        (status = 200, description = "Topics the user marked as favorite", body = inline(UserPaginatedSchema<TopicResponse>)),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[get("/api/users/{username}/favorites")]
pub async fn get_user_favorites_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        &data,
        UserSubject::Username(path.into_inner()),
        UserTopicsKind::Favorites,
        query.into_inner().into(),
    )
    .await
}

//
// ──────────────────────────────────────────────────────────
// Authenticated caller
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/me/topics",
    tag = "topics",
    params(PageQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's own topics", body = inline(UserPaginatedSchema<TopicResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller's account no longer exists", body = ErrorResponse)
    )
)]
#[get("/api/me/topics")]
pub async fn get_my_topics_handler(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        &data,
        UserSubject::Authenticated(user.user_id),
        UserTopicsKind::Owned,
        query.into_inner().into(),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/me/favorites",
    tag = "topics",
    params(PageQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's favorite topics", body = inline(UserPaginatedSchema<TopicResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller's account no longer exists", body = ErrorResponse)
    )
)]
#[get("/api/me/favorites")]
pub async fn get_my_favorites_handler(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        &data,
        UserSubject::Authenticated(user.user_id),
        UserTopicsKind::Favorites,
        query.into_inner().into(),
    )
    .await
}
