use crate::api::schemas::{
    EmptySuccessResponse, ErrorDetail, ErrorResponse, ValidationErrorResponse,
};
use crate::auth::application::domain::entities::UserSummary;
use crate::topic::adapter::incoming::web::routes::{TopicPayload, TopicResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum API",
        version = "1.0.0",
        description = "Topics, per-user listings and favorites"
    ),
    paths(
        // Listings
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_user_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_user_favorites_handler,
        crate::topic::adapter::incoming::web::routes::get_my_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_my_favorites_handler,

        // Single topic
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_single_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Favorites
        crate::topic::adapter::incoming::web::routes::favorite_topic_handler,
        crate::topic::adapter::incoming::web::routes::unfavorite_topic_handler,
    ),
    components(
        schemas(
            // Response wrappers
            EmptySuccessResponse,
            ValidationErrorResponse,
            ErrorResponse,
            ErrorDetail,

            // Topic DTOs
            TopicPayload,
            TopicResponse,
            UserSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic listing, authoring and favorites"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity service"))
                        .build(),
                ),
            )
        }
    }
}
