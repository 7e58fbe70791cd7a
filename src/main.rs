pub mod modules;
pub use modules::auth;
pub use modules::topic;
pub mod health;

mod api;
mod config;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::UserQueryPostgres;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::topic::adapter::outgoing::{
    FavoriteRepositoryPostgres, TopicQueryPostgres, TopicRepositoryPostgres,
};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, FavoriteTopicService, GetSingleTopicService,
    GetTopicsService, GetUserTopicsService, UpdateTopicService,
};
use crate::topic::application::TopicUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

fn build_topic_use_cases(db: &Arc<DatabaseConnection>) -> TopicUseCases {
    let topic_query = TopicQueryPostgres::new(Arc::clone(db));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(db));
    let favorite_repo = FavoriteRepositoryPostgres::new(Arc::clone(db));
    let resolver = UserIdentityResolver::new(Arc::new(UserQueryPostgres::new(Arc::clone(db))));

    TopicUseCases {
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_user_topics: Arc::new(GetUserTopicsService::new(
            topic_query.clone(),
            resolver.clone(),
        )),
        create: Arc::new(CreateTopicService::new(topic_repo.clone(), resolver.clone())),
        get_single: Arc::new(GetSingleTopicService::new(topic_query.clone())),
        update: Arc::new(UpdateTopicService::new(topic_query, topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_repo)),
        favorite: Arc::new(FavoriteTopicService::new(favorite_repo, resolver)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let jwt_config = JwtConfig::from_env().map_err(io::Error::other)?;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;
    let db_arc = Arc::new(conn);

    let state = AppState {
        topic: build_topic_use_cases(&db_arc),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::topic::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Listings
    cfg.service(routes::get_topics_handler);
    cfg.service(routes::get_user_topics_handler);
    cfg.service(routes::get_user_favorites_handler);
    cfg.service(routes::get_my_topics_handler);
    cfg.service(routes::get_my_favorites_handler);
    // Favorites
    cfg.service(routes::favorite_topic_handler);
    cfg.service(routes::unfavorite_topic_handler);
    // Single topic
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::get_single_topic_handler);
    cfg.service(routes::update_topic_handler);
    cfg.service(routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
