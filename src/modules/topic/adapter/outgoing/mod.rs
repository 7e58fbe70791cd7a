mod favorite_repository_postgres;
pub mod sea_orm_entity;
mod topic_query_postgres;
mod topic_repository_postgres;

pub use favorite_repository_postgres::FavoriteRepositoryPostgres;
pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
