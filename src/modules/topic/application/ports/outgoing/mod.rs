mod favorite_repository;
mod topic_query;
mod topic_repository;

pub use favorite_repository::{FavoriteRepository, FavoriteRepositoryError};
pub use topic_query::{TopicQuery, TopicQueryError};
pub use topic_repository::{
    CreateTopicData, TopicRepository, TopicRepositoryError, UpdateTopicData,
};
