use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Both operations are idempotent for an existing topic.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn add_favorite(&self, user: UserId, topic_id: Uuid)
        -> Result<(), FavoriteRepositoryError>;

    async fn remove_favorite(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError>;
}
