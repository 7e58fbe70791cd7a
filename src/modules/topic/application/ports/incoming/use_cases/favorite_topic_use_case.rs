use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteTopicError {
    #[error("User not found")]
    UserNotFound,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FavoriteTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        topic_id: Uuid,
        action: FavoriteAction,
    ) -> Result<(), FavoriteTopicError>;
}
