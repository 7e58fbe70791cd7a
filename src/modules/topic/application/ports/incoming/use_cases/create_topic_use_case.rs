use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::{TopicCommand, TopicView},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicView, CreateTopicError>;
}
