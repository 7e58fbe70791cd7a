use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::entities::{TopicDraft, TopicValidationErrors, TopicView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] TopicValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replace of title and content. The topic is looked up before the
/// draft is validated, so a missing topic wins over a bad body.
#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid, draft: TopicDraft)
        -> Result<TopicView, UpdateTopicError>;
}
