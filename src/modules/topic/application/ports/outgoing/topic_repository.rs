use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::TopicView;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub title: String,
    pub content: String,
}

/// Full overwrite of the mutable fields
#[derive(Debug, Clone)]
pub struct UpdateTopicData {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicView, TopicRepositoryError>;

    /// Hard delete; favorites go with it through the FK cascade.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
