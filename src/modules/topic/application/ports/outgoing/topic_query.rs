use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::TopicView;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Listings are newest first; `total` and the page come from
/// the same snapshot.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_by_id(&self, topic_id: Uuid) -> Result<TopicView, TopicQueryError>;

    async fn list_all(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError>;

    async fn list_by_owner(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError>;

    /// Topics `user` marked as favorite; `total` is the number of favorites.
    async fn list_favorites(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError>;
}
