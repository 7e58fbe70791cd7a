use async_trait::async_trait;

use crate::{
    shared::api::{PageRequest, PageResult},
    topic::application::domain::entities::TopicView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, GetTopicsError>;
}
