use async_trait::async_trait;

use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::incoming::use_cases::{
    GetTopicsError, GetTopicsUseCase,
};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::shared::api::{PageRequest, PageResult};

pub struct GetTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, GetTopicsError> {
        self.query.list_all(page).await.map_err(|e| match e {
            TopicQueryError::DatabaseError(msg) => GetTopicsError::QueryFailed(msg),
            TopicQueryError::NotFound => {
                GetTopicsError::QueryFailed("unexpected not-found on listing".to_string())
            }
        })
    }
}
