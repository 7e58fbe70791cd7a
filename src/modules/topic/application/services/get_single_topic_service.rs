use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::incoming::use_cases::{
    GetSingleTopicError, GetSingleTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

pub struct GetSingleTopicService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> GetSingleTopicService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleTopicUseCase for GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<TopicView, GetSingleTopicError> {
        self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => GetSingleTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => GetSingleTopicError::QueryFailed(msg),
        })
    }
}
