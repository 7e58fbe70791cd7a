use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::{TopicDraft, TopicView};
use crate::modules::topic::application::ports::incoming::use_cases::{
    UpdateTopicError, UpdateTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        draft: TopicDraft,
    ) -> Result<TopicView, UpdateTopicError> {
        // 1️⃣ Look up
        self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => UpdateTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
        })?;

        // 2️⃣ Validate
        let (title, content) = draft.validate()?.into_parts();

        // 3️⃣ Overwrite title and content
        self.repository
            .update_topic(topic_id, UpdateTopicData { title, content })
            .await
            .map_err(|e| match e {
                // Deleted between the read and the write
                TopicRepositoryError::TopicNotFound => UpdateTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })
    }
}
