use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::{ResolveUserIdError, UserIdentityResolver};
use crate::modules::topic::application::domain::entities::{TopicCommand, TopicView};
use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};

pub struct CreateTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
    resolver: UserIdentityResolver,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R, resolver: UserIdentityResolver) -> Self {
        Self {
            repository,
            resolver,
        }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicView, CreateTopicError> {
        // 1️⃣ The owner must be a live user
        let owner = self
            .resolver
            .by_id(owner)
            .await
            .map_err(|e| match e {
                ResolveUserIdError::NotFound => CreateTopicError::UserNotFound,
                ResolveUserIdError::RepositoryError(msg) => CreateTopicError::RepositoryError(msg),
            })?
            .id;

        // 2️⃣ Persist
        let (title, content) = command.into_parts();

        self.repository
            .create_topic(CreateTopicData {
                owner,
                title,
                content,
            })
            .await
            .map_err(|e| match e {
                TopicRepositoryError::DatabaseError(msg) => CreateTopicError::RepositoryError(msg),
                TopicRepositoryError::TopicNotFound => CreateTopicError::RepositoryError(
                    "created topic could not be read back".to_string(),
                ),
            })
    }
}
