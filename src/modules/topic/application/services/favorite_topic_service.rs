use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::{ResolveUserIdError, UserIdentityResolver};
use crate::modules::topic::application::ports::incoming::use_cases::{
    FavoriteAction, FavoriteTopicError, FavoriteTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};

pub struct FavoriteTopicService<F>
where
    F: FavoriteRepository,
{
    repository: F,
    resolver: UserIdentityResolver,
}

impl<F> FavoriteTopicService<F>
where
    F: FavoriteRepository,
{
    pub fn new(repository: F, resolver: UserIdentityResolver) -> Self {
        Self {
            repository,
            resolver,
        }
    }
}

#[async_trait]
impl<F> FavoriteTopicUseCase for FavoriteTopicService<F>
where
    F: FavoriteRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        topic_id: Uuid,
        action: FavoriteAction,
    ) -> Result<(), FavoriteTopicError> {
        // 1️⃣ Only live users keep favorites
        let user = self
            .resolver
            .by_id(user)
            .await
            .map_err(|e| match e {
                ResolveUserIdError::NotFound => FavoriteTopicError::UserNotFound,
                ResolveUserIdError::RepositoryError(msg) => FavoriteTopicError::RepositoryError(msg),
            })?
            .id;

        // 2️⃣ Apply
        let result = match action {
            FavoriteAction::Add => self.repository.add_favorite(user, topic_id).await,
            FavoriteAction::Remove => self.repository.remove_favorite(user, topic_id).await,
        };

        result.map_err(|e| match e {
            FavoriteRepositoryError::TopicNotFound => FavoriteTopicError::TopicNotFound,
            FavoriteRepositoryError::DatabaseError(msg) => FavoriteTopicError::RepositoryError(msg),
        })
    }
}
