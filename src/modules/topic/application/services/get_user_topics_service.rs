use async_trait::async_trait;

use crate::auth::application::domain::entities::UserSummary;
use crate::auth::application::helpers::{ResolveUserIdError, UserIdentityResolver};
use crate::modules::topic::application::ports::incoming::use_cases::{
    GetUserTopicsError, GetUserTopicsUseCase, UserSubject, UserTopicsKind, UserTopicsPage,
};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::shared::api::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetUserTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
    resolver: UserIdentityResolver,
}

impl<Q> GetUserTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q, resolver: UserIdentityResolver) -> Self {
        Self { query, resolver }
    }

    async fn resolve(&self, subject: UserSubject) -> Result<UserSummary, GetUserTopicsError> {
        let resolved = match subject {
            UserSubject::Username(name) => self.resolver.by_username(&name).await,
            UserSubject::Authenticated(id) => self.resolver.by_id(id).await,
        };

        resolved.map_err(|e| match e {
            ResolveUserIdError::NotFound => GetUserTopicsError::UserNotFound,
            ResolveUserIdError::RepositoryError(msg) => GetUserTopicsError::QueryFailed(msg),
        })
    }
}

#[async_trait]
impl<Q> GetUserTopicsUseCase for GetUserTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        subject: UserSubject,
        kind: UserTopicsKind,
        page: PageRequest,
    ) -> Result<UserTopicsPage, GetUserTopicsError> {
        let user = self.resolve(subject).await?;

        let topics = match kind {
            UserTopicsKind::Owned => self.query.list_by_owner(user.id, page).await,
            UserTopicsKind::Favorites => self.query.list_favorites(user.id, page).await,
        }
        .map_err(|e| match e {
            TopicQueryError::DatabaseError(msg) => GetUserTopicsError::QueryFailed(msg),
            TopicQueryError::NotFound => {
                GetUserTopicsError::QueryFailed("unexpected not-found on listing".to_string())
            }
        })?;

        Ok(UserTopicsPage { user, topics })
    }
}
