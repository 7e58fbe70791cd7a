use std::sync::Arc;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns a username or an authenticated id into an active user.
/// Soft-deleted users resolve as `NotFound`.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_username(&self, username: &str) -> Result<UserSummary, ResolveUserIdError> {
        Self::active(self.user_query.find_by_username(username).await)
    }

    pub async fn by_id(&self, user_id: UserId) -> Result<UserSummary, ResolveUserIdError> {
        Self::active(self.user_query.find_by_id(user_id.value()).await)
    }

    fn active(
        found: Result<Option<UserQueryResult>, UserQueryError>,
    ) -> Result<UserSummary, ResolveUserIdError> {
        match found {
            Ok(Some(user)) if !user.is_deleted => Ok(UserSummary {
                id: UserId::from(user.id),
                username: user.username,
                created_at: user.created_at,
            }),
            Ok(_) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(ResolveUserIdError::RepositoryError(msg)),
        }
    }
}
