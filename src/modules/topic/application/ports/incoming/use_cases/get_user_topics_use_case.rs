use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::{UserId, UserSummary},
    shared::api::{PageRequest, PageResult},
    topic::application::domain::entities::TopicView,
};

//
// ──────────────────────────────────────────────────────────
// Input / Output
// ──────────────────────────────────────────────────────────
//

/// Whose topics to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSubject {
    /// Public lookup by username
    Username(String),
    /// The caller's own identity
    Authenticated(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum UserTopicsKind {
    Owned,
    Favorites,
}

#[derive(Debug, Clone)]
pub struct UserTopicsPage {
    pub user: UserSummary,
    pub topics: PageResult<TopicView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserTopicsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: UserSubject,
        kind: UserTopicsKind,
        page: PageRequest,
    ) -> Result<UserTopicsPage, GetUserTopicsError>;
}
