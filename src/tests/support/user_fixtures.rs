use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};

/* --------------------------------------------------
 * UserQuery mock
 * -------------------------------------------------- */

/// Answers every lookup with the same canned result.
#[derive(Clone)]
pub struct MockUserQuery {
    result: Result<Option<UserQueryResult>, UserQueryError>,
}

#[async_trait]
impl UserQuery for MockUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.result.clone()
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.result.clone()
    }
}

pub fn user_row(id: Uuid, username: &str, is_deleted: bool) -> UserQueryResult {
    UserQueryResult {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        is_deleted,
    }
}

fn resolver(result: Result<Option<UserQueryResult>, UserQueryError>) -> UserIdentityResolver {
    UserIdentityResolver::new(Arc::new(MockUserQuery { result }))
}

pub fn active_user_resolver(id: Uuid) -> UserIdentityResolver {
    resolver(Ok(Some(user_row(id, "alice", false))))
}

pub fn deleted_user_resolver(id: Uuid) -> UserIdentityResolver {
    resolver(Ok(Some(user_row(id, "ghost", true))))
}

pub fn missing_user_resolver() -> UserIdentityResolver {
    resolver(Ok(None))
}

pub fn failing_user_resolver(msg: &str) -> UserIdentityResolver {
    resolver(Err(UserQueryError::DatabaseError(msg.to_string())))
}
