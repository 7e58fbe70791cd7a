use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::{TopicCommand, TopicDraft, TopicView};
use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase, FavoriteAction,
    FavoriteTopicError, FavoriteTopicUseCase, GetSingleTopicError, GetSingleTopicUseCase,
    GetTopicsError, GetTopicsUseCase, GetUserTopicsError, GetUserTopicsUseCase, UpdateTopicError,
    UpdateTopicUseCase, UserSubject, UserTopicsKind, UserTopicsPage,
};
use crate::shared::api::{PageRequest, PageResult};
use crate::tests::support::topic_fixtures::{empty_page, sample_topic};

/* --------------------------------------------------
 * GetTopics
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<PageResult<TopicView>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(page: PageResult<TopicView>) -> Self {
        Self { result: Ok(page) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, GetTopicsError> {
        // Echo the normalized request so handlers can be checked for it
        self.result.clone().map(|mut p| {
            p.page = page.page;
            p.per_page = page.per_page;
            p
        })
    }
}

/* --------------------------------------------------
 * GetUserTopics
 * -------------------------------------------------- */

type UserTopicsCall = (UserSubject, UserTopicsKind, PageRequest);

#[derive(Clone)]
pub struct StubGetUserTopicsUseCase {
    result: Result<UserTopicsPage, GetUserTopicsError>,
    last_call: Arc<Mutex<Option<UserTopicsCall>>>,
}

impl StubGetUserTopicsUseCase {
    pub fn success(page: UserTopicsPage) -> Self {
        Self::with_result(Ok(page))
    }

    pub fn error(err: GetUserTopicsError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<UserTopicsPage, GetUserTopicsError>) -> Self {
        Self {
            result,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_call(&self) -> Option<UserTopicsCall> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl GetUserTopicsUseCase for StubGetUserTopicsUseCase {
    async fn execute(
        &self,
        subject: UserSubject,
        kind: UserTopicsKind,
        page: PageRequest,
    ) -> Result<UserTopicsPage, GetUserTopicsError> {
        *self.last_call.lock().unwrap() = Some((subject, kind, page));
        self.result.clone()
    }
}

/* --------------------------------------------------
 * CreateTopic
 * -------------------------------------------------- */

/// Echoes the command back as a freshly created topic unless told to fail.
#[derive(Clone, Default)]
pub struct StubCreateTopicUseCase {
    failure: Option<CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn failure(msg: &str) -> Self {
        Self::error(CreateTopicError::RepositoryError(msg.into()))
    }

    pub fn error(err: CreateTopicError) -> Self {
        Self { failure: Some(err) }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicView, CreateTopicError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let (title, content) = command.into_parts();
        Ok(TopicView {
            title,
            content,
            ..sample_topic(owner, "")
        })
    }
}

/* --------------------------------------------------
 * GetSingleTopic
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetSingleTopicUseCase {
    result: Result<TopicView, GetSingleTopicError>,
}

impl StubGetSingleTopicUseCase {
    pub fn found(topic: TopicView) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleTopicError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSingleTopicError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetSingleTopicUseCase for StubGetSingleTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<TopicView, GetSingleTopicError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * UpdateTopic
 * -------------------------------------------------- */

/// Behaves as if `existing` was found: the draft is validated and applied to it.
#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<TopicView, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn updating(existing: TopicView) -> Self {
        Self {
            result: Ok(existing),
        }
    }

    pub fn error(err: UpdateTopicError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        topic_id: Uuid,
        draft: TopicDraft,
    ) -> Result<TopicView, UpdateTopicError> {
        let topic = self.result.clone()?;
        let (title, content) = draft.validate()?.into_parts();

        Ok(TopicView {
            id: topic_id,
            title,
            content,
            ..topic
        })
    }
}

/* --------------------------------------------------
 * DeleteTopic
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteTopicError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * FavoriteTopic
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubFavoriteTopicUseCase {
    result: Result<(), FavoriteTopicError>,
    actions: Arc<Mutex<Vec<(UserId, FavoriteAction)>>>,
}

impl StubFavoriteTopicUseCase {
    pub fn ok() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn error(err: FavoriteTopicError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<(), FavoriteTopicError>) -> Self {
        Self {
            result,
            actions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn actions(&self) -> Vec<(UserId, FavoriteAction)> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl FavoriteTopicUseCase for StubFavoriteTopicUseCase {
    async fn execute(
        &self,
        user: UserId,
        _topic_id: Uuid,
        action: FavoriteAction,
    ) -> Result<(), FavoriteTopicError> {
        self.actions.lock().unwrap().push((user, action));
        self.result.clone()
    }
}

pub fn default_get_topics() -> StubGetTopicsUseCase {
    StubGetTopicsUseCase::success(empty_page())
}

pub fn default_get_user_topics() -> StubGetUserTopicsUseCase {
    StubGetUserTopicsUseCase::error(GetUserTopicsError::UserNotFound)
}
