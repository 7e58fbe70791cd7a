use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    UpdateTopicData,
};
use crate::shared::api::{PageRequest, PageResult};

pub fn sample_topic(owner: UserId, title: &str) -> TopicView {
    let now = Utc::now();
    TopicView {
        id: Uuid::new_v4(),
        owner,
        title: title.to_string(),
        content: format!("Content of {title}"),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_user(id: UserId, username: &str) -> UserSummary {
    UserSummary {
        id,
        username: username.to_string(),
        created_at: Utc::now(),
    }
}

pub fn page_of(items: Vec<TopicView>, page: PageRequest, total: u64) -> PageResult<TopicView> {
    PageResult::new(items, page, total)
}

pub fn empty_page() -> PageResult<TopicView> {
    PageResult::empty(PageRequest::default())
}

/* --------------------------------------------------
 * TopicQuery mock
 * -------------------------------------------------- */

/// Returns canned results and records which listing was asked for.
#[derive(Clone)]
pub struct MockTopicQuery {
    pub single: Result<TopicView, TopicQueryError>,
    pub list: Result<PageResult<TopicView>, TopicQueryError>,
    pub last_call: Arc<Mutex<Option<(&'static str, Option<UserId>)>>>,
}

impl MockTopicQuery {
    pub fn with_topic(topic: TopicView) -> Self {
        Self {
            single: Ok(topic),
            ..Self::listing(Ok(empty_page()))
        }
    }

    pub fn with_single(single: Result<TopicView, TopicQueryError>) -> Self {
        Self {
            single,
            ..Self::listing(Ok(empty_page()))
        }
    }

    pub fn listing(list: Result<PageResult<TopicView>, TopicQueryError>) -> Self {
        Self {
            single: Err(TopicQueryError::NotFound),
            list,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_call(&self) -> Option<(&'static str, Option<UserId>)> {
        *self.last_call.lock().unwrap()
    }

    fn record(&self, name: &'static str, user: Option<UserId>) {
        *self.last_call.lock().unwrap() = Some((name, user));
    }
}

#[async_trait]
impl TopicQuery for MockTopicQuery {
    async fn get_by_id(&self, _topic_id: Uuid) -> Result<TopicView, TopicQueryError> {
        self.record("get_by_id", None);
        self.single.clone()
    }

    async fn list_all(&self, _page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError> {
        self.record("list_all", None);
        self.list.clone()
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
        _page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        self.record("list_by_owner", Some(owner));
        self.list.clone()
    }

    async fn list_favorites(
        &self,
        user: UserId,
        _page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        self.record("list_favorites", Some(user));
        self.list.clone()
    }
}

/* --------------------------------------------------
 * TopicRepository mock
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct MockTopicRepository {
    pub write: Result<TopicView, TopicRepositoryError>,
    pub delete: Result<(), TopicRepositoryError>,
    pub calls: Arc<AtomicUsize>,
}

impl MockTopicRepository {
    pub fn returning(write: Result<TopicView, TopicRepositoryError>) -> Self {
        Self {
            write,
            delete: Ok(()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn deleting(delete: Result<(), TopicRepositoryError>) -> Self {
        Self {
            write: Err(TopicRepositoryError::TopicNotFound),
            delete,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopicRepository for MockTopicRepository {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.write.clone().map(|topic| TopicView {
            owner: data.owner,
            title: data.title,
            content: data.content,
            ..topic
        })
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicView, TopicRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.write.clone().map(|topic| TopicView {
            id: topic_id,
            title: data.title,
            content: data.content,
            ..topic
        })
    }

    async fn delete_topic(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.delete.clone()
    }
}
