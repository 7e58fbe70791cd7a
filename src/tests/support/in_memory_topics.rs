use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, FavoriteRepository, FavoriteRepositoryError, TopicQuery, TopicQueryError,
    TopicRepository, TopicRepositoryError, UpdateTopicData,
};
use crate::shared::api::{PageRequest, PageResult};

/// One shared table of topics and favorites behind every port, so writes
/// made through one service are visible to the next. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryTopics {
    topics: Arc<Mutex<Vec<TopicView>>>,
    favorites: Arc<Mutex<Vec<(UserId, Uuid)>>>,
}

impl InMemoryTopics {
    pub fn topic_count(&self) -> usize {
        self.topics.lock().unwrap().len()
    }

    fn page_of<P>(&self, page: PageRequest, keep: P) -> PageResult<TopicView>
    where
        P: Fn(&TopicView) -> bool,
    {
        let mut matching: Vec<TopicView> = self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|t| keep(t))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        PageResult::new(items, page, total)
    }

    fn exists(&self, topic_id: Uuid) -> bool {
        self.topics.lock().unwrap().iter().any(|t| t.id == topic_id)
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopics {
    async fn get_by_id(&self, topic_id: Uuid) -> Result<TopicView, TopicQueryError> {
        self.topics
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == topic_id)
            .cloned()
            .ok_or(TopicQueryError::NotFound)
    }

    async fn list_all(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError> {
        Ok(self.page_of(page, |_| true))
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        Ok(self.page_of(page, |t| t.owner == owner))
    }

    async fn list_favorites(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        let ids: Vec<Uuid> = self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == user)
            .map(|(_, id)| *id)
            .collect();

        Ok(self.page_of(page, |t| ids.contains(&t.id)))
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopics {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError> {
        let now = Utc::now();
        let topic = TopicView {
            id: Uuid::new_v4(),
            owner: data.owner,
            title: data.title,
            content: data.content,
            created_at: now,
            updated_at: now,
        };

        self.topics.lock().unwrap().push(topic.clone());
        Ok(topic)
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicView, TopicRepositoryError> {
        let mut topics = self.topics.lock().unwrap();
        let topic = topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        topic.title = data.title;
        topic.content = data.content;
        topic.updated_at = Utc::now();

        Ok(topic.clone())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let mut topics = self.topics.lock().unwrap();
        let before = topics.len();
        topics.retain(|t| t.id != topic_id);

        if topics.len() == before {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        // ON DELETE CASCADE
        self.favorites
            .lock()
            .unwrap()
            .retain(|(_, id)| *id != topic_id);
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryTopics {
    async fn add_favorite(&self, user: UserId, topic_id: Uuid) -> Result<(), FavoriteRepositoryError> {
        if !self.exists(topic_id) {
            return Err(FavoriteRepositoryError::TopicNotFound);
        }

        let mut favorites = self.favorites.lock().unwrap();
        if !favorites.contains(&(user, topic_id)) {
            favorites.push((user, topic_id));
        }
        Ok(())
    }

    async fn remove_favorite(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        if !self.exists(topic_id) {
            return Err(FavoriteRepositoryError::TopicNotFound);
        }

        self.favorites
            .lock()
            .unwrap()
            .retain(|entry| *entry != (user, topic_id));
        Ok(())
    }
}
