use std::sync::Arc;

use actix_web::web;

use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, FavoriteTopicUseCase, GetSingleTopicUseCase,
    GetTopicsUseCase, GetUserTopicsUseCase, UpdateTopicError, UpdateTopicUseCase,
};
use crate::modules::topic::application::TopicUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a harmless stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                get_list: Arc::new(default_get_topics()),
                get_user_topics: Arc::new(default_get_user_topics()),
                create: Arc::new(StubCreateTopicUseCase::default()),
                get_single: Arc::new(StubGetSingleTopicUseCase::not_found()),
                update: Arc::new(StubUpdateTopicUseCase::error(UpdateTopicError::NotFound)),
                delete: Arc::new(StubDeleteTopicUseCase::ok()),
                favorite: Arc::new(StubFavoriteTopicUseCase::ok()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_user_topics(
        mut self,
        uc: impl GetUserTopicsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.get_user_topics = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_single_topic(
        mut self,
        uc: impl GetSingleTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_favorite_topic(
        mut self,
        uc: impl FavoriteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.favorite = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
