use std::sync::Arc;

use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, FavoriteTopicUseCase, GetSingleTopicUseCase,
    GetTopicsUseCase, GetUserTopicsUseCase, UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_user_topics: Arc<dyn GetUserTopicsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub favorite: Arc<dyn FavoriteTopicUseCase + Send + Sync>,
}
