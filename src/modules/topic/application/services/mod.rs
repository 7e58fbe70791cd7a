mod create_topic_service;
mod delete_topic_service;
mod favorite_topic_service;
mod get_single_topic_service;
mod get_topics_service;
mod get_user_topics_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use favorite_topic_service::FavoriteTopicService;
pub use get_single_topic_service::GetSingleTopicService;
pub use get_topics_service::GetTopicsService;
pub use get_user_topics_service::GetUserTopicsService;
pub use update_topic_service::UpdateTopicService;
