mod create_topic_use_case;
mod delete_topic_use_case;
mod favorite_topic_use_case;
mod get_single_topic_use_case;
mod get_topics_use_case;
mod get_user_topics_use_case;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use favorite_topic_use_case::{FavoriteAction, FavoriteTopicError, FavoriteTopicUseCase};
pub use get_single_topic_use_case::{GetSingleTopicError, GetSingleTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use get_user_topics_use_case::{
    GetUserTopicsError, GetUserTopicsUseCase, UserSubject, UserTopicsKind, UserTopicsPage,
};
pub use update_topic_use_case::{UpdateTopicError, UpdateTopicUseCase};
