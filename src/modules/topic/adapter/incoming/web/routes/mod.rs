mod create_topic;
mod delete_topic;
pub mod dto;
mod favorite_topic;
mod get_single_topic;
mod get_topics;
mod get_user_topics;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use dto::{TopicPayload, TopicResponse};
pub use favorite_topic::*;
pub use get_single_topic::*;
pub use get_topics::*;
pub use get_user_topics::*;
pub use update_topic::*;
