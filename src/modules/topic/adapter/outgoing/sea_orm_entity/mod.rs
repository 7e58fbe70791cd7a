pub mod topics;
pub mod user_favorite_topics;
