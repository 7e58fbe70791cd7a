pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_topics;
pub mod stubs;
pub mod topic_fixtures;
pub mod user_fixtures;
