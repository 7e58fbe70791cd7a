use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::{
    TopicCommand, TopicDraft, TopicValidationErrors, TopicView,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// Wire shape of a topic; `user` is the owner's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub id: Uuid,
    pub user: Uuid,
    #[schema(example = "Borrow checker tips")]
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TopicView> for TopicResponse {
    fn from(view: TopicView) -> Self {
        Self {
            id: view.id,
            user: view.owner.into(),
            title: view.title,
            content: view.content,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Body of create and update. Absent fields are reported as blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TopicPayload {
    #[serde(default)]
    #[schema(example = "Borrow checker tips")]
    pub title: Option<String>,

    #[serde(default)]
    #[schema(example = "Share what helped you most.")]
    pub content: Option<String>,
}

impl TopicPayload {
    pub fn into_draft(self) -> TopicDraft {
        TopicDraft {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        }
    }

    pub fn into_command(self) -> Result<TopicCommand, TopicValidationErrors> {
        self.into_draft().validate()
    }
}
