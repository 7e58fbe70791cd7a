use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 10_000;

const BLANK: &str = "This field may not be blank.";

//
// ──────────────────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicView {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Write command (create + full update share it)
// ──────────────────────────────────────────────────────────
//

/// Field name → messages. Every failing field is reported, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("Topic validation failed")]
pub struct TopicValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl TopicValidationErrors {
    fn push(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }
}

/// Title and content as received, before trimming and checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDraft {
    pub title: String,
    pub content: String,
}

impl TopicDraft {
    pub fn validate(self) -> Result<TopicCommand, TopicValidationErrors> {
        TopicCommand::new(self.title, self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCommand {
    title: String,
    content: String,
}

impl TopicCommand {
    pub fn new(title: String, content: String) -> Result<Self, TopicValidationErrors> {
        let title = title.trim();
        let content = content.trim();
        let mut errors = TopicValidationErrors::default();

        check_field(&mut errors, "title", title, TITLE_MAX_CHARS);
        check_field(&mut errors, "content", content, CONTENT_MAX_CHARS);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

fn check_field(errors: &mut TopicValidationErrors, name: &'static str, value: &str, max: usize) {
    if value.is_empty() {
        errors.push(name, BLANK.to_string());
    } else if value.chars().count() > max {
        errors.push(
            name,
            format!("Ensure this field has no more than {max} characters."),
        );
    }
}
