use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

use super::sea_orm_entity::topics::{ActiveModel as TopicActiveModel, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            content: Set(data.content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into_view())
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicView, TopicRepositoryError> {
        let existing = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(data.title);
        active.content = Set(data.content);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.into_view())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
