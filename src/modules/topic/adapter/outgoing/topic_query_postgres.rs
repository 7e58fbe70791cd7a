use async_trait::async_trait;
use sea_orm::{
    AccessMode, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::TopicView;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::topics::{Column, Entity, Model};
use super::sea_orm_entity::user_favorite_topics;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Count and page must see the same rows, so both run in one
    /// read-only repeatable-read transaction.
    async fn snapshot(&self) -> Result<DatabaseTransaction, TopicQueryError> {
        self.db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(map_db_err)
    }

    async fn page_in(
        txn: &DatabaseTransaction,
        select: Select<Entity>,
        page: PageRequest,
    ) -> Result<Vec<TopicView>, TopicQueryError> {
        let models: Vec<Model> = newest_first(select)
            .offset(page.offset())
            .limit(page.limit())
            .all(txn)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Model::into_view).collect())
    }

    async fn counted_page(
        &self,
        select: Select<Entity>,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        let txn = self.snapshot().await?;

        let total = select.clone().count(&txn).await.map_err(map_db_err)?;
        let items = Self::page_in(&txn, select, page).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(PageResult::new(items, page, total))
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_by_id(&self, topic_id: Uuid) -> Result<TopicView, TopicQueryError> {
        Entity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Model::into_view)
            .ok_or(TopicQueryError::NotFound)
    }

    async fn list_all(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError> {
        self.counted_page(Entity::find(), page).await
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        let owner_uuid: Uuid = owner.into();

        self.counted_page(Entity::find().filter(Column::UserId.eq(owner_uuid)), page)
            .await
    }

    async fn list_favorites(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        let user_uuid: Uuid = user.into();
        let txn = self.snapshot().await?;

        // 1️⃣ Favorite rows of the user: their count is the total
        let total = user_favorite_topics::Entity::find()
            .filter(user_favorite_topics::Column::UserId.eq(user_uuid))
            .count(&txn)
            .await
            .map_err(map_db_err)?;

        // 2️⃣ Page over the favorited topics through the join
        let items = if total == 0 {
            Vec::new()
        } else {
            let favorited = Entity::find()
                .inner_join(user_favorite_topics::Entity)
                .filter(user_favorite_topics::Column::UserId.eq(user_uuid));

            Self::page_in(&txn, favorited, page).await?
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(PageResult::new(items, page, total))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Newest first; id breaks ties so pages never overlap.
fn newest_first(select: Select<Entity>) -> Select<Entity> {
    select
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

fn map_db_err(e: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
