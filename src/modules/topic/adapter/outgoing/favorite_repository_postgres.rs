use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};

#[derive(Clone)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Inserts only when the topic exists; an existing row is left alone.
    fn guarded_insert_stmt(user: Uuid, topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO user_favorite_topics (user_id, topic_id)
            SELECT $1, t.id
            FROM topics t
            WHERE t.id = $2
            ON CONFLICT (user_id, topic_id) DO NOTHING
            "#,
            vec![user.into(), topic_id.into()],
        )
    }

    fn delete_stmt(user: Uuid, topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM user_favorite_topics
            WHERE user_id = $1
              AND topic_id = $2
            "#,
            vec![user.into(), topic_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> FavoriteRepositoryError {
        FavoriteRepositoryError::DatabaseError(e.to_string())
    }

    /// Explains a write that touched no rows: a missing topic is an error,
    /// otherwise the favorite was already in the requested state.
    async fn ensure_topic_ok<C>(conn: &C, topic_id: Uuid) -> Result<(), FavoriteRepositoryError>
    where
        C: ConnectionTrait,
    {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM topics t
                WHERE t.id = $1
            ) AS topic_ok
            "#,
            vec![topic_id.into()],
        );

        let row = conn
            .query_one(stmt)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                FavoriteRepositoryError::DatabaseError(
                    "Topic existence check returned no rows".to_string(),
                )
            })?;

        let topic_ok: bool = row.try_get("", "topic_ok").map_err(Self::map_db_err)?;
        if !topic_ok {
            return Err(FavoriteRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn add_favorite(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let user_uuid: Uuid = user.into();

        let result = self
            .db
            .execute(Self::guarded_insert_stmt(user_uuid, topic_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        Self::ensure_topic_ok(&*self.db, topic_id).await
    }

    async fn remove_favorite(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let user_uuid: Uuid = user.into();

        let result = self
            .db
            .execute(Self::delete_stmt(user_uuid, topic_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        Self::ensure_topic_ok(&*self.db, topic_id).await
    }
}
