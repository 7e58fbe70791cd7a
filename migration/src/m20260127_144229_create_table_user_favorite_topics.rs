use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteTopics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserFavoriteTopics::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserFavoriteTopics::TopicId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserFavoriteTopics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A user favors a topic at most once
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_topics")
                            .col(UserFavoriteTopics::UserId)
                            .col(UserFavoriteTopics::TopicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_topics_user")
                            .from(UserFavoriteTopics::Table, UserFavoriteTopics::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_topics_topic")
                            .from(UserFavoriteTopics::Table, UserFavoriteTopics::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup: who favors a topic
        manager
            .create_index(
                Index::create()
                    .name("idx_user_favorite_topics_topic")
                    .table(UserFavoriteTopics::Table)
                    .col(UserFavoriteTopics::TopicId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteTopics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFavoriteTopics {
    Table,
    UserId,
    TopicId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
