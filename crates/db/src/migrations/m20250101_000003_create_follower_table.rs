//! Create follower table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follower::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Follower::UserFromId).integer().not_null())
                    .col(ColumnDef::new(Follower::UserToId).integer().not_null())
                    // Composite primary key: one edge per direction
                    .primary_key(
                        Index::create()
                            .name("pk_follower")
                            .col(Follower::UserFromId)
                            .col(Follower::UserToId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follower_user_from")
                            .from(Follower::Table, Follower::UserFromId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follower_user_to")
                            .from(Follower::Table, Follower::UserToId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: user_to_id (for listing followers; user_from_id leads the primary key)
        manager
            .create_index(
                Index::create()
                    .name("idx_follower_user_to_id")
                    .table(Follower::Table)
                    .col(Follower::UserToId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follower::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Follower {
    #[iden = "Follower"]
    Table,
    UserFromId,
    UserToId,
}

#[derive(Iden)]
enum User {
    #[iden = "User"]
    Table,
    Id,
}
