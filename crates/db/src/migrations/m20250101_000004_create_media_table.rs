//! Create media table migration.

use sea_orm_migration::prelude::*;

/// Stored values accepted for `media_type`.
const MEDIA_TYPES: [&str; 4] = ["image", "video", "audio", "other"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Media::MediaType)
                            .string_len(16)
                            .not_null()
                            .check(Expr::col(Media::MediaType).is_in(MEDIA_TYPES)),
                    )
                    .col(ColumnDef::new(Media::Url).text().not_null())
                    .col(ColumnDef::new(Media::PostId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_post")
                            .from(Media::Table, Media::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: post_id (for listing a post's attachments)
        manager
            .create_index(
                Index::create()
                    .name("idx_media_post_id")
                    .table(Media::Table)
                    .col(Media::PostId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Media {
    #[iden = "Media"]
    Table,
    Id,
    MediaType,
    Url,
    PostId,
}

#[derive(Iden)]
enum Post {
    #[iden = "POST"]
    Table,
    Id,
}
