//! Media repository.

use std::sync::Arc;

use crate::entities::{Media, media};
use crate::error::map_db_err;
use postboard_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Media repository for database operations.
#[derive(Clone)]
pub struct MediaRepository {
    db: Arc<DatabaseConnection>,
}

impl MediaRepository {
    /// Create a new media repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an attachment by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<media::Model>> {
        Media::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Attach media to a post.
    pub async fn create(&self, model: media::ActiveModel) -> AppResult<media::Model> {
        let media = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        tracing::debug!(
            media_id = media.id,
            post_id = media.post_id,
            media_type = media.media_type.as_str(),
            "Created media"
        );
        Ok(media)
    }

    /// Delete an attachment.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Media::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    /// Attachments of a post.
    pub async fn find_by_post(&self, post_id: i32) -> AppResult<Vec<media::Model>> {
        Media::find()
            .filter(media::Column::PostId.eq(post_id))
            .order_by_asc(media::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
