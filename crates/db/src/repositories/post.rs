//! Post repository.

use std::sync::Arc;

use crate::entities::{Comment, Media, Post, User, comment, media, post, user};
use crate::error::map_db_err;
use postboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

/// Post repository for database operations.
#[derive(Clone)]
pub struct PostRepository {
    db: Arc<DatabaseConnection>,
}

impl PostRepository {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<post::Model>> {
        Post::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a post by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<post::Model> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::PostNotFound(id))
    }

    /// Create a new post.
    ///
    /// `created_at` defaults to now when left unset.
    pub async fn create(&self, model: post::ActiveModel) -> AppResult<post::Model> {
        let post = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        tracing::debug!(post_id = post.id, user_id = post.user_id, "Created post");
        Ok(post)
    }

    /// Update a post.
    pub async fn update(&self, model: post::ActiveModel) -> AppResult<post::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a post together with its media and comments.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Post::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }

    /// Posts authored by a user.
    pub async fn find_by_author(&self, user_id: i32) -> AppResult<Vec<post::Model>> {
        Post::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Resolve the author of a post.
    pub async fn find_author(&self, post: &post::Model) -> AppResult<Option<user::Model>> {
        post.find_related(User)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Attachments of a post.
    pub async fn find_media(&self, post_id: i32) -> AppResult<Vec<media::Model>> {
        Media::find()
            .filter(media::Column::PostId.eq(post_id))
            .order_by_asc(media::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Comments on a post, oldest first.
    pub async fn find_comments(&self, post_id: i32) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
