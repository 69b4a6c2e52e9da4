//! Comment repository.

use std::sync::Arc;

use crate::entities::{Comment, comment};
use crate::error::map_db_err;
use postboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Comment repository for database operations.
#[derive(Clone)]
pub struct CommentRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<comment::Model>> {
        Comment::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a comment by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<comment::Model> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::CommentNotFound(id))
    }

    /// Create a new comment.
    ///
    /// `created_at` defaults to now when left unset.
    pub async fn create(&self, model: comment::ActiveModel) -> AppResult<comment::Model> {
        let comment = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        tracing::debug!(
            comment_id = comment.id,
            post_id = comment.post_id,
            author_id = comment.author_id,
            "Created comment"
        );
        Ok(comment)
    }

    /// Delete a comment.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Comment::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    /// Comments on a post, oldest first.
    pub async fn find_by_post(&self, post_id: i32) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Comments written by a user.
    pub async fn find_by_author(&self, author_id: i32) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::AuthorId.eq(author_id))
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    fn create_test_comment(id: i32, author_id: i32, post_id: i32) -> comment::Model {
        comment::Model {
            id,
            comment_text: format!("comment {id}"),
            author_id,
            post_id,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_comment() {
        let stored = create_test_comment(1, 2, 3);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .into_connection(),
        );

        let repo = CommentRepository::new(db);
        let active = comment::ActiveModel {
            comment_text: Set("comment 1".to_string()),
            author_id: Set(2),
            post_id: Set(3),
            ..Default::default()
        };

        let created = repo.create(active).await.unwrap();
        assert_eq!(created.author_id, 2);
        assert_eq!(created.post_id, 3);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_returns_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<comment::Model>::new()])
                .into_connection(),
        );

        let repo = CommentRepository::new(db);
        let result = repo.get_by_id(12).await;

        assert!(matches!(result, Err(AppError::CommentNotFound(12))));
    }

    #[tokio::test]
    async fn test_find_by_post() {
        let comments = vec![create_test_comment(1, 2, 3), create_test_comment(2, 4, 3)];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([comments])
                .into_connection(),
        );

        let repo = CommentRepository::new(db);
        let result = repo.find_by_post(3).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.post_id == 3));
    }

    #[tokio::test]
    async fn test_find_by_author() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_comment(5, 9, 1)]])
                .into_connection(),
        );

        let repo = CommentRepository::new(db);
        let result = repo.find_by_author(9).await.unwrap();

        assert_eq!(result[0].comment_text, "comment 5");
    }
}
