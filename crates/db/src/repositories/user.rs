//! User repository.

use std::sync::Arc;

use crate::entities::{Comment, Post, User, comment, follower, post, user};
use crate::error::map_db_err;
use postboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        User::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a user by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<user::Model> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Create a new user.
    ///
    /// A duplicate email is rejected by the storage engine as a conflict.
    pub async fn create(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        let user = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        tracing::debug!(user_id = user.id, "Created user");
        Ok(user)
    }

    /// Update a user.
    pub async fn update(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a user.
    ///
    /// Follow edges go with the user; authored posts or comments make the
    /// storage engine reject the deletion.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        User::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        tracing::debug!(user_id = id, "Deleted user");
        Ok(())
    }

    /// Posts authored by a user.
    pub async fn find_posts(&self, user_id: i32) -> AppResult<Vec<post::Model>> {
        Post::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Comments authored by a user.
    pub async fn find_comments(&self, user_id: i32) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::AuthorId.eq(user_id))
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Users that a user follows.
    pub async fn find_followees(&self, user_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .join_rev(JoinType::InnerJoin, follower::Relation::UserTo.def())
            .filter(follower::Column::UserFromId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Users following a user.
    pub async fn find_followers(&self, user_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .join_rev(JoinType::InnerJoin, follower::Relation::UserFrom.def())
            .filter(follower::Column::UserToId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
