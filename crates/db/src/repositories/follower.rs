//! Follower repository.

use std::sync::Arc;

use crate::entities::{Follower, follower};
use crate::error::map_db_err;
use postboard_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// Follower repository for database operations.
#[derive(Clone)]
pub struct FollowerRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowerRepository {
    /// Create a new follower repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find the edge `user_from_id -> user_to_id`.
    pub async fn find_by_pair(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> AppResult<Option<follower::Model>> {
        Follower::find_by_id((user_from_id, user_to_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Check if a user is following another user.
    pub async fn is_following(&self, user_from_id: i32, user_to_id: i32) -> AppResult<bool> {
        Ok(self.find_by_pair(user_from_id, user_to_id).await?.is_some())
    }

    /// Create a follow edge.
    ///
    /// An existing edge in the same direction is rejected as a conflict.
    pub async fn create(&self, user_from_id: i32, user_to_id: i32) -> AppResult<follower::Model> {
        let edge = follower::ActiveModel {
            user_from_id: Set(user_from_id),
            user_to_id: Set(user_to_id),
        };

        let edge = edge.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        tracing::debug!(user_from_id, user_to_id, "Created follow edge");
        Ok(edge)
    }

    /// Delete a follow edge. Returns whether an edge existed.
    pub async fn delete_by_pair(&self, user_from_id: i32, user_to_id: i32) -> AppResult<bool> {
        let result = Follower::delete_by_id((user_from_id, user_to_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    /// Edges sent by a user (whom the user follows).
    pub async fn find_sent(&self, user_id: i32) -> AppResult<Vec<follower::Model>> {
        Follower::find()
            .filter(follower::Column::UserFromId.eq(user_id))
            .order_by_asc(follower::Column::UserToId)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Edges received by a user (who follows the user).
    pub async fn find_received(&self, user_id: i32) -> AppResult<Vec<follower::Model>> {
        Follower::find()
            .filter(follower::Column::UserToId.eq(user_id))
            .order_by_asc(follower::Column::UserFromId)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Count followers of a user.
    pub async fn count_followers(&self, user_id: i32) -> AppResult<u64> {
        Follower::find()
            .filter(follower::Column::UserToId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Count users a user follows.
    pub async fn count_followees(&self, user_id: i32) -> AppResult<u64> {
        Follower::find()
            .filter(follower::Column::UserFromId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    const fn edge(user_from_id: i32, user_to_id: i32) -> follower::Model {
        follower::Model {
            user_from_id,
            user_to_id,
        }
    }

    #[tokio::test]
    async fn test_find_by_pair_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[edge(1, 2)]])
                .into_connection(),
        );

        let repo = FollowerRepository::new(db);
        let found = repo.find_by_pair(1, 2).await.unwrap().unwrap();

        assert_eq!(found.user_from_id, 1);
        assert_eq!(found.user_to_id, 2);
    }

    #[tokio::test]
    async fn test_is_following_false() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follower::Model>::new()])
                .into_connection(),
        );

        let repo = FollowerRepository::new(db);
        assert!(!repo.is_following(2, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[edge(1, 2)]])
                .into_connection(),
        );

        let repo = FollowerRepository::new(db);
        let created = repo.create(1, 2).await.unwrap();

        assert_eq!(created, edge(1, 2));
    }

    #[tokio::test]
    async fn test_delete_by_pair_reports_missing_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 0,
                    },
                ])
                .into_connection(),
        );

        let repo = FollowerRepository::new(db);
        assert!(repo.delete_by_pair(1, 2).await.unwrap());
        assert!(!repo.delete_by_pair(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_sent() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[edge(1, 2), edge(1, 3)]])
                .into_connection(),
        );

        let repo = FollowerRepository::new(db);
        let sent = repo.find_sent(1).await.unwrap();

        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|e| e.user_from_id == 1));
    }
}
