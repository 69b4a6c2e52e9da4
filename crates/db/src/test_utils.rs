//! Test utilities for database operations.
//!
//! Provides a migrated scratch database. By default this is an in-memory
//! SQLite database; set `TEST_DATABASE_URL` to run against another engine.

use std::sync::Arc;

use crate::entities::{Comment, Follower, Media, Post, User};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Default test database URL.
pub const DEFAULT_TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Test database configuration.
#[derive(Debug, Clone)]
pub struct TestDbConfig {
    /// Database URL.
    pub url: String,
}

impl Default for TestDbConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string()),
        }
    }
}

impl TestDbConfig {
    /// Whether the URL points at an in-memory SQLite database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }
}

/// A migrated test database.
pub struct TestDatabase {
    /// Database connection.
    pub conn: Arc<DatabaseConnection>,
    /// Database configuration.
    pub config: TestDbConfig,
}

impl TestDatabase {
    /// Connect to the default test database and create the schema.
    pub async fn new() -> Result<Self, DbErr> {
        Self::with_config(TestDbConfig::default()).await
    }

    /// Connect with a custom configuration and create the schema.
    pub async fn with_config(config: TestDbConfig) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(&config.url);
        // Every pooled connection to `:memory:` would be a separate database
        if config.is_in_memory() {
            opt.max_connections(1).min_connections(1);
        }
        opt.sqlx_logging(false);

        let conn = Database::connect(opt).await?;
        crate::migrations::Migrator::up(&conn, None).await?;

        info!(url = %config.url, "Connected to migrated test database");

        Ok(Self {
            conn: Arc::new(conn),
            config,
        })
    }

    /// Get the database connection.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        self.conn.as_ref()
    }

    /// Get a shared handle for repositories.
    #[must_use]
    pub fn shared(&self) -> Arc<DatabaseConnection> {
        self.conn.clone()
    }

    /// Delete all rows, children before parents.
    pub async fn cleanup(&self) -> Result<(), DbErr> {
        let db = self.connection();
        Comment::delete_many().exec(db).await?;
        Media::delete_many().exec(db).await?;
        Follower::delete_many().exec(db).await?;
        Post::delete_many().exec(db).await?;
        User::delete_many().exec(db).await?;

        info!("Cleaned up test database");
        Ok(())
    }
}
