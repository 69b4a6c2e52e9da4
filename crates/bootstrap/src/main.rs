//! Postboard schema bootstrap.
//!
//! Loads configuration, connects to the configured database and creates the
//! schema once. Safe to run repeatedly: applied migrations are skipped.

use anyhow::Context;
use postboard_common::{Config, LoggingConfig};
use postboard_db::entities::{Comment, Follower, Media, Post, User};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn count_rows<E>(db: &DatabaseConnection, entity: E) -> anyhow::Result<()>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let rows = E::find()
        .count(db)
        .await
        .with_context(|| format!("counting rows of {}", entity.table_name()))?;
    info!(table = entity.table_name(), rows, "Table ready");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_tracing(&config.logging);

    info!("Starting postboard schema bootstrap...");

    let db = postboard_db::init(&config).await?;
    info!("Connected to database");

    info!("Running database migrations...");
    postboard_db::migrate(&db).await?;
    info!("Migrations completed");

    count_rows(&db, User).await?;
    count_rows(&db, Post).await?;
    count_rows(&db, Follower).await?;
    count_rows(&db, Media).await?;
    count_rows(&db, Comment).await?;

    db.close().await.context("closing database connection")?;
    Ok(())
}
