use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

pub type Db = PgPool;

/// Open a pool and wait for the first connection.
pub async fn connect(database_url: &str, max_connections: u32) -> sqlx::Result<Db> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Some(Duration::from_secs(600))) // 10 minutes
        .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
        .connect(database_url)
        .await
}

/// Build a pool that only connects on first use.
pub fn connect_lazy(database_url: &str) -> sqlx::Result<Db> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_lazy(database_url)
}

pub async fn run_migrations(db: &Db) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(db).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
