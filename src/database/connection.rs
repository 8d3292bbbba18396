use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());

    // every connection to sqlite::memory: opens its own empty database
    if config.url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(config.max_connections);
    }
    options.sqlx_logging(false);

    let pool = Database::connect(options).await?;
    log::info!(
        "Connected to {:?} database",
        pool.get_database_backend()
    );

    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

/// Round trip used by the health endpoint
pub async fn ping(pool: &DbPool) -> bool {
    pool.ping().await.is_ok()
}
