use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size override (optional)
/// - MIGRATIONS_PATH: directory of .sql migrations to apply on boot (optional)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or a
/// configured migration run fails.
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS")
        && let Ok(max_connections) = raw.parse()
    {
        config.max_connections = max_connections;
    }

    let pool = create_postgres_pool(&config).await?;

    if let Ok(migrations_path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &migrations_path).await?;
    }

    Ok(pool)
}
