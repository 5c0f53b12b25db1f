use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

use crate::config::StorageConfig;
use crate::storage::repositories::ExpenseRepository;
use crate::storage::traits::Connection;

/// DbConnection is the query-execution handle shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection with the default pool size
    pub async fn new(url: &str) -> Result<Self> {
        Self::from_config(&StorageConfig {
            database_url: url.to_string(),
            ..StorageConfig::default()
        })
        .await
    }

    /// Create a new database connection from storage configuration
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        let url = config.database_url.as_str();

        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await? {
            info!("Creating database at {}", url);
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(url)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_expenses_user_id
            ON expenses(user_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type ExpenseRepository = ExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }
}
