use std::io::Write;
use std::sync::Arc;

use expense_tracker_backend::{DbConnection, ExpenseService, StorageConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the JSON listing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = StorageConfig::from_env()?;
    info!("Opening expense database at {}", config.database_url);
    let db = Arc::new(DbConnection::from_config(&config).await?);

    let service = ExpenseService::new(db.clone());
    let expenses = service.list_expenses().await?;

    {
        let mut out = std::io::stdout().lock();
        for expense in &expenses {
            serde_json::to_writer(&mut out, expense)?;
            writeln!(out)?;
        }
    }

    db.pool().close().await;
    Ok(())
}
