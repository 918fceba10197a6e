use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::PathBuf;
use tokio::fs;

pub type OrmConn = DatabaseConnection;

pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    Database::connect(database_url)
        .await
        .context("failed to connect to the database")
}

/// Apply every `.sql` file under `migrations/` in filename order.
///
/// The DDL is written with `IF NOT EXISTS` guards, so re-running against
/// an up-to-date database is a no-op.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir("migrations").await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in &files {
        let sql = fs::read_to_string(file)
            .await
            .with_context(|| format!("failed to read migration {}", file.display()))?;

        // The postgres driver prepares one command at a time, so each
        // statement in the file runs on its own.
        for stmt in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await
                .with_context(|| format!("migration {} failed", file.display()))?;
        }

        tracing::debug!(file = %file.display(), "migration applied");
    }

    Ok(())
}
