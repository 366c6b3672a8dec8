//! SQLite-backed persistent store.
//!
//! Split into focused submodules:
//! - `reminders`: reminder insert, delivery marking, rehydration listing
//! - `settings`: key/value settings and the conversation allow-set

mod reminders;
mod settings;

pub use reminders::Reminder;

use remora_core::{config::StoreConfig, error::RemoraError, shellexpand};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Persistent store backed by SQLite.
///
/// All mutations go through one pool; every public method is a single
/// statement, so concurrent callers cannot interleave partial writes.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Create a new store, running migrations on first use.
    ///
    /// A `db_path` of `:memory:` opens an in-memory database (tests).
    pub async fn new(config: &StoreConfig) -> Result<Self, RemoraError> {
        let url = if config.db_path == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            let db_path = shellexpand(&config.db_path);
            if let Some(parent) = std::path::Path::new(&db_path).parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| RemoraError::Store(format!("failed to create data dir: {e}")))?;
            }
            format!("sqlite:{db_path}")
        };

        let opts = SqliteConnectOptions::from_str(&url)
            .map_err(|e| RemoraError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        // In-memory databases vanish when their last connection closes,
        // so tests must keep a single connection alive.
        let max_connections = if config.db_path == ":memory:" { 1 } else { 4 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await
            .map_err(|e| RemoraError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Store initialized at {}", config.db_path);

        Ok(Self { pool })
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), RemoraError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| RemoraError::Store(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] = &[
            ("001_init", include_str!("../../migrations/001_init.sql")),
            (
                "002_authorization",
                include_str!("../../migrations/002_authorization.sql"),
            ),
        ];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        RemoraError::Store(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| RemoraError::Store(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    RemoraError::Store(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}
