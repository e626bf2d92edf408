// ABOUTME: SQLite-backed session store for athletes and training sessions
// ABOUTME: Connection pool setup, schema migration and row decoding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! # Database Management
//!
//! [`Database`] owns the `sqlx` pool. CRUD lives in `athletes` and `sessions`;
//! `store` adapts it to the analytics engine's [`SessionStore`] interface.
//!
//! [`SessionStore`]: trainlog_core::store::SessionStore

mod athletes;
mod sessions;
mod store;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error as SqlxError, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};
use trainlog_core::errors::database::DatabaseError;
use trainlog_core::errors::{AppError, AppResult};

/// Pool size for file-backed databases
const FILE_POOL_SIZE: u32 = 5;

/// How long a request waits for a pooled connection before the store counts as unavailable
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Session store backed by `SQLite`
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect, creating the database file if needed, and run migrations
    ///
    /// `sqlite::memory:` gets a single long-lived connection so every query sees
    /// the same in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid`-class errors for an unparseable URL, `StoreUnavailable`
    /// when the file cannot be opened, and `DatabaseError` when migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL '{database_url}': {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(FILE_POOL_SIZE)
        };

        let pool = pool_options
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(db_error("Failed to open database"))?;

        let db = Self { pool };
        db.migrate().await?;
        info!("Database ready at {database_url}");
        Ok(db)
    }

    /// Close every connection; later queries fail as `StoreUnavailable`
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_athletes().await?;
        self.migrate_sessions().await?;
        debug!("Database migrations applied");
        Ok(())
    }

    async fn migrate_athletes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS athletes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER,
                sport TEXT,
                email TEXT,
                phone TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error("athletes"))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_athletes_created_at ON athletes(created_at)")
            .execute(&self.pool)
            .await
            .map_err(migration_error("idx_athletes_created_at"))?;

        Ok(())
    }

    async fn migrate_sessions(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                athlete_id INTEGER NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                activity_type TEXT NOT NULL,
                duration INTEGER,
                repetitions INTEGER,
                score REAL,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error("training_sessions"))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_sessions_athlete_date ON training_sessions(athlete_id, date)",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error("idx_sessions_athlete_date"))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_sessions_date ON training_sessions(date)")
            .execute(&self.pool)
            .await
            .map_err(migration_error("idx_sessions_date"))?;

        Ok(())
    }
}

/// Map a `sqlx` failure to an `AppError`, keeping `context` in the message
fn db_error(context: &'static str) -> impl FnOnce(SqlxError) -> AppError {
    move |e| DatabaseError::from_sqlx(&e, context).into()
}

fn migration_error(statement: &'static str) -> impl FnOnce(SqlxError) -> AppError {
    move |e| {
        DatabaseError::MigrationError {
            context: format!("{statement}: {e}"),
        }
        .into()
    }
}

/// Narrow a stored integer to `u32`
fn to_u32(field: &'static str, value: Option<i64>) -> AppResult<Option<u32>> {
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                AppError::from(DatabaseError::InvalidData {
                    field,
                    reason: format!("{v} is not a valid non-negative 32-bit value"),
                })
            })
        })
        .transpose()
}

/// Widen a `COUNT(*)` result
fn to_count(field: &'static str, value: i64) -> AppResult<u64> {
    u64::try_from(value).map_err(|_| {
        DatabaseError::InvalidData {
            field,
            reason: format!("negative count {value}"),
        }
        .into()
    })
}
