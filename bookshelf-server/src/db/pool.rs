//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use super::DbError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a file-backed SQLite connection pool.
///
/// The file and its parent directory are created if missing.
///
/// # Errors
///
/// Returns an error if `max_connections` is zero, the directory cannot be
/// created, or the first connection cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("books.db"), DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<SqlitePool, DbError> {
    // sqlx panics on an empty pool
    if max_connections == 0 {
        return Err(DbError::Config("max_connections must be at least 1"));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT) // concurrent writers wait instead of SQLITE_BUSY
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create a pool over a private in-memory database.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}
