//! Database layer - storage handle, schema and repositories
//!
//! # Design Principles
//!
//! - One pooled handle (max 10 connections), constructed by the caller and
//!   passed down. No global connection.
//! - Every statement is parameterized.
//! - One statement per operation, no transactions.

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

use std::path::PathBuf;

use sqlx::SqlitePool;

pub use error::DbError;
pub use pool::{create_memory_pool, create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;

/// Storage configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite database file (default: books.db in the working directory)
    pub path: PathBuf,

    /// Upper bound on concurrently open connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("books.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Shared storage handle.
///
/// Cloning is cheap and every clone refers to the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database file and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema statement
    /// fails. The caller decides whether that is fatal.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let pool = create_pool(&config.path, config.max_connections).await?;
        schema::ensure(&pool).await?;

        tracing::info!(
            path = %config.path.display(),
            max_connections = config.max_connections,
            "database ready"
        );
        Ok(Self { pool })
    }

    /// Private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = create_memory_pool().await?;
        schema::ensure(&pool).await?;
        Ok(Self { pool })
    }

    /// Borrow the pool. Callers must not close it.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round trip to the database.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
