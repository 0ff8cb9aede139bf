//! Schema initialization for the books table

use sqlx::SqlitePool;

use super::DbError;

/// Column layout matches databases created by earlier releases.
const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS books(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        booktitle TEXT,
        isbn INTEGER,
        bookauthor TEXT,
        releasedate INTEGER
    )
"#;

/// Create the books table if it does not exist. Safe to run on every startup.
pub async fn ensure(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::debug!("ensuring books schema");
    sqlx::query(CREATE_BOOKS).execute(pool).await?;
    Ok(())
}
