//! Book repository
//!
//! - list: unconditional select, storage order
//! - create: INSERT ... RETURNING (server-assigned id)
//! - update/delete: report whether a row matched, never fail on a miss

use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::{Book, BookFields, BookId};

const SELECT_BOOKS: &str = "SELECT id, booktitle, isbn, bookauthor, releasedate FROM books";

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All books in whatever order the engine returns them.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(SELECT_BOOKS)
            .fetch_all(self.pool)
            .await?;
        Ok(books)
    }

    /// Get a single book by id.
    pub async fn get(&self, id: BookId) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, booktitle, isbn, bookauthor, releasedate FROM books WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "book",
            id: id.to_string(),
        })
    }

    /// Insert a book and return it with its assigned id.
    pub async fn create(&self, fields: &BookFields) -> Result<Book, DbError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (booktitle, isbn, bookauthor, releasedate)
            VALUES (?, ?, ?, ?)
            RETURNING id, booktitle, isbn, bookauthor, releasedate
            "#,
        )
        .bind(&fields.title)
        .bind(fields.isbn)
        .bind(&fields.author)
        .bind(fields.release_date)
        .fetch_one(self.pool)
        .await?;

        Ok(book)
    }

    /// Overwrite every data column of `id`.
    ///
    /// Returns `false` when no row has that id; nothing is inserted.
    pub async fn update(&self, id: BookId, fields: &BookFields) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET booktitle = ?, isbn = ?, bookauthor = ?, releasedate = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.title)
        .bind(fields.isbn)
        .bind(&fields.author)
        .bind(fields.release_date)
        .bind(id.get())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete `id`. Returns `false` when nothing matched.
    pub async fn delete(&self, id: BookId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.get())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::db::{Database, DatabaseConfig};

    fn fields(title: &str) -> BookFields {
        BookFields {
            title: title.into(),
            isbn: 9780441013593,
            author: "Herbert".into(),
            release_date: 1965,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let first = repo.create(&fields("Dune")).await.unwrap();
        let second = repo.create(&fields("Dune Messiah")).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.title, "Dune");
    }

    #[tokio::test]
    async fn get_returns_created_book() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let created = repo.create(&fields("Dune")).await.unwrap();
        let fetched = repo.get(created.id()).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let db = Database::in_memory().await.unwrap();
        let err = BookRepo::new(db.pool())
            .get(BookId::new(404))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "book", .. }));
    }

    #[tokio::test]
    async fn list_empty_table() {
        let db = Database::in_memory().await.unwrap();
        let books = BookRepo::new(db.pool()).list().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn list_excludes_deleted() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let keep = repo.create(&fields("Dune")).await.unwrap();
        let gone = repo.create(&fields("Children of Dune")).await.unwrap();
        assert!(repo.delete(gone.id()).await.unwrap());

        let books = repo.list().await.unwrap();
        assert_eq!(books, vec![keep]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let created = repo.create(&fields("Dune")).await.unwrap();
        let changed = BookFields {
            title: "Dune Messiah".into(),
            isbn: 9780593098233,
            author: "Frank Herbert".into(),
            release_date: 1969,
        };

        assert!(repo.update(created.id(), &changed).await.unwrap());
        let fetched = repo.get(created.id()).await.unwrap();
        assert_eq!(fetched, changed.with_id(created.id()));
    }

    #[tokio::test]
    async fn update_missing_matches_nothing() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let matched = repo.update(BookId::new(12), &fields("Dune")).await.unwrap();

        assert!(!matched);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_matches_nothing() {
        let db = Database::in_memory().await.unwrap();
        let matched = BookRepo::new(db.pool())
            .delete(BookId::new(1))
            .await
            .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let first = repo.create(&fields("Dune")).await.unwrap();
        repo.delete(first.id()).await.unwrap();
        let second = repo.create(&fields("Dune")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn text_is_bound_not_interpolated() {
        let db = Database::in_memory().await.unwrap();
        let repo = BookRepo::new(db.pool());

        let title = "x'); DROP TABLE books; --";
        let created = repo.create(&fields(title)).await.unwrap();

        assert_eq!(repo.get(created.id()).await.unwrap().title, title);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(&DatabaseConfig {
            path: dir.path().join("books.db"),
            ..DatabaseConfig::default()
        })
        .await
        .unwrap();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move {
                    BookRepo::new(db.pool())
                        .create(&fields(&format!("Volume {i}")))
                        .await
                        .expect("concurrent create failed")
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let id = handle.await.expect("task panicked");
            assert!(id > 0);
            assert!(ids.insert(id), "duplicate id {id}");
        }
        assert_eq!(BookRepo::new(db.pool()).list().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn reconnect_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("books.db"),
            ..DatabaseConfig::default()
        };

        let db = Database::connect(&config).await.unwrap();
        let created = BookRepo::new(db.pool()).create(&fields("Dune")).await.unwrap();
        db.close().await;

        let db = Database::connect(&config).await.unwrap();
        let fetched = BookRepo::new(db.pool()).get(created.id()).await.unwrap();
        assert_eq!(fetched, created);
    }
}
