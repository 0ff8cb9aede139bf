//! Book endpoints
//!
//! `PUT /books` (id taken from the body) is kept for older clients and goes
//! through the same overwrite path as `PUT /books/{id}`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidBookId};
use crate::http::server::AppState;
use crate::models::{Book, BookFields, BookId};

/// Delete confirmation
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /books - list every book
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = BookRepo::new(state.db.pool()).list().await?;
    Ok(Json(books))
}

/// GET /books/{id} - get a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<Json<Book>, ApiError> {
    let book = BookRepo::new(state.db.pool()).get(id).await?;
    Ok(Json(book))
}

/// POST /books - create a book; any client-supplied id is ignored
async fn create_book(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<BookFields>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = BookRepo::new(state.db.pool()).create(&fields).await?;
    tracing::debug!(id = book.id, "book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id} - overwrite a book, the path id wins over any body id
async fn update_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
    JsonBody(fields): JsonBody<BookFields>,
) -> Result<Json<Book>, ApiError> {
    overwrite(&state, id, fields).await.map(Json)
}

/// PUT /books - overwrite the book named by the body's id
async fn update_book_from_body(
    State(state): State<Arc<AppState>>,
    JsonBody(book): JsonBody<Book>,
) -> Result<Json<Book>, ApiError> {
    let (id, fields) = book.into_parts();
    overwrite(&state, id, fields).await.map(Json)
}

/// Shared by both update routes. Succeeds with the attempted record even when
/// no row has `id`.
async fn overwrite(state: &AppState, id: BookId, fields: BookFields) -> Result<Book, ApiError> {
    let matched = BookRepo::new(state.db.pool()).update(id, &fields).await?;
    if !matched {
        tracing::debug!(%id, "update matched no book");
    }

    Ok(fields.with_id(id))
}

/// DELETE /books/{id} - delete a book, succeeds whether or not it existed
async fn delete_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<Json<MessageResponse>, ApiError> {
    let matched = BookRepo::new(state.db.pool()).delete(id).await?;
    if !matched {
        tracing::debug!(%id, "delete matched no book");
    }

    Ok(Json(MessageResponse {
        message: "Book was deleted successfully.",
    }))
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).put(update_book_from_body),
        )
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
