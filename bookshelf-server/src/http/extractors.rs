//! Custom Axum extractors
//!
//! Both map axum's own rejections into [`ApiError`] so every failure
//! shares the JSON error shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{BookId, ValidationError};

/// Extract and validate a book id from path
pub struct ValidBookId(pub BookId);

impl<S> FromRequestParts<S> for ValidBookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("book id path rejection: {}", rejection.body_text());
                ApiError::Validation(ValidationError::MissingId)
            })?;

        Ok(Self(BookId::parse(&id)?))
    }
}

/// JSON body whose rejection is a 400 validation error
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo_id(ValidBookId(id): ValidBookId) -> String {
        id.to_string()
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn parses_numeric_segment() {
        let app = Router::new().route("/books/{id}", get(echo_id));
        let (status, body) = call(app, "/books/7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"7");
    }

    #[tokio::test]
    async fn non_numeric_segment_is_invalid_id() {
        let app = Router::new().route("/books/{id}", get(echo_id));
        let (status, body) = call(app, "/books/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "invalid book id: 'abc'");
    }

    #[tokio::test]
    async fn unexpected_path_shape_is_missing_id() {
        let app = Router::new().route("/books/{id}/{other}", get(echo_id));
        let (status, body) = call(app, "/books/1/2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "book id missing from path");
    }
}
