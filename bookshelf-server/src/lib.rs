//! bookshelf-server: HTTP record store for books
//!
//! A single SQLite table exposed as `/books` CRUD routes.
//!
//! ```ignore
//! let db = Database::connect(&DatabaseConfig::default()).await?;
//! run_server(db, ServerConfig::default()).await?;
//! ```

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DatabaseConfig, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
