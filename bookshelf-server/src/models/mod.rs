//! Domain models
//!
//! Request payloads are checked when they are extracted.
//! Invalid input returns ValidationError, not panic.

pub mod book;
pub mod validation;

pub use book::{Book, BookFields, BookId};
pub use validation::ValidationError;
