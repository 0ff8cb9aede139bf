//! Repository implementations for database access
//!
//! Repositories borrow the pool and issue one parameterized statement per call.

pub mod books;

pub use books::BookRepo;
