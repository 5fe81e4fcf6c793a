//! Repository implementations for database access
//!
//! A repository borrows one connection for its lifetime; the caller
//! decides where that connection comes from (pool, transaction).

pub mod books;

pub use books::{BookRepo, DbError};
