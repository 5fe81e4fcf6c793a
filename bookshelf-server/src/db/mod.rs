//! Database layer - connection pool, schema and book storage
//!
//! # Design Principles
//!
//! - Connection pool, one pooled connection per operation
//! - Every mutation is a single auto-committed statement
//! - Missing rows are detected from affected row counts, not check-then-write

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryBookStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::{BookRepo, DbError};
pub use schema::ensure_schema;
pub use store::{BookStore, PgBookStore};

pub use sqlx::PgPool;
