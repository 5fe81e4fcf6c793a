//! The storage seam used by the HTTP layer

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use super::repos::{BookRepo, DbError};
use crate::models::Book;

/// Book storage operations.
///
/// Every operation commits before returning; there is no unit of work
/// spanning several calls.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in ascending id order.
    async fn list_all(&self) -> Result<Vec<Book>, DbError>;

    /// The book with `id`, or `DbError::NotFound`.
    async fn get(&self, id: i32) -> Result<Book, DbError>;

    /// Store a new book under a freshly assigned id.
    async fn create(&self, title: &str, author: &str) -> Result<Book, DbError>;

    /// Overwrite title and author of an existing book.
    async fn update(&self, id: i32, title: &str, author: &str) -> Result<Book, DbError>;

    /// Remove a book permanently.
    async fn delete(&self, id: i32) -> Result<(), DbError>;

    /// Check that the store is reachable and the `books` table readable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed store.
///
/// Each call checks a connection out of the pool for its own duration.
/// The `PoolConnection` goes back to the pool when dropped, whichever way
/// the call exits.
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn session(&self) -> Result<PoolConnection<Postgres>, DbError> {
        Ok(self.pool.acquire().await?)
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_all(&self) -> Result<Vec<Book>, DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).list_all().await
    }

    async fn get(&self, id: i32) -> Result<Book, DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).get(id).await
    }

    async fn create(&self, title: &str, author: &str) -> Result<Book, DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).create(title, author).await
    }

    async fn update(&self, id: i32, title: &str, author: &str) -> Result<Book, DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).update(id, title, author).await
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).delete(id).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.session().await?;
        BookRepo::new(&mut conn).ping().await
    }
}
