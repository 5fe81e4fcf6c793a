//! Book repository
//!
//! Plain parameterised statements against `books`:
//! - list: full table, ascending id (insertion order)
//! - update/delete: NotFound when no row is affected

use sqlx::PgConnection;

use crate::models::Book;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// The id sequence has no values left (Postgres raises this as a
    /// `nextval` error instead).
    #[error("id sequence exhausted for {resource}")]
    IdsExhausted { resource: &'static str },
}

impl DbError {
    pub(crate) fn book_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Book",
            id: id.to_string(),
        }
    }
}

/// Book repository over a single borrowed connection
pub struct BookRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> BookRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All books, ascending id.
    pub async fn list_all(&mut self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(books)
    }

    /// A single book by id.
    pub async fn get(&mut self, id: i32) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::book_not_found(id))
    }

    /// Insert a book; the id comes from the table's sequence.
    pub async fn create(&mut self, title: &str, author: &str) -> Result<Book, DbError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author) VALUES ($1, $2) RETURNING id, title, author",
        )
        .bind(title)
        .bind(author)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(book)
    }

    /// Overwrite title and author in place.
    pub async fn update(&mut self, id: i32, title: &str, author: &str) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $2, author = $3 WHERE id = $1 RETURNING id, title, author",
        )
        .bind(id)
        .bind(title)
        .bind(author)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::book_not_found(id))
    }

    /// Hard delete.
    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::book_not_found(id));
        }
        Ok(())
    }
}

impl BookRepo<'_> {
    /// Cheap read against `books`; fails if the table is missing.
    pub async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1 FROM books LIMIT 1")
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }
}
