//! In-process book store for tests and embedding
//!
//! Same observable behavior as the Postgres store: ids come from a
//! counter that only moves forward, listing is in id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::repos::DbError;
use super::store::BookStore;
use crate::models::Book;

#[derive(Default)]
pub struct MemoryBookStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    books: BTreeMap<i32, Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list_all(&self) -> Result<Vec<Book>, DbError> {
        let inner = self.inner.lock().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Book, DbError> {
        let inner = self.inner.lock().await;
        inner
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::book_not_found(id))
    }

    async fn create(&self, title: &str, author: &str) -> Result<Book, DbError> {
        let mut inner = self.inner.lock().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or(DbError::IdsExhausted { resource: "Book" })?;
        inner.last_id = id;
        let book = Book {
            id,
            title: title.to_owned(),
            author: author.to_owned(),
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, title: &str, author: &str) -> Result<Book, DbError> {
        let mut inner = self.inner.lock().await;
        let book = inner
            .books
            .get_mut(&id)
            .ok_or_else(|| DbError::book_not_found(id))?;
        book.title = title.to_owned();
        book.author = author.to_owned();
        Ok(book.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut inner = self.inner.lock().await;
        inner
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::book_not_found(id))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
