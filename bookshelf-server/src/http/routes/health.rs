//! Liveness plus a store round trip
//!
//! `200` when the `books` table answers, `503` otherwise. The response
//! never carries the underlying database error.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, store) = match state.store().ping().await {
        Ok(()) => ("ok", StatusCode::OK, "ok"),
        Err(err) => {
            tracing::warn!("health check: store unavailable: {}", err);
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::db::{BookStore, DbError, MemoryBookStore};
    use crate::models::Book;

    /// Store whose every call fails as if Postgres were down.
    struct UnreachableStore;

    fn down() -> DbError {
        DbError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl BookStore for UnreachableStore {
        async fn list_all(&self) -> Result<Vec<Book>, DbError> {
            Err(down())
        }
        async fn get(&self, _id: i32) -> Result<Book, DbError> {
            Err(down())
        }
        async fn create(&self, _title: &str, _author: &str) -> Result<Book, DbError> {
            Err(down())
        }
        async fn update(&self, _id: i32, _title: &str, _author: &str) -> Result<Book, DbError> {
            Err(down())
        }
        async fn delete(&self, _id: i32) -> Result<(), DbError> {
            Err(down())
        }
        async fn ping(&self) -> Result<(), DbError> {
            Err(down())
        }
    }

    #[tokio::test]
    async fn reachable_store_is_ok() {
        let state = AppState::new(Arc::new(MemoryBookStore::new()));
        let (code, Json(body)) = health(State(state)).await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unreachable_store_is_503() {
        let state = AppState::new(Arc::new(UnreachableStore));
        let (code, Json(body)) = health(State(state)).await;

        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.store, "unavailable");
    }
}
