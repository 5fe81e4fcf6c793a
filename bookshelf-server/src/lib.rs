//! bookshelf-server: book records over Postgres with server-rendered pages
//!
//! Two layers:
//! - `db`: the `books` table, a per-connection repository and the
//!   `BookStore` seam the handlers depend on
//! - `http`: five form/page routes plus health, rendered as HTML

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{BookStore, DbError, MemoryBookStore, PgBookStore};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Book, BookForm};
pub use state::AppState;
