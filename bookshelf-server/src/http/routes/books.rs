//! Book pages and form endpoints
//!
//! Mutations answer with `303 See Other` back to `/` so the browser
//! re-fetches the list with a GET.

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{BookId, ValidBookForm};
use crate::http::render;
use crate::state::AppState;

/// GET / - list all books
async fn list_books(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let books = state.store().list_all().await?;
    Ok(Html(render::index_page(&books)))
}

/// POST /create - add a book
async fn create_book(
    State(state): State<AppState>,
    ValidBookForm(form): ValidBookForm,
) -> Result<Redirect, ApiError> {
    let book = state.store().create(&form.title, &form.author).await?;
    tracing::info!(book_id = book.id, "book created");
    Ok(Redirect::to("/"))
}

/// GET /edit/{book_id} - edit form for one book
async fn edit_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Html<String>, ApiError> {
    let book = state.store().get(id).await?;
    Ok(Html(render::edit_page(&book)))
}

/// POST /update/{book_id} - overwrite title and author
async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    ValidBookForm(form): ValidBookForm,
) -> Result<Redirect, ApiError> {
    state.store().update(id, &form.title, &form.author).await?;
    tracing::info!(book_id = id, "book updated");
    Ok(Redirect::to("/"))
}

/// GET /delete/{book_id} - remove a book
async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Redirect, ApiError> {
    state.store().delete(id).await?;
    tracing::info!(book_id = id, "book deleted");
    Ok(Redirect::to("/"))
}

/// Book routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books))
        .route("/create", post(create_book))
        .route("/edit/{book_id}", get(edit_book))
        .route("/update/{book_id}", post(update_book))
        .route("/delete/{book_id}", get(delete_book))
}
