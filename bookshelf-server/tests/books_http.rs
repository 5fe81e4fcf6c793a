use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use bookshelf_server::{build_router, AppState, BookStore, MemoryBookStore};
use tower::ServiceExt;

fn app() -> (Router, Arc<MemoryBookStore>) {
    let store = Arc::new(MemoryBookStore::new());
    (build_router(AppState::new(store.clone())), store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn empty_list_renders_page() {
    let (app, _) = app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains("Book List"));
    assert!(html.contains("No books yet."));
}

#[tokio::test]
async fn created_book_appears_in_list() {
    let (app, _) = app();

    let response = app
        .clone()
        .oneshot(post_form("/create", "title=Dune&author=Herbert"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<td>Dune</td><td>Herbert</td>"));
    assert!(html.contains("href=\"/edit/1\""));
}

#[tokio::test]
async fn duplicate_books_get_distinct_ids() {
    let (app, store) = app();

    for _ in 0..2 {
        app.clone()
            .oneshot(post_form("/create", "title=Dune&author=Herbert"))
            .await
            .unwrap();
    }

    let books = store.list_all().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_ne!(books[0].id, books[1].id);
}

#[tokio::test]
async fn update_then_edit_shows_new_values() {
    let (app, store) = app();
    let book = store.create("Dune", "Herbert").await.unwrap();
    let uri = format!("/update/{}", book.id);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_form(&uri, "title=Emma&author=Austen"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = app
        .oneshot(get(&format!("/edit/{}", book.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("value=\"Emma\""));
    assert!(html.contains("value=\"Austen\""));

    let loaded = store.get(book.id).await.unwrap();
    assert_eq!(loaded.id, book.id);
}

#[tokio::test]
async fn delete_twice_is_404_the_second_time() {
    let (app, store) = app();
    let book = store.create("Dune", "Herbert").await.unwrap();
    let uri = format!("/delete/{}", book.id);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get(&format!("/edit/{}", book.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_id_is_404_on_every_route() {
    let (app, _) = app();

    let requests = [
        get("/edit/999"),
        post_form("/update/999", "title=T&author=A"),
        get("/delete/999"),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["detail"], "Book not found");
    }
}

#[tokio::test]
async fn non_integer_id_is_422() {
    let (app, _) = app();

    let response = app.oneshot(get("/edit/dune")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_with_missing_field_is_422() {
    let (app, store) = app();
    let book = store.create("Dune", "Herbert").await.unwrap();

    let response = app
        .oneshot(post_form(&format!("/update/{}", book.id), "title=Emma"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.get(book.id).await.unwrap().title, "Dune");
}

#[tokio::test]
async fn empty_form_values_are_422_on_create_and_update() {
    let (app, store) = app();
    let book = store.create("Dune", "Herbert").await.unwrap();
    let update_uri = format!("/update/{}", book.id);

    for body in ["title=&author=X", "title=X&author=", "title=&author="] {
        let response = app.clone().oneshot(post_form("/create", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "create {body}");

        let response = app.clone().oneshot(post_form(&update_uri, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "update {body}");
    }

    assert_eq!(store.list_all().await.unwrap(), vec![book]);
}

#[tokio::test]
async fn form_without_content_type_is_422() {
    let (app, store) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/create")
        .body(Body::from("title=Dune&author=Herbert"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("invalid form body"));
    assert!(store.list_all().await.unwrap().is_empty());
}
