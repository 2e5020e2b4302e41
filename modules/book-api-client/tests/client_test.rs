//! Drives `BookApiClient` against a stub catalog served on a local port.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use book_api_client::{BookApiClient, BookApiError, SearchField};

fn book_json(id: u32, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "image": format!("https://covers.example/{id}/small.jpg"),
        "authors": [{ "name": "Dickens, Charles", "birth_year": 1812, "death_year": 1870 }],
        "translators": [],
        "subjects": ["Christmas stories"],
        "bookshelves": ["Children's Literature"],
        "languages": ["en"],
        "formats": { "text/html": format!("https://books.example/{id}.html"), "image/jpeg": null },
        "text": format!("https://books.example/{id}.txt"),
        "copyright": false
    })
}

async fn books(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(page) = params.get("page") {
        return Json(json!({
            "totalCount": 3,
            "pageCount": 2,
            "currentPage": page.parse::<u32>().unwrap_or(0),
            "perPage": 2,
            "result": [book_json(1, "A Christmas Carol"), book_json(2, "Carmilla")]
        }))
        .into_response();
    }
    if let Some(q) = params.get("searchByAuthor") {
        if q == "boom" {
            return (StatusCode::INTERNAL_SERVER_ERROR, "index unavailable").into_response();
        }
    }
    for key in ["searchByTitle", "searchByAuthor", "search"] {
        if let Some(q) = params.get(key) {
            let closeness = params.get("closeness").cloned().unwrap_or_default();
            // Echo what the stub received so tests can check the encoding.
            return Json(json!([
                book_json(7, &format!("{key}|{q}|{closeness}")),
                book_json(7, "duplicate"),
            ]))
            .into_response();
        }
    }
    match params.get("suggestion").map(String::as_str) {
        Some("1") => Json(book_json(2, "Carmilla")).into_response(),
        Some("0") => StatusCode::OK.into_response(),
        Some(_) => "<html>not json</html>".into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn book_by_id(Path(id): Path<u32>) -> Response {
    if id == 1 {
        Json(book_json(1, "A Christmas Carol")).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn text_by_id(Path(id): Path<u32>) -> Response {
    if id == 1 {
        "Marley was dead: to begin with.\n\nThere is no doubt whatever about that.".into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn stub_router() -> Router {
    Router::new()
        .route("/books", get(books))
        .route("/books/{id}", get(book_by_id))
        .route("/text/{id}", get(text_by_id))
        .route("/ranking", get(|| async { Json(json!([3, 1, 2])) }))
        .route(
            "/ranking/top100books",
            get(|| async { Json(json!([{ "key": 46, "value": "A Christmas Carol" }])) }),
        )
}

async fn spawn_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.unwrap();
    });
    format!("http://{addr}/")
}

async fn client() -> BookApiClient {
    BookApiClient::new(&spawn_stub().await, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn base_url_trailing_slash_is_trimmed() {
    let client = client().await;
    assert!(!client.base_url().ends_with('/'));
}

#[tokio::test]
async fn list_books_decodes_page() {
    let page = client().await.list_books(1).await.unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.page_count, 2);
    assert_eq!(page.total_count, Some(3));
    assert_eq!(page.result.len(), 2);
    assert_eq!(page.result[0].authors[0].name, "Dickens, Charles");
}

#[tokio::test]
async fn get_book_decodes_formats_and_ignores_unknown_fields() {
    let book = client().await.get_book(1).await.unwrap();
    assert_eq!(book.id, 1);
    assert_eq!(book.format_url("text/html"), Some("https://books.example/1.html"));
    assert_eq!(book.format_url("image/jpeg"), None);
    assert_eq!(book.languages, vec!["en".to_string()]);
}

#[tokio::test]
async fn missing_book_is_not_found() {
    let err = client().await.get_book(404).await.unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn get_text_returns_raw_body() {
    let text = client().await.get_text(1).await.unwrap();
    assert!(text.starts_with("Marley was dead"));
    assert!(text.contains("\n\n"));
}

#[tokio::test]
async fn missing_text_is_not_found() {
    let err = client().await.get_text(2).await.unwrap_err();
    assert!(matches!(err, BookApiError::NotFound(_)));
}

#[tokio::test]
async fn search_sends_field_param_and_encodes_regex() {
    let client = client().await;
    let books = client.search_by_title("Car(o|a)l & co", true).await.unwrap();
    assert_eq!(books[0].title, "searchByTitle|Car(o|a)l & co|true");

    let books = client.search_by_content("carol", false).await.unwrap();
    assert_eq!(books[0].title, "search|carol|false");

    let books = client.search(SearchField::Author, "Dickens", false).await.unwrap();
    assert_eq!(books[0].title, "searchByAuthor|Dickens|false");
}

#[tokio::test]
async fn search_keeps_upstream_duplicates() {
    let books = client().await.search_by_author("Dickens", false).await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, books[1].id);
}

#[tokio::test]
async fn server_error_is_api_error_with_status() {
    let err = client().await.search_by_author("boom", false).await.unwrap_err();
    match err {
        BookApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "index unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn suggestion_decodes_book() {
    let book = client().await.get_suggestion(1).await.unwrap();
    assert_eq!(book.title, "Carmilla");
}

#[tokio::test]
async fn empty_suggestion_body_is_not_found() {
    let err = client().await.get_suggestion(0).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let err = client().await.get_suggestion(5).await.unwrap_err();
    assert!(matches!(err, BookApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn ranking_and_top_books() {
    let client = client().await;
    assert_eq!(client.get_ranking().await.unwrap(), vec![3, 1, 2]);

    let top = client.get_top_books().await.unwrap();
    assert_eq!(top[0].id, 46);
    assert_eq!(top[0].title, "A Christmas Carol");
}

#[tokio::test]
async fn unreachable_api_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BookApiClient::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let err = client.get_ranking().await.unwrap_err();
    assert!(matches!(err, BookApiError::Network(_)), "got {err:?}");
}
