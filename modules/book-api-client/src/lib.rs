pub mod error;
pub mod types;

pub use error::{BookApiError, Result};
pub use types::{Book, BookId, BookPage, Person, SearchField, TopBook};

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Client for the book catalog API. One method per endpoint, each a single GET.
#[derive(Clone)]
pub struct BookApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BookApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of the catalog. `page` is zero-based.
    pub async fn list_books(&self, page: u32) -> Result<BookPage> {
        self.get_json("/books", &[("page", page.to_string())], "book page")
            .await
    }

    pub async fn get_book(&self, id: BookId) -> Result<Book> {
        self.get_json(&format!("/books/{id}"), &[], &format!("book {id}"))
            .await
    }

    /// Fetch the raw text of a book.
    pub async fn get_text(&self, id: BookId) -> Result<String> {
        let what = format!("text of book {id}");
        let result = self.get_text_body(&format!("/text/{id}"), &what).await;
        log_failure(&what, result)
    }

    /// Search books by keyword or regex. With `closeness` the API orders
    /// results by closeness centrality instead of keyword relevance.
    pub async fn search(
        &self,
        field: SearchField,
        query: &str,
        closeness: bool,
    ) -> Result<Vec<Book>> {
        tracing::debug!(%field, query, closeness, "Searching catalog");
        self.get_json(
            "/books",
            &[
                (field.query_param(), query.to_string()),
                ("closeness", closeness.to_string()),
            ],
            &format!("{field} search"),
        )
        .await
    }

    pub async fn search_by_title(&self, query: &str, closeness: bool) -> Result<Vec<Book>> {
        self.search(SearchField::Title, query, closeness).await
    }

    pub async fn search_by_author(&self, query: &str, closeness: bool) -> Result<Vec<Book>> {
        self.search(SearchField::Author, query, closeness).await
    }

    pub async fn search_by_content(&self, query: &str, closeness: bool) -> Result<Vec<Book>> {
        self.search(SearchField::Content, query, closeness).await
    }

    /// A book similar to `id`, picked by the API.
    pub async fn get_suggestion(&self, id: BookId) -> Result<Book> {
        self.get_json(
            "/books",
            &[("suggestion", id.to_string())],
            &format!("suggestion for book {id}"),
        )
        .await
    }

    /// Book ids ordered by closeness centrality, most popular first.
    pub async fn get_ranking(&self) -> Result<Vec<BookId>> {
        self.get_json("/ranking", &[], "ranking").await
    }

    /// Titles of the hundred most popular books.
    pub async fn get_top_books(&self) -> Result<Vec<TopBook>> {
        self.get_json("/ranking/top100books", &[], "top books").await
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).query(query).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BookApiError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BookApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T> {
        let result = self.decode_json(path, query, what).await;
        log_failure(what, result)
    }

    async fn decode_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T> {
        let body = self.get(path, query, what).await?.text().await?;
        // The API answers 200 with an empty body when a lookup finds nothing.
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(BookApiError::NotFound(what.to_string()));
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    async fn get_text_body(&self, path: &str, what: &str) -> Result<String> {
        let resp = self.get(path, &[], what).await?;
        Ok(resp.text().await?)
    }
}

fn log_failure<T>(what: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        if e.is_not_found() {
            tracing::info!(what, "Catalog lookup found nothing");
        } else {
            tracing::warn!(what, error = %e, "Catalog request failed");
        }
    }
    result
}
