use async_trait::async_trait;

use book_api_client::{Book, BookApiClient, BookId, BookPage, Result, SearchField, TopBook};

/// Read access to the book catalog. The web layer only talks to this trait so
/// pages can be rendered against an in-memory catalog in tests.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// One page of the listing. `page` is zero-based.
    async fn list_books(&self, page: u32) -> Result<BookPage>;
    async fn get_book(&self, id: BookId) -> Result<Book>;
    async fn get_text(&self, id: BookId) -> Result<String>;
    async fn search(&self, field: SearchField, query: &str, closeness: bool) -> Result<Vec<Book>>;
    async fn get_suggestion(&self, id: BookId) -> Result<Book>;
    async fn get_ranking(&self) -> Result<Vec<BookId>>;
    async fn get_top_books(&self) -> Result<Vec<TopBook>>;
}

#[async_trait]
impl Catalog for BookApiClient {
    async fn list_books(&self, page: u32) -> Result<BookPage> {
        BookApiClient::list_books(self, page).await
    }

    async fn get_book(&self, id: BookId) -> Result<Book> {
        BookApiClient::get_book(self, id).await
    }

    async fn get_text(&self, id: BookId) -> Result<String> {
        BookApiClient::get_text(self, id).await
    }

    async fn search(&self, field: SearchField, query: &str, closeness: bool) -> Result<Vec<Book>> {
        BookApiClient::search(self, field, query, closeness).await
    }

    async fn get_suggestion(&self, id: BookId) -> Result<Book> {
        BookApiClient::get_suggestion(self, id).await
    }

    async fn get_ranking(&self) -> Result<Vec<BookId>> {
        BookApiClient::get_ranking(self).await
    }

    async fn get_top_books(&self) -> Result<Vec<TopBook>> {
        BookApiClient::get_top_books(self).await
    }
}
