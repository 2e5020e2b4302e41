use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::warn;

use libris_common::{run_search, BookApiError, BookId, SearchField};

use crate::components::{
    book_to_view, render_book_detail, render_book_grid, render_book_text, render_error,
    render_search_results, tab_label, tab_subject, PageChrome, SearchView, TabLink, TabOutcome,
};
use crate::AppState;

/// Book shown when a page is opened without an `id`.
const DEFAULT_BOOK_ID: BookId = 1;

#[derive(Deserialize)]
pub struct ListQuery {
    page: Option<String>,
}

#[derive(Deserialize)]
pub struct BookQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    keyword: Option<String>,
    tab: Option<String>,
    order: Option<String>,
}

enum PageError {
    BadRequest(String),
    NotFound(String),
    Unavailable,
}

impl PageError {
    fn from_catalog(err: &BookApiError, what: &str) -> Self {
        match err {
            BookApiError::NotFound(_) => PageError::NotFound(format!("{what} not found")),
            _ => PageError::Unavailable,
        }
    }

    fn render(self, chrome: PageChrome) -> Response {
        let (status, heading, message) = match self {
            PageError::BadRequest(message) => (StatusCode::BAD_REQUEST, "Bad request".to_string(), message),
            PageError::NotFound(heading) => (
                StatusCode::NOT_FOUND,
                heading,
                "The catalog has no entry for this request.".to_string(),
            ),
            PageError::Unavailable => (
                StatusCode::BAD_GATEWAY,
                "Service unavailable".to_string(),
                "The book catalog could not be reached. Try again in a moment.".to_string(),
            ),
        };
        (status, Html(render_error(chrome, &heading, &message))).into_response()
    }
}

fn chrome(state: &AppState, keyword: &str) -> PageChrome {
    PageChrome {
        keyword: keyword.to_string(),
        top_titles: state.top_titles.clone(),
    }
}

fn parse_id(raw: Option<&str>) -> Result<BookId, PageError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BOOK_ID),
        Some(s) => s
            .parse()
            .map_err(|_| PageError::BadRequest(format!("Invalid book id {s:?}"))),
    }
}

/// 1-based page number; anything unparseable or below 1 means the first page.
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

fn parse_tab(raw: Option<&str>) -> SearchField {
    match raw {
        Some("content") => SearchField::Content,
        Some("author") => SearchField::Author,
        _ => SearchField::Title,
    }
}

fn search_href(keyword: &str, field: SearchField, by_popularity: bool) -> String {
    let keyword: String = url::form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    let order = if by_popularity { "popularity" } else { "relevance" };
    format!("/search?keyword={keyword}&tab={field}&order={order}")
}

// --- Handlers ---

pub async fn index_page(State(state): State<Arc<AppState>>, Query(params): Query<ListQuery>) -> Response {
    let page = parse_page(params.page.as_deref());

    match state.catalog.list_books(page - 1).await {
        Ok(listing) => {
            let books = listing.result.iter().map(book_to_view).collect();
            // The API reports a zero-based page; keep the 1-based value in range.
            let current = listing
                .current_page
                .saturating_add(1)
                .clamp(1, listing.page_count.max(1));
            Html(render_book_grid(chrome(&state, ""), books, current, listing.page_count)).into_response()
        }
        Err(e) => {
            warn!(page, error = %e, "Failed to load book listing");
            PageError::from_catalog(&e, "Page").render(chrome(&state, ""))
        }
    }
}

pub async fn book_page(State(state): State<Arc<AppState>>, Query(params): Query<BookQuery>) -> Response {
    let id = match parse_id(params.id.as_deref()) {
        Ok(id) => id,
        Err(e) => return e.render(chrome(&state, "")),
    };

    let (book, suggestion) = tokio::join!(state.catalog.get_book(id), state.catalog.get_suggestion(id));

    let book = match book {
        Ok(book) => book,
        Err(e) => {
            warn!(id, error = %e, "Failed to load book");
            return PageError::from_catalog(&e, "Book").render(chrome(&state, ""));
        }
    };
    let suggestion = match suggestion {
        Ok(s) => Some(book_to_view(&s)),
        Err(e) => {
            warn!(id, error = %e, "No suggestion for book");
            None
        }
    };

    Html(render_book_detail(chrome(&state, ""), book_to_view(&book), suggestion)).into_response()
}

pub async fn text_page(State(state): State<Arc<AppState>>, Query(params): Query<BookQuery>) -> Response {
    let id = match parse_id(params.id.as_deref()) {
        Ok(id) => id,
        Err(e) => return e.render(chrome(&state, "")),
    };

    match state.catalog.get_text(id).await {
        Ok(text) => Html(render_book_text(chrome(&state, ""), id, text)).into_response(),
        Err(e) => {
            warn!(id, error = %e, "Failed to load book text");
            PageError::from_catalog(&e, "Book text").render(chrome(&state, ""))
        }
    }
}

pub async fn search_page(State(state): State<Arc<AppState>>, Query(params): Query<SearchQuery>) -> Response {
    let keyword = params.keyword.as_deref().map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return Redirect::to("/").into_response();
    }

    let active = parse_tab(params.tab.as_deref());
    let by_popularity = params.order.as_deref() == Some("popularity");

    let results = run_search(state.catalog.as_ref(), keyword).await;

    let tabs = SearchField::ALL
        .iter()
        .map(|&field| TabLink {
            label: tab_label(field),
            href: search_href(keyword, field, by_popularity),
            active: field == active,
        })
        .collect();

    let outcome = match results.get(active) {
        Ok(list) => TabOutcome::Results(list.ordered(by_popularity).iter().map(book_to_view).collect()),
        Err(_) => TabOutcome::Failed,
    };

    let view = SearchView {
        keyword: keyword.to_string(),
        tabs,
        subject: tab_subject(active),
        by_popularity,
        relevance_href: search_href(keyword, active, false),
        popularity_href: search_href(keyword, active, true),
        outcome,
    };

    Html(render_search_results(chrome(&state, keyword), view)).into_response()
}
