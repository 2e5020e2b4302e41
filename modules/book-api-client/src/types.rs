use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a book in the catalog.
pub type BookId = u32;

/// A single book record as returned by the catalog API.
///
/// Collections missing from the payload deserialize as empty, unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    /// Cover image URL. The API serves `small` and `medium` variants.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub translators: Vec<Person>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Download links keyed by mime type, e.g. `text/html`.
    #[serde(default)]
    pub formats: BTreeMap<String, Option<String>>,
    /// URL of the plain-text edition.
    #[serde(default)]
    pub text: Option<String>,
}

impl Book {
    /// Link for a given mime type, if the API advertised one.
    pub fn format_url(&self, mime: &str) -> Option<&str> {
        self.formats.get(mime).and_then(|u| u.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    #[serde(default)]
    pub result: Vec<Book>,
    pub page_count: u32,
    /// Zero-based.
    pub current_page: u32,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Preview entry of the most popular books: `{ "key": id, "value": title }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopBook {
    #[serde(rename = "key")]
    pub id: BookId,
    #[serde(rename = "value")]
    pub title: String,
}

/// Which part of a book a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Content,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Content, SearchField::Author];

    /// Query parameter the catalog API expects for this search kind.
    pub fn query_param(self) -> &'static str {
        match self {
            SearchField::Title => "searchByTitle",
            SearchField::Author => "searchByAuthor",
            SearchField::Content => "search",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Content => write!(f, "content"),
        }
    }
}
