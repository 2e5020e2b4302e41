use libris_common::{Book, SearchField};

pub mod book_detail;
pub mod book_grid;
pub mod book_text;
pub mod error_page;
pub mod layout;
pub mod search_results;

pub use book_detail::render_book_detail;
pub use book_grid::render_book_grid;
pub use book_text::render_book_text;
pub use error_page::render_error;
pub use search_results::render_search_results;

/// Titles longer than this are cut in the listing grid.
const GRID_TITLE_CHARS: usize = 100;

// --- View Models ---

/// Per-request data every page's layout needs.
#[derive(Clone, PartialEq, Default)]
pub struct PageChrome {
    /// Pre-fills the search box.
    pub keyword: String,
    /// Offered as completions in the search box.
    pub top_titles: Vec<String>,
}

#[derive(Clone, PartialEq)]
pub struct BookView {
    pub id: u32,
    pub title: String,
    pub short_title: String,
    pub cover_small: String,
    pub cover_medium: String,
    pub authors: Vec<String>,
    pub translators: Vec<String>,
    pub bookshelves: Vec<String>,
    pub subjects: Vec<String>,
    pub languages: Vec<String>,
    pub html_url: Option<String>,
}

pub fn book_to_view(book: &Book) -> BookView {
    BookView {
        id: book.id,
        title: book.title.clone(),
        short_title: truncate_title(&book.title, GRID_TITLE_CHARS),
        cover_small: book.image.replacen("medium", "small", 1),
        cover_medium: book.image.replacen("small", "medium", 1),
        authors: book.authors.iter().map(|p| display_name(&p.name)).collect(),
        translators: book.translators.iter().map(|p| display_name(&p.name)).collect(),
        bookshelves: book.bookshelves.clone(),
        subjects: book.subjects.clone(),
        languages: book.languages.clone(),
        html_url: book.format_url("text/html").map(String::from),
    }
}

/// "Dickens, Charles" reads as "Dickens-Charles".
pub fn display_name(name: &str) -> String {
    name.replacen(", ", "-", 1)
}

pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let cut: String = title.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Gap,
}

/// Pagination entries for a 1-based `current` page out of `count`: first and
/// last page, plus a window of two pages either side of the current one.
pub fn pagination(current: u32, count: u32) -> Vec<PageItem> {
    if count == 0 {
        return Vec::new();
    }
    let window = current.saturating_sub(2).max(1)..=current.saturating_add(2).min(count);
    let numbers = std::iter::once(1).chain(window).chain(std::iter::once(count));

    let mut items = Vec::new();
    let mut last_shown = 0;
    for number in numbers {
        if number <= last_shown {
            continue;
        }
        if last_shown != 0 && number - last_shown > 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page {
            number,
            current: number == current,
        });
        last_shown = number;
    }
    items
}

#[derive(Clone, PartialEq)]
pub struct TabLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, PartialEq)]
pub enum TabOutcome {
    Results(Vec<BookView>),
    Failed,
}

#[derive(Clone, PartialEq)]
pub struct SearchView {
    pub keyword: String,
    pub tabs: Vec<TabLink>,
    /// What the active tab searched, e.g. "books' titles".
    pub subject: &'static str,
    pub by_popularity: bool,
    pub relevance_href: String,
    pub popularity_href: String,
    pub outcome: TabOutcome,
}

pub fn tab_label(field: SearchField) -> &'static str {
    match field {
        SearchField::Title => "search results by title",
        SearchField::Content => "search results by content",
        SearchField::Author => "search results by authors' names",
    }
}

pub fn tab_subject(field: SearchField) -> &'static str {
    match field {
        SearchField::Title => "books' titles",
        SearchField::Content => "books' content",
        SearchField::Author => "books' authors' names",
    }
}
