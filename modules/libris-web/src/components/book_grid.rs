use dioxus::prelude::*;

use super::layout::Layout;
use super::{BookView, PageChrome, PageItem};
use crate::templates::render_page;

#[allow(non_snake_case)]
#[component]
fn BookGrid(chrome: PageChrome, books: Vec<BookView>, pages: Vec<PageItem>, current: u32, count: u32) -> Element {
    let prev = (current > 1).then(|| current - 1);
    let next = (current < count).then(|| current + 1);
    rsx! {
        Layout { title: String::new(), chrome: chrome.clone(),
            h2 { class: "text-2xl mt-8 mb-6",
                "Book Search Engine - A Web Application for indexing books by keywords or ReGex"
            }
            if books.is_empty() {
                p { class: "text-gray-400 text-center py-10", "No books on this page." }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4 mb-8",
                for book in books.iter() {
                    a { key: "{book.id}", href: "/book?id={book.id}",
                        class: "flex flex-col gap-2 p-6 bg-white rounded-lg shadow hover:shadow-md no-underline text-gray-900",
                        img { src: "{book.cover_medium}", alt: "{book.title}", loading: "lazy" }
                        h3 { class: "text-lg font-medium", "{book.short_title}" }
                        for name in book.authors.iter() {
                            p { class: "text-sm text-gray-500", "{name}" }
                        }
                    }
                }
            }
            nav { class: "flex justify-center items-center gap-1 mb-8", aria_label: "pagination",
                if let Some(p) = prev {
                    a { href: "/?page={p}", class: "px-3 py-1 rounded text-blue-700", "\u{2039}" }
                }
                for item in pages.iter() {
                    {match item {
                        PageItem::Page { number, current: true } => rsx! {
                            span { class: "px-3 py-1 rounded-full bg-blue-700 text-white", "{number}" }
                        },
                        PageItem::Page { number, .. } => rsx! {
                            a { href: "/?page={number}", class: "px-3 py-1 rounded-full text-blue-700 hover:bg-blue-50", "{number}" }
                        },
                        PageItem::Gap => rsx! {
                            span { class: "px-2 text-gray-400", "\u{2026}" }
                        },
                    }}
                }
                if let Some(n) = next {
                    a { href: "/?page={n}", class: "px-3 py-1 rounded text-blue-700", "\u{203a}" }
                }
            }
        }
    }
}

/// Listing page. `current` is 1-based.
pub fn render_book_grid(chrome: PageChrome, books: Vec<BookView>, current: u32, count: u32) -> String {
    let pages = super::pagination(current, count);
    render_page(
        BookGrid,
        BookGridProps {
            chrome,
            books,
            pages,
            current,
            count,
        },
    )
}
