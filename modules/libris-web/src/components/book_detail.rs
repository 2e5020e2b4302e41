use dioxus::prelude::*;

use super::layout::Layout;
use super::{BookView, PageChrome};
use crate::templates::render_page;

/// Authors, translators, bookshelves, subjects and optionally languages.
/// Empty sections are left out.
pub(crate) fn metadata_lines(book: &BookView, with_languages: bool) -> Element {
    rsx! {
        if !book.authors.is_empty() {
            p { class: "text-sm",
                span { class: "text-gray-500 mr-2", "Author:" }
                for name in book.authors.iter() {
                    span { class: "mr-2", "{name}" }
                }
            }
        }
        if !book.translators.is_empty() {
            p { class: "text-sm",
                span { class: "text-gray-500 mr-2", "Translators:" }
                for name in book.translators.iter() {
                    span { class: "mr-2", "{name}" }
                }
            }
        }
        if !book.bookshelves.is_empty() {
            p { class: "text-sm",
                span { class: "text-gray-500 mr-2", "Bookshelves:" }
                for shelf in book.bookshelves.iter() {
                    i { class: "mr-2", "{shelf}" }
                }
            }
        }
        if !book.subjects.is_empty() {
            p { class: "text-sm",
                span { class: "text-gray-500 mr-2", "Subject:" }
                for subject in book.subjects.iter() {
                    i { class: "mr-2", "{subject}" }
                }
            }
        }
        if with_languages && !book.languages.is_empty() {
            p { class: "text-sm",
                span { class: "text-gray-500 mr-2", "Language:" }
                for language in book.languages.iter() {
                    span { class: "mr-2", "{language}" }
                }
            }
        }
    }
}

/// A clickable row with small cover, title and metadata.
pub(crate) fn book_list_item(book: &BookView) -> Element {
    rsx! {
        a { href: "/book?id={book.id}",
            class: "flex gap-6 items-start p-4 bg-white border border-gray-200 rounded-lg mb-3 hover:border-blue-400 no-underline text-gray-900",
            img { src: "{book.cover_small}", alt: "{book.title}", loading: "lazy", class: "shrink-0" }
            div { class: "flex flex-col gap-1",
                h3 { class: "text-base font-medium", "{book.title}" }
                {metadata_lines(book, false)}
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn BookDetail(chrome: PageChrome, book: BookView, suggestion: Option<BookView>) -> Element {
    rsx! {
        Layout { title: book.title.clone(), chrome: chrome.clone(),
            a { href: "javascript:history.back()", class: "inline-block mt-8 text-sm text-blue-700 no-underline",
                "\u{2190} Back"
            }
            div { class: "flex flex-col gap-4 mt-8",
                h2 { class: "text-2xl",
                    "Information about book "
                    i { "{book.title}" }
                }
                div {
                    img { src: "{book.cover_medium}", alt: "{book.title}", loading: "lazy" }
                }
                {metadata_lines(&book, true)}
                div { class: "flex gap-4",
                    a { href: "/text?id={book.id}", class: "text-blue-700", "Read this book" }
                    if let Some(html) = &book.html_url {
                        a { href: "{html}", class: "text-blue-700", target: "_blank", rel: "noopener",
                            "Open HTML edition"
                        }
                    }
                }
                if let Some(other) = &suggestion {
                    h3 { class: "text-xl mt-8", "You might also like..." }
                    {book_list_item(other)}
                }
            }
        }
    }
}

pub fn render_book_detail(chrome: PageChrome, book: BookView, suggestion: Option<BookView>) -> String {
    render_page(
        BookDetail,
        BookDetailProps {
            chrome,
            book,
            suggestion,
        },
    )
}
