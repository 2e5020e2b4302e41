use dioxus::prelude::*;

use super::layout::Layout;
use super::PageChrome;
use crate::templates::render_page;

#[allow(non_snake_case)]
#[component]
fn BookText(chrome: PageChrome, id: u32, text: String) -> Element {
    rsx! {
        Layout { title: "Read".to_string(), chrome: chrome.clone(),
            div { class: "flex gap-6 mt-8 text-sm",
                a { href: "javascript:history.back()", class: "text-blue-700 no-underline", "\u{2190} Back" }
                a { href: "/book?id={id}", class: "text-blue-700 no-underline", "About this book" }
            }
            div { class: "whitespace-pre-wrap font-serif leading-relaxed mt-6 bg-white p-8 rounded-lg shadow",
                "{text}"
            }
        }
    }
}

pub fn render_book_text(chrome: PageChrome, id: u32, text: String) -> String {
    render_page(BookText, BookTextProps { chrome, id, text })
}
