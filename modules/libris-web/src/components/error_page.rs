use dioxus::prelude::*;

use super::layout::Layout;
use super::PageChrome;
use crate::templates::render_page;

#[allow(non_snake_case)]
#[component]
fn ErrorPage(chrome: PageChrome, heading: String, message: String) -> Element {
    rsx! {
        Layout { title: heading.clone(), chrome: chrome.clone(),
            div { class: "max-w-xl mx-auto mt-16 p-8 bg-white border border-gray-200 rounded-lg text-center",
                h2 { class: "text-xl font-semibold mb-2", "{heading}" }
                p { class: "text-gray-500 mb-6", "{message}" }
                a { href: "/", class: "text-blue-700", "Back to all books" }
            }
        }
    }
}

pub fn render_error(chrome: PageChrome, heading: &str, message: &str) -> String {
    render_page(
        ErrorPage,
        ErrorPageProps {
            chrome,
            heading: heading.to_string(),
            message: message.to_string(),
        },
    )
}
