use dioxus::prelude::*;

use super::PageChrome;

/// Site layout: app bar with home link and the search box.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, chrome: PageChrome, children: Element) -> Element {
    let full_title = if title.is_empty() {
        "Book Search Engine".to_string()
    } else {
        format!("{title} | Book Search Engine")
    };
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "initial-scale=1.0, width=device-width" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            header { class: "bg-blue-700 text-white shadow",
                div { class: "max-w-6xl mx-auto px-6 py-3 flex items-center gap-6",
                    a { href: "/", class: "text-lg font-semibold text-white no-underline whitespace-nowrap",
                        "Book Search Engine"
                    }
                    form { action: "/search", method: "get", class: "flex-1 flex gap-2",
                        input {
                            r#type: "search",
                            name: "keyword",
                            value: "{chrome.keyword}",
                            placeholder: "Search by keyword or RegEx",
                            "list": "top-books",
                            class: "w-full max-w-md rounded px-3 py-1.5 text-gray-900",
                        }
                        button { r#type: "submit", class: "px-3 py-1.5 rounded bg-blue-900 hover:bg-blue-950",
                            "Search"
                        }
                    }
                    datalist { id: "top-books",
                        for t in chrome.top_titles.iter() {
                            option { value: "{t}" }
                        }
                    }
                }
            }
            main { class: "max-w-6xl mx-auto px-6 pb-10",
                {children}
            }
        }
    }
}
