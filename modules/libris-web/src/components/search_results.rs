use dioxus::prelude::*;

use super::book_detail::book_list_item;
use super::layout::Layout;
use super::{PageChrome, SearchView, TabOutcome};
use crate::templates::render_page;

fn tab_classes(active: bool) -> &'static str {
    if active {
        "px-4 py-2 text-sm uppercase border-b-2 border-blue-700 text-blue-700 no-underline"
    } else {
        "px-4 py-2 text-sm uppercase border-b-2 border-transparent text-gray-500 hover:text-gray-900 no-underline"
    }
}

#[allow(non_snake_case)]
#[component]
fn SearchPage(chrome: PageChrome, view: SearchView) -> Element {
    let knob = if view.by_popularity {
        "inline-block w-10 h-5 rounded-full bg-blue-700 relative after:absolute after:right-0.5 after:top-0.5 after:w-4 after:h-4 after:rounded-full after:bg-white"
    } else {
        "inline-block w-10 h-5 rounded-full bg-gray-300 relative after:absolute after:left-0.5 after:top-0.5 after:w-4 after:h-4 after:rounded-full after:bg-white"
    };
    let toggle_href = if view.by_popularity {
        view.relevance_href.clone()
    } else {
        view.popularity_href.clone()
    };

    rsx! {
        Layout { title: format!("Search: {}", view.keyword), chrome: chrome.clone(),
            nav { class: "flex gap-2 border-b border-gray-200 mt-6 overflow-x-auto", aria_label: "search results tabs",
                for tab in view.tabs.iter() {
                    a { href: "{tab.href}", class: tab_classes(tab.active), "{tab.label}" }
                }
            }
            div { "role": "tabpanel", class: "p-6",
                {match &view.outcome {
                    TabOutcome::Results(books) if !books.is_empty() => {
                        let count = books.len();
                        rsx! {
                            h3 { class: "text-lg mt-4 mb-3",
                                "{count} Results of {view.subject} containing "
                                i { "{view.keyword}" }
                            }
                            div { class: "flex items-center gap-2 mb-4 text-sm",
                                span { "Ordered by" }
                                a { href: "{view.relevance_href}", class: "text-gray-600 no-underline", "relevance of keyword" }
                                a { href: "{toggle_href}", class: knob, aria_label: "toggle ordering" }
                                a { href: "{view.popularity_href}", class: "text-gray-600 no-underline",
                                    "Ordered by popularity(closeness centrality)"
                                }
                            }
                            for book in books.iter() {
                                {book_list_item(book)}
                            }
                        }
                    }
                    TabOutcome::Results(_) => rsx! {
                        h3 { class: "text-lg mt-4",
                            "No results found of {view.subject} containing "
                            i { "{view.keyword}" }
                        }
                    },
                    TabOutcome::Failed => rsx! {
                        div { class: "mt-4 p-4 bg-amber-50 border border-amber-200 rounded text-amber-900",
                            "The search service is unavailable right now. Try again in a moment."
                        }
                    },
                }}
            }
        }
    }
}

pub fn render_search_results(chrome: PageChrome, view: SearchView) -> String {
    render_page(SearchPage, SearchPageProps { chrome, view })
}
