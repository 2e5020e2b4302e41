use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use libris_common::{BookApiClient, Catalog, Config};

mod components;
mod pages;
mod templates;

pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    /// Completions for the search box, loaded once at startup.
    pub top_titles: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("libris_web=info".parse()?)
                .add_directive("libris_common=info".parse()?)
                .add_directive("book_api_client=info".parse()?),
        )
        .init();

    let config = Config::web_from_env()?;
    let client = BookApiClient::new(&config.api_uri, config.api_timeout)?;
    info!(api_uri = %client.base_url(), "Using catalog API");

    let top_titles = load_top_titles(&client).await;

    let state = Arc::new(AppState {
        catalog: Arc::new(client),
        top_titles,
    });

    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Book search web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn load_top_titles(catalog: &dyn Catalog) -> Vec<String> {
    match catalog.get_top_books().await {
        Ok(top) => {
            info!(count = top.len(), "Loaded search suggestions");
            top.into_iter().map(|b| b.title).collect()
        }
        Err(e) => {
            warn!(error = %e, "Search suggestions unavailable, continuing without them");
            Vec::new()
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index_page))
        .route("/book", get(pages::book_page))
        .route("/text", get(pages::text_page))
        .route("/search", get(pages::search_page))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        // Pages reflect live catalog data
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}
