use thiserror::Error;

pub type Result<T> = std::result::Result<T, LibrisError>;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] book_api_client::BookApiError),
}
