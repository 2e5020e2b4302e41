use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookApiError>;

#[derive(Debug, Error)]
pub enum BookApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl BookApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for BookApiError {
    fn from(err: reqwest::Error) -> Self {
        BookApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BookApiError {
    fn from(err: serde_json::Error) -> Self {
        BookApiError::Parse(err.to_string())
    }
}
