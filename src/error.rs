use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single search. None of these end the session.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("unexpected page structure: {0}")]
    DataShape(String),
}

impl SearchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_) | SearchError::HttpStatus { .. })
    }
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;
