use reqwest::{header::InvalidHeaderValue, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("invalid content-range header: {0}")]
    InvalidContentRange(String),

    #[error("invalid api key: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
}
