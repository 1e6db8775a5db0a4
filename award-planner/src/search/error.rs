//! Offer search error types.

use std::fmt;

/// Errors from the offer-search HTTP client.
#[derive(Debug)]
pub enum SearchError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid credentials or expired token
    Unauthorized,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Http(e) => write!(f, "HTTP error: {e}"),
            SearchError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            SearchError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            SearchError::RateLimited => write!(f, "rate limited by search API"),
            SearchError::Unauthorized => write!(f, "unauthorized: check API credentials"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Http(e)
    }
}
