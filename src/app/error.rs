use thiserror::Error;

use crate::domain::MostPopularResponse;

/// Failures raised by the remote client and the gateway.
///
/// These never cross the repository boundary; see [`NewsError`].
#[derive(Error, Debug)]
pub enum HeadlineError {
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Article not found: {0}")]
    ArticleNotFound(i64),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HeadlineError>;

/// Typed failure produced by the repository.
///
/// Every status other than 401 lands in `HttpInternalServerError`, client
/// errors such as 404 included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    #[error("unauthorized (check the API key)")]
    HttpUnauthorized,

    #[error("server error: {0}")]
    HttpInternalServerError(String),

    #[error("unknown error: {0}")]
    HttpUnknown(String),
}

impl NewsError {
    pub fn from_remote(err: &HeadlineError) -> Self {
        match err {
            HeadlineError::HttpStatus { status, message } => {
                Self::from_status(*status, message.clone())
            }
            HeadlineError::Http(e) => match e.status() {
                Some(status) => Self::from_status(status.as_u16(), e.to_string()),
                None => Self::HttpUnknown(e.to_string()),
            },
            other => Self::HttpUnknown(other.to_string()),
        }
    }

    fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            Self::HttpUnauthorized
        } else {
            Self::HttpInternalServerError(message)
        }
    }
}

/// Success or failure of one `request_news` call.
pub type NewsResult = std::result::Result<MostPopularResponse, NewsError>;
