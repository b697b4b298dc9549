use std::fmt::{Display, Formatter};

use reqwest::StatusCode;
use url::Url;

#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl Error {
    /// Return the [`ErrorKind`] of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Failed to resolve `{page}` against the index URL `{base}`")]
    UrlJoin {
        base: Url,
        page: String,
        #[source]
        err: url::ParseError,
    },

    #[error("Failed to build the HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch: `{0}`")]
    Request(Url, #[source] reqwest::Error),

    #[error("Failed to fetch: `{url}` (HTTP status {status})")]
    Status { url: Url, status: StatusCode },

    #[error("The index page at `{0}` is not valid UTF-8")]
    Utf8(Url, #[source] std::string::FromUtf8Error),
}
