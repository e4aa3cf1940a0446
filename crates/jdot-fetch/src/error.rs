use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Failures while acquiring the raw bytes of a document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("File {file} could not be opened: {source}", file = .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to fetch URL {url}: {source}")]
    Http { url: Url, source: reqwest::Error },
    #[error("Request to {url} failed with status: {status}")]
    Status { url: Url, status: u16 },
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

// Building a document from a source reports any acquisition failure as a
// parse failure, the same as malformed content.
impl From<FetchError> for jdot_query::Error {
    fn from(e: FetchError) -> Self {
        jdot_query::Error::ParseFailure(e.to_string())
    }
}
