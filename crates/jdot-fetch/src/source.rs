use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use url::Url;

use crate::{FetchError, HttpClient};

/// How a source string should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Network,
}

/// Where the bytes of a document come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Network(Url),
}

impl Source {
    pub fn new(source: &str, mode: Mode) -> Result<Self, FetchError> {
        match mode {
            Mode::File => Ok(Source::File(PathBuf::from(source))),
            Mode::Network => Url::parse(source)
                .map(Source::Network)
                .map_err(|e| FetchError::InvalidUrl {
                    url: source.to_string(),
                    source: e,
                }),
        }
    }

    /// `http` and `https` URLs are network sources, anything else is a path.
    pub fn detect(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Network(url),
            _ => Source::File(PathBuf::from(source)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Source::File(_) => Mode::File,
            Source::Network(_) => Mode::Network,
        }
    }

    /// Reads the whole source into memory.
    pub fn fetch(&self, client: &HttpClient) -> Result<Vec<u8>, FetchError> {
        match self {
            Source::File(path) => read_file(path),
            Source::Network(url) => client.fetch(url),
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::detect(s))
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "File {}", path.display()),
            Source::Network(url) => write!(f, "URL {}", url),
        }
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, FetchError> {
    tracing::debug!("reading {}", path.display());
    fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
