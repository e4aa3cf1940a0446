use std::path::Path;

use jdot_query::{Document, QueryResult};
use url::Url;

use crate::{FetchError, HttpClient, Source, source::read_file};

/// Fetches `source` and parses it into a new document.
pub fn open(source: &Source, client: &HttpClient) -> QueryResult<Document> {
    let mut document = Document::new();
    document.load_source(source, client)?;
    Ok(document)
}

/// Reloading a [`Document`] from a file or an HTTP endpoint.
///
/// A failed fetch leaves the document empty, the same as a failed parse.
pub trait LoadExt {
    fn load_file(&mut self, path: impl AsRef<Path>) -> QueryResult<()>;
    fn load_api(&mut self, url: &Url, client: &HttpClient) -> QueryResult<()>;
    fn load_source(&mut self, source: &Source, client: &HttpClient) -> QueryResult<()>;
}

impl LoadExt for Document {
    fn load_file(&mut self, path: impl AsRef<Path>) -> QueryResult<()> {
        let path = path.as_ref();
        install(
            self,
            &Source::File(path.to_path_buf()),
            read_file(path),
        )
    }

    fn load_api(&mut self, url: &Url, client: &HttpClient) -> QueryResult<()> {
        install(self, &Source::Network(url.clone()), client.fetch(url))
    }

    fn load_source(&mut self, source: &Source, client: &HttpClient) -> QueryResult<()> {
        install(self, source, source.fetch(client))
    }
}

fn install(
    document: &mut Document,
    source: &Source,
    fetched: Result<Vec<u8>, FetchError>,
) -> QueryResult<()> {
    let bytes = fetched.map_err(|e| {
        tracing::error!("{}", e);
        document.clear();
        e
    })?;

    document.load(&bytes).inspect_err(|e| {
        tracing::error!("{} could not be parsed as JSON: {}", source, e);
    })
}
