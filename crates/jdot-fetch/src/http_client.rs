use reqwest::blocking::Client as ReqwestClient;
use url::Url;

use crate::{FetchConfig, FetchError};

/// Blocking HTTP client used to download documents.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Downloads the response body of a GET request. Non-success statuses are
    /// errors.
    pub fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        tracing::debug!("received {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }
}
