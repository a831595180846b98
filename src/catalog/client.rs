use reqwest::header::ACCEPT;
use reqwest::Client;
use thiserror::Error;

use crate::catalog::request::CatalogRequest;
use crate::catalog::types::MoviePage;
use crate::config::Config;

/// Failure modes of a single catalog fetch.
///
/// All three collapse to the same user-facing error state; the variants
/// exist for diagnostics only and are logged, never rendered.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to reach catalog: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode catalog response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP leaf of the system: one GET per call, no retries, no timeout.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    language: String,
    token: String,
}

impl CatalogClient {
    /// Builds a client from injected configuration.
    ///
    /// The caller has already validated that a token is present; an empty
    /// token here only produces 401s from the catalog.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            token: config.token().unwrap_or_default().to_string(),
        })
    }

    /// Executes one request and decodes the page it returns.
    pub async fn fetch(&self, request: &CatalogRequest) -> Result<MoviePage, CatalogError> {
        let url = format!("{}{}", self.base_url, request.endpoint.path());

        let mut pairs: Vec<(&str, &str)> = vec![("language", self.language.as_str())];
        pairs.extend(request.params.iter().map(|(k, v)| (*k, v.as_str())));

        let response = self
            .http
            .get(&url)
            .query(&pairs)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| CatalogError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<MoviePage>()
            .await
            .map_err(|source| CatalogError::Decode { source })
    }
}
