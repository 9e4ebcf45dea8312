use crate::error::{Result, SusyError};
use crate::models::ClientConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Source of raw HTML pages.
///
/// Errors are returned as-is to the client, which only adds context.
/// Implementations not built on `reqwest` report transport failures as
/// [`SusyError::FetchFailed`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// SuSy pages are Latin-1 and usually come without a charset parameter.
const DEFAULT_CHARSET: &str = "iso-8859-1";

/// [`PageFetcher`] backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| SusyError::Config(format!("Invalid user agent: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, agent);

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(status = %response.status(), "fetched page");
        Ok(response.text_with_charset(DEFAULT_CHARSET).await?)
    }
}
