//! Single-shot HTML fetching with a desktop browser identity.

use crate::config::HttpConfig;
use crate::error::{ConfigError, FetchError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Issues one GET per URL. There are no retries.
#[derive(Debug, Clone)]
pub struct HtmlFetcher {
    client: Client,
}

impl HtmlFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(ConfigError::Client)?;
        Ok(Self { client })
    }

    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// [`FetchError::Status`] for a non-2xx response, [`FetchError::Transport`]
    /// for connection, timeout or body-read failures.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(parsed).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(transport)?;
        debug!(bytes = text.len(), %status, "Fetched page");
        Ok(text)
    }
}
