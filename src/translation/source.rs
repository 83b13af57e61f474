//! Where result pages come from.

use std::time::Duration;

use url::Url;

use super::TranslationError;

/// Fetches one search result page.
#[tower_lsp::async_trait]
pub trait TranslationSource: Send + Sync {
    /// Performs a single request for `url`; no retries.
    async fn fetch_page(&self, url: &Url) -> Result<String, TranslationError>;
}

/// Fetches result pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTranslationSource {
    /// Shared connection pool.
    client: reqwest::Client,
}

impl HttpTranslationSource {
    /// Upper bound for a single lookup.
    const TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new() -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[tower_lsp::async_trait]
impl TranslationSource for HttpTranslationSource {
    async fn fetch_page(&self, url: &Url) -> Result<String, TranslationError> {
        tracing::debug!(url = %url, "Fetching translation page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
