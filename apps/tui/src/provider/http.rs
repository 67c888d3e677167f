use super::{AssetProvider, FetchError, PAGE_LIMIT, PAGE_OFFSET};
use crate::domain::{AssetPage, RawAsset};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::{Duration, Instant};

/// Marketplace client speaking `GET {base}/assets?owner=..&offset=0&limit=50`.
#[derive(Debug, Clone)]
pub struct HttpAssetProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpAssetProvider {
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| FetchError::Transport(format!("invalid API key header: {e}")))?;
            headers.insert("x-api-key", value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn assets_url(&self) -> String {
        format!("{}/assets", self.base_url)
    }

    fn classify(&self, error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout.as_millis())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl AssetProvider for HttpAssetProvider {
    async fn fetch_assets(&self, owner: &str) -> Result<Vec<RawAsset>, FetchError> {
        let started = Instant::now();
        let offset = PAGE_OFFSET.to_string();
        let limit = PAGE_LIMIT.to_string();

        let response = self
            .client
            .get(self.assets_url())
            .query(&[
                ("owner", owner),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(&e))?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "asset provider rejected request"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page: AssetPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(
            owner,
            count = page.assets.len(),
            elapsed = ?started.elapsed(),
            "asset page received"
        );

        Ok(page.assets)
    }
}
