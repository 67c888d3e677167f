use super::{AssetProvider, FetchError};
use crate::domain::RawAsset;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Canned provider for tests. Records every owner it was asked about.
#[derive(Debug)]
pub struct StubProvider {
    response: Result<Vec<RawAsset>, FetchError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn returning(assets: Vec<RawAsset>) -> Self {
        Self {
            response: Ok(assets),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetProvider for StubProvider {
    async fn fetch_assets(&self, owner: &str) -> Result<Vec<RawAsset>, FetchError> {
        self.calls.lock().unwrap().push(owner.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}
