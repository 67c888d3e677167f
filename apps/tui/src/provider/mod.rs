//! Asset Provider: the marketplace endpoint that lists the assets held by an owner.

pub mod http;

use crate::domain::RawAsset;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub use http::HttpAssetProvider;

/// First page only; the gallery never paginates.
pub const PAGE_OFFSET: u32 = 0;
pub const PAGE_LIMIT: u32 = 50;

/// Failure of a single owner query. The display string is shown to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("timeout of {0}ms exceeded")]
    Timeout(u128),
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    #[error("Network Error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait AssetProvider: Send + Sync + Debug {
    /// Lists the assets owned by `owner`, in the provider's order.
    async fn fetch_assets(&self, owner: &str) -> Result<Vec<RawAsset>, FetchError>;
}

#[cfg(test)]
pub mod stub;
