use serde::{Deserialize, Serialize};

/// One image asset kept after filtering the provider's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetItem {
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

impl AssetItem {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            permalink: None,
            token_id: None,
        }
    }
}

/// Asset record as returned by the marketplace. Every field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
}

impl RawAsset {
    pub fn new(name: &str, image_url: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            image_url: Some(image_url.to_string()),
            permalink: None,
            token_id: None,
        }
    }
}

/// Body of `GET /assets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetPage {
    pub assets: Vec<RawAsset>,
}

/// Result of the last submission. Exactly one variant is live at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<AssetItem>),
    Errored(String),
}

impl GalleryState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Errored(_) => "errored",
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn items(&self) -> &[AssetItem] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}
