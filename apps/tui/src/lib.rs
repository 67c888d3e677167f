// Export our modules for use in the binary and tests
pub mod address;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod filter;
pub mod logging;
pub mod provider;
pub mod terminal;
pub mod ui;

pub use address::{AddressValidator, EvmAddressValidator};
pub use domain::{AssetItem, GalleryState};
pub use provider::{AssetProvider, FetchError, HttpAssetProvider};
