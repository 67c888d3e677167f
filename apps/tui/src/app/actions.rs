use crate::app::gallery::FetchTicket;
use crate::domain::AssetItem;
use crate::filter::displayable_images;
use crate::provider::{AssetProvider, FetchError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Completion of a background request, delivered to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFinished {
    pub generation: u64,
    pub address: String,
    pub outcome: Result<Vec<AssetItem>, FetchError>,
}

/// Owns the provider and the channel that carries completed fetches back to the UI.
#[derive(Debug)]
pub struct AppActions {
    provider: Arc<dyn AssetProvider>,
    sender: UnboundedSender<FetchFinished>,
    receiver: UnboundedReceiver<FetchFinished>,
}

impl AppActions {
    pub fn new(provider: Arc<dyn AssetProvider>) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            provider,
            sender,
            receiver,
        }
    }

    /// Runs the owner query on the tokio runtime. Must be called from within a runtime.
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let outcome = fetch_images(provider.as_ref(), &ticket.address).await;
            let finished = FetchFinished {
                generation: ticket.generation,
                address: ticket.address,
                outcome,
            };
            if sender.send(finished).is_err() {
                tracing::debug!("event loop gone, dropping fetch result");
            }
        });
    }

    pub fn try_recv(&mut self) -> Option<FetchFinished> {
        self.receiver.try_recv().ok()
    }

    pub async fn recv(&mut self) -> Option<FetchFinished> {
        self.receiver.recv().await
    }
}

/// Queries the provider for `address` and keeps only displayable images.
pub async fn fetch_images(
    provider: &dyn AssetProvider,
    address: &str,
) -> Result<Vec<AssetItem>, FetchError> {
    let started = Instant::now();

    match provider.fetch_assets(address).await {
        Ok(assets) => {
            let received = assets.len();
            let images = displayable_images(assets);
            tracing::info!(
                address,
                received,
                kept = images.len(),
                elapsed = ?started.elapsed(),
                "assets fetched"
            );
            Ok(images)
        }
        Err(err) => {
            tracing::warn!(address, error = %err, "asset fetch failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawAsset;
    use crate::provider::stub::StubProvider;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn fetch_images_filters_provider_response() {
        let provider = StubProvider::returning(vec![
            RawAsset::new("A", "a.png"),
            RawAsset::new("B", "b.mp4"),
        ]);

        let images = fetch_images(&provider, "0xabc").await.unwrap();

        assert_eq!(images, vec![AssetItem::new("A", "a.png")]);
        assert_eq!(provider.calls(), vec!["0xabc".to_string()]);
    }

    #[tokio::test]
    async fn spawned_fetch_reports_back_with_its_ticket() {
        let provider = Arc::new(StubProvider::failing(FetchError::Timeout(5000)));
        let mut actions = AppActions::new(provider);

        actions.spawn_fetch(FetchTicket {
            generation: 3,
            address: "0xabc".to_string(),
        });
        let finished = actions.recv().await.unwrap();

        assert_eq!(
            finished,
            FetchFinished {
                generation: 3,
                address: "0xabc".to_string(),
                outcome: Err(FetchError::Timeout(5000)),
            }
        );
    }
}
