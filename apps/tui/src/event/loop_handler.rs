use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::address::to_checksum_address;
use crate::app::gallery::{GalleryView, GRID_COLUMNS, NOTHING_FOUND, WRONG_ADDRESS};
use crate::app::{fetch_images, handle_input, handle_mouse, AddressGallery, App};
use crate::cli::CliArgs;
use crate::domain::AssetItem;
use crate::provider::AssetProvider;
use crate::ui;

/// Run a single lookup without a UI and print the result
pub async fn run_headless(
    provider: &dyn AssetProvider,
    address: Option<&str>,
    json: bool,
) -> Result<()> {
    let Some(address) = address.filter(|address| !address.is_empty()) else {
        eprintln!("{}", CliArgs::help_text());
        return Err(eyre!("No terminal detected; pass --address to run headless"));
    };

    let mut gallery: AddressGallery = AddressGallery::default();
    gallery.set_input(address);

    let Some(ticket) = gallery.submit() else {
        return Err(eyre!("{WRONG_ADDRESS}: {address}"));
    };

    tracing::info!(address = %ticket.address, "headless owner query");
    let outcome = fetch_images(provider, &ticket.address).await;
    gallery.complete(ticket.generation, outcome);

    let output = if json {
        render_headless_json(&gallery)?
    } else {
        render_headless_text(&gallery)
    };
    println!("{output}");

    match gallery.view() {
        GalleryView::Error(message) => Err(eyre!("{message}")),
        _ => Ok(()),
    }
}

pub fn render_headless_text(gallery: &AddressGallery) -> String {
    match gallery.view() {
        GalleryView::InputOnly | GalleryView::Busy => String::new(),
        GalleryView::Nothing => NOTHING_FOUND.to_string(),
        GalleryView::Error(message) => message.to_string(),
        GalleryView::Grid(items) => {
            let mut lines = vec![format!(
                "{} images for {}",
                items.len(),
                gallery.input()
            )];
            lines.extend(items.chunks(GRID_COLUMNS).map(|row| {
                row.iter()
                    .map(|item| format!("{} <{}>", item.name, item.image_url))
                    .collect::<Vec<_>>()
                    .join(" | ")
            }));
            lines.join("\n")
        }
    }
}

pub fn render_headless_json(gallery: &AddressGallery) -> Result<String> {
    let error = match gallery.view() {
        GalleryView::Error(message) => Some(message),
        _ => None,
    };

    let report = HeadlessReport {
        address: gallery.input(),
        checksum: to_checksum_address(gallery.input()),
        state: gallery.state().as_str(),
        items: gallery.state().items(),
        error,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    address: &'a str,
    checksum: Option<String>,
    state: &'static str,
    items: &'a [AssetItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();
        app.drain_messages();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => handle_input(app, key),
                Ok(Event::Mouse(mouse)) => {
                    let size = terminal.size()?;
                    handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::FocusGained | Event::FocusLost | Event::Paste(_)) | Err(_) => {}
            }
        }

        if !app.running {
            break;
        }

        // Yield so spawned fetches make progress on a current-thread runtime.
        tokio::task::yield_now().await;
    }

    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawAsset;
    use crate::provider::stub::StubProvider;
    use crate::provider::FetchError;
    use pretty_assertions::assert_eq;

    const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    async fn looked_up(provider: &StubProvider) -> AddressGallery {
        let mut gallery: AddressGallery = AddressGallery::default();
        gallery.set_input(ADDRESS);
        let ticket = gallery.submit().unwrap();
        let outcome = fetch_images(provider, &ticket.address).await;
        gallery.complete(ticket.generation, outcome);
        gallery
    }

    #[tokio::test]
    async fn headless_text_prints_rows_of_four() {
        let provider = StubProvider::returning(
            (0..5)
                .map(|i| RawAsset::new(&format!("A{i}"), &format!("{i}.png")))
                .collect(),
        );
        let gallery = looked_up(&provider).await;

        assert_eq!(
            render_headless_text(&gallery),
            format!(
                "5 images for {ADDRESS}\n\
                 A0 <0.png> | A1 <1.png> | A2 <2.png> | A3 <3.png>\n\
                 A4 <4.png>"
            )
        );
    }

    #[tokio::test]
    async fn headless_text_reports_nothing() {
        let provider = StubProvider::returning(vec![
            RawAsset::new("A", "a.png"),
            RawAsset::new("B", "b.mp4"),
        ]);
        let gallery = looked_up(&provider).await;
        assert_eq!(render_headless_text(&gallery), "There is nothing!");
    }

    #[tokio::test]
    async fn headless_json_includes_error() {
        let provider = StubProvider::failing(FetchError::Status {
            status: 500,
            body: String::new(),
        });
        let gallery = looked_up(&provider).await;

        let json: serde_json::Value =
            serde_json::from_str(&render_headless_json(&gallery).unwrap()).unwrap();

        assert_eq!(json["state"], "errored");
        assert_eq!(json["checksum"], ADDRESS);
        assert_eq!(json["error"], "Request failed with status code 500");
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn headless_rejects_invalid_address_without_fetching() {
        let provider = StubProvider::returning(Vec::new());
        let err = run_headless(&provider, Some("notanaddress"), false)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Wrong address: notanaddress");
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn headless_fails_on_fetch_error() {
        let provider = StubProvider::failing(FetchError::Timeout(5000));
        let err = run_headless(&provider, Some(ADDRESS), true).await.unwrap_err();
        assert_eq!(err.to_string(), "timeout of 5000ms exceeded");
    }
}
