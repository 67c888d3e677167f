use address_gallery::app::{App, AppActions};
use address_gallery::cli::CliArgs;
use address_gallery::config::{load_dotenv, Settings};
use address_gallery::provider::{AssetProvider, HttpAssetProvider};
use address_gallery::{event, logging, terminal};
use clap::Parser;
use color_eyre::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // `.env` has to be in the environment before clap reads GALLERY_* variables
    load_dotenv();
    let args = CliArgs::parse();
    let settings = Settings::from_cli(&args)?;
    logging::init_logging(&settings)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_base = %settings.api_base,
        timeout = ?settings.timeout,
        "starting address gallery"
    );

    let provider: Arc<dyn AssetProvider> = Arc::new(HttpAssetProvider::new(
        &settings.api_base,
        settings.api_key.as_deref(),
        settings.timeout,
    )?);

    // Run headless when asked for a single lookup or when there is no terminal
    if args.address.is_some() || !is_terminal() {
        return event::run_headless(provider.as_ref(), args.address.as_deref(), args.json).await;
    }

    let mut app = App::new(AppActions::new(provider));

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
