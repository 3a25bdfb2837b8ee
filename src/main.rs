use anyhow::Result;
use tracing::info;

use futures_watch::config::AppConfig;
use futures_watch::extractor::{RowExtractor, Selectors};
use futures_watch::loader::PageLoader;
use futures_watch::scheduler::{SystemClock, UpdateLoop};
use futures_watch::scraper::BrowserSession;
use futures_watch::writer::SnapshotWriter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("futures_watch=debug".parse()?),
        )
        .init();

    info!("Starting futures-watch...");

    let config = AppConfig::from_env()?;
    let selectors = Selectors::default();
    let clock = SystemClock;

    let session = BrowserSession::new(&config.scraper)?;

    info!("Expanding the quotes table (clicking 'Load More' until complete)...");
    let loader = PageLoader::new(config.loader.clone(), selectors.load_more_xpath.clone());
    let outcome = loader.load(&session, &clock).await?;
    info!("Pagination finished after {} clicks", outcome.clicks());

    let update_loop = UpdateLoop::new(
        session,
        RowExtractor::new(&selectors)?,
        SnapshotWriter::new(config.output.path.clone()),
        clock,
        config.scheduler.clone(),
    );

    info!(
        "Polling prices every {} seconds, writing to {}",
        config.scheduler.update_interval_secs, config.output.path
    );
    tokio::select! {
        _ = update_loop.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down...");
        }
    }

    // The browser session is dropped here, closing the Chrome process.
    Ok(())
}
