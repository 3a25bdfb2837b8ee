use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::SchedulerConfig;
use crate::extractor::RowExtractor;
use crate::models::Snapshot;
use crate::scraper::PageSource;
use crate::writer::SnapshotWriter;

/// Injectable time source so cycle and countdown logic can run
/// deterministically in tests without real delays.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
    async fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs Extractor then Writer on a fixed interval, indefinitely.
///
/// Every cycle is stateless: it reads the current document, renders a
/// fresh snapshot and replaces the report file. Per-cycle failures are
/// logged and the loop continues; nothing here is fatal.
pub struct UpdateLoop<S, C> {
    source: S,
    extractor: RowExtractor,
    writer: SnapshotWriter,
    clock: C,
    config: SchedulerConfig,
}

impl<S: PageSource, C: Clock> UpdateLoop<S, C> {
    pub fn new(
        source: S,
        extractor: RowExtractor,
        writer: SnapshotWriter,
        clock: C,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            source,
            extractor,
            writer,
            clock,
            config,
        }
    }

    /// Run one extract-and-write cycle. Returns the number of records
    /// written.
    pub fn run_cycle(&self) -> anyhow::Result<usize> {
        debug!("Fetching instrument names and current prices");
        let html = self.source.content()?;
        let records = self.extractor.extract(&html);

        let snapshot = Snapshot::new(self.clock.now(), records);
        let count = snapshot.len();
        self.writer.write(&snapshot)?;

        Ok(count)
    }

    /// Run cycles forever with a live countdown between them. Only
    /// external interruption ends this.
    pub async fn run(&self) {
        loop {
            match self.run_cycle() {
                Ok(count) => info!("{} instruments extracted and saved", count),
                Err(e) => error!("Update cycle failed: {}", e),
            }

            self.countdown().await;
        }
    }

    async fn countdown(&self) {
        for remaining in (1..=self.config.update_interval_secs).rev() {
            debug!("Next update in: {} seconds", remaining);
            self.clock.sleep(Duration::from_secs(1)).await;
        }
    }
}
