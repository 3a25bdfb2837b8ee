use anyhow::{anyhow, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::scheduler::Clock;
use crate::scraper::BrowserSession;

/// How the pagination phase ended.
///
/// `Complete` means the Load More control was genuinely absent on a
/// presence check; `Aborted` means a wait, scroll or click step failed.
/// Both leave whatever rows have accumulated in the DOM, so the polling
/// phase proceeds either way, but the two outcomes are kept apart in logs
/// and in this return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Complete { clicks: u32 },
    Aborted { clicks: u32, reason: String },
}

impl LoadOutcome {
    pub fn clicks(&self) -> u32 {
        match self {
            LoadOutcome::Complete { clicks } => *clicks,
            LoadOutcome::Aborted { clicks, .. } => *clicks,
        }
    }
}

/// Expands the paginated table by clicking "Load More" until the control
/// disappears from the document.
pub struct PageLoader {
    config: LoaderConfig,
    load_more_xpath: String,
}

impl PageLoader {
    pub fn new(config: LoaderConfig, load_more_xpath: String) -> Self {
        Self {
            config,
            load_more_xpath,
        }
    }

    /// Navigate to the target page and click Load More until it is gone.
    ///
    /// A navigation failure is an error; everything after that resolves to
    /// a `LoadOutcome`.
    pub async fn load(&self, session: &BrowserSession, clock: &impl Clock) -> Result<LoadOutcome> {
        info!("Loading {}", self.config.target_url);
        session.navigate(&self.config.target_url)?;
        clock
            .sleep(Duration::from_secs(self.config.initial_render_secs))
            .await;

        let mut clicks = 0u32;
        loop {
            // Presence check: the control being gone is the normal end.
            if session
                .tab()
                .find_element_by_xpath(&self.load_more_xpath)
                .is_err()
            {
                info!("No more 'Load More' control found, all data loaded");
                return Ok(LoadOutcome::Complete { clicks });
            }

            match self.click_load_more(session, clock).await {
                Ok(()) => {
                    clicks += 1;
                    info!("Clicked 'Load More' ({} so far)", clicks);
                }
                Err(e) => {
                    warn!("Pagination aborted after {} clicks: {}", clicks, e);
                    return Ok(LoadOutcome::Aborted {
                        clicks,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    async fn click_load_more(&self, session: &BrowserSession, clock: &impl Clock) -> Result<()> {
        let element = session
            .tab()
            .wait_for_xpath_with_custom_timeout(
                &self.load_more_xpath,
                Duration::from_secs(self.config.element_wait_secs),
            )
            .map_err(|e| anyhow!("Wait for 'Load More' failed: {}", e))?;

        element
            .scroll_into_view()
            .map_err(|e| anyhow!("Scroll to 'Load More' failed: {}", e))?;
        clock
            .sleep(Duration::from_secs(self.config.scroll_settle_secs))
            .await;

        element
            .click()
            .map_err(|e| anyhow!("Click on 'Load More' failed: {}", e))?;

        // Let the appended rows render before re-checking the control.
        clock
            .sleep(Duration::from_secs(self.config.post_click_render_secs))
            .await;

        Ok(())
    }
}
