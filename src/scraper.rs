use anyhow::{anyhow, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;

use crate::config::ScraperConfig;

/// Anything that can hand over the current document as an HTML string.
///
/// The extractor and update loop only see this trait, so tests can swap in
/// a fixture document and the volatile browser plumbing stays contained
/// here.
pub trait PageSource {
    fn content(&self) -> Result<String>;
}

/// An exclusively owned headless Chrome instance with a single tab.
///
/// The pipeline is strictly sequential, so one browser and one tab are all
/// it ever needs. Dropping the session closes the Chrome child process.
pub struct BrowserSession {
    // Held for its Drop impl; all interaction goes through the tab.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false) // Often needed in containerized environments
            .args(vec![
                std::ffi::OsStr::new("--no-sandbox"),
                std::ffi::OsStr::new("--disable-dev-shm-usage"),
                std::ffi::OsStr::new("--disable-gpu"),
                std::ffi::OsStr::new("--disable-extensions"),
            ])
            .build()
            .map_err(|e| anyhow!("Failed to create launch options: {}", e))?;

        if let Some(chrome_path) = &config.chrome_path {
            launch_options.path = Some(std::path::PathBuf::from(chrome_path));
        }

        let browser = Browser::new(launch_options)
            .map_err(|e| anyhow!("Failed to launch browser: {}", e))?;

        let tab = browser
            .new_tab()
            .map_err(|e| anyhow!("Failed to create tab: {}", e))?;

        tab.set_user_agent(&config.user_agent, None, None)
            .map_err(|e| anyhow!("Failed to set user agent: {}", e))?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| anyhow!("Navigation to {} failed: {}", url, e))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| anyhow!("Page load failed: {}", e))?;
        Ok(())
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }
}

impl PageSource for BrowserSession {
    fn content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(|e| anyhow!("Failed to get page content: {}", e))
    }
}
