use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub scraper: ScraperConfig,
    pub loader: LoaderConfig,
    pub output: OutputConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub chrome_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub target_url: String,
    pub initial_render_secs: u64,
    pub element_wait_secs: u64,
    pub scroll_settle_secs: u64,
    pub post_click_render_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub update_interval_secs: u64,
}

impl AppConfig {
    /// Load configuration: built-in defaults, then optional config files,
    /// then `FUTURES_`-prefixed environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default(
                "scraper.user_agent",
                "Mozilla/5.0 (X11; Linux x86_64) FuturesWatch/0.1",
            )?
            .set_default(
                "loader.target_url",
                "https://www.tradingview.com/markets/futures/quotes-all/",
            )?
            .set_default("loader.initial_render_secs", 5_i64)?
            .set_default("loader.element_wait_secs", 10_i64)?
            .set_default("loader.scroll_settle_secs", 2_i64)?
            .set_default("loader.post_click_render_secs", 5_i64)?
            .set_default("output.path", "futures_prices.txt")?
            .set_default("scheduler.update_interval_secs", 60_i64)?
            // Optional config files override defaults
            .add_source(File::with_name("config/default").required(false))
            // Local config (ignored by git)
            .add_source(File::with_name("config/local").required(false))
            // Environment variables with prefix "FUTURES_"
            .add_source(Environment::with_prefix("FUTURES").separator("__"))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;

        // Chrome path from environment if not set via config
        if config.scraper.chrome_path.is_none() {
            config.scraper.chrome_path = env::var("CHROME_PATH").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.loader.target_url).is_err() {
            return Err(ConfigError::Message("Invalid target URL format".into()));
        }

        if self.loader.element_wait_secs == 0 {
            return Err(ConfigError::Message(
                "Loader element_wait_secs must be greater than 0".into(),
            ));
        }

        if self.output.path.trim().is_empty() {
            return Err(ConfigError::Message("Output path must not be empty".into()));
        }

        if self.scheduler.update_interval_secs == 0 {
            return Err(ConfigError::Message(
                "Scheduler update_interval_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
