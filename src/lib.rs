pub mod config;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod scheduler;
pub mod scraper;
pub mod utils;
pub mod writer;

// Re-export commonly used types
pub use config::AppConfig;
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
