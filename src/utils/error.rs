use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parse { message: String },

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
