use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Directory listing unreachable: {url}: {reason}")]
    Discovery { url: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Content too large: {size} bytes (max: {max})")]
    ContentTooLarge { size: usize, max: usize },

    #[error("Empty keyword for source URL: {0}")]
    EmptyKeyword(String),

    #[error("Pipeline channel closed before all events were delivered")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, ScoutError>;
