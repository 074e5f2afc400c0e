use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
