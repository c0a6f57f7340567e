use thiserror::Error;

/// Errors that can occur while talking to the recipe API
#[derive(Error, Debug)]
pub enum FinderError {
    /// Request could not be sent or the body could not be read (includes timeouts)
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// No API key in config file or environment
    #[error("API key not found in config or environment (set RECIPE_FINDER__API_KEY)")]
    MissingApiKey,

    /// Async runtime could not be created or joined
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl FinderError {
    /// True for failures caused by the response rather than the transport
    pub fn is_decode(&self) -> bool {
        matches!(self, FinderError::DecodeError(_))
    }
}
