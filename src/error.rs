use thiserror::Error;

/// Validation message shown when the shopper submits nothing.
pub const EMPTY_PREFERENCE_MESSAGE: &str = "Tell us a budget, category, or what you care about.";

/// Errors that can occur while loading a catalog or producing recommendations
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Failed to reach the completion endpoint
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion endpoint answered with a non-success status
    #[error("OpenAI error {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// The completion endpoint answered with something that is not JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog data is unusable
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Preference text was empty or whitespace
    #[error("{}", EMPTY_PREFERENCE_MESSAGE)]
    EmptyPreference,

    /// A submission is already in flight
    #[error("A recommendation request is already in progress")]
    Busy,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
