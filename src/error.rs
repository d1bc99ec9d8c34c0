use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while looking up a cocktail
///
/// These never leave the view: [`crate::RecipeLookupView`] turns them into
/// the user-visible error message.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The name search matched no drinks
    #[error("Cocktail not found.")]
    NotFound,

    /// The service answered with a non-success status
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: &'static str,
    },

    /// The request could not be sent or the body could not be read
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The service answered, but not with a usable drinks payload
    #[error("{0}")]
    Malformed(String),
}

impl LookupError {
    /// Message shown to the user, falling back when the error has no text of its own
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Errors that can occur while setting up the finder
#[derive(Error, Debug)]
pub enum FinderError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to build the HTTP client
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Invalid base URL for the cocktail service
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Terminal input/output error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
