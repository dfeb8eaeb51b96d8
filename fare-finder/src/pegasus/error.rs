//! Pegasus client error types.

use std::fmt;

/// Errors from the Pegasus HTTP client.
#[derive(Debug)]
pub enum PegasusError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,
}

impl fmt::Display for PegasusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegasusError::Http(e) => write!(f, "HTTP error: {e}"),
            PegasusError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PegasusError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            PegasusError::RateLimited => write!(f, "rate limited by availability API"),
        }
    }
}

impl std::error::Error for PegasusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PegasusError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PegasusError {
    fn from(err: reqwest::Error) -> Self {
        PegasusError::Http(err)
    }
}

impl PegasusError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures are transient; API rejections and malformed
    /// bodies are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, PegasusError::Http(_))
    }
}
