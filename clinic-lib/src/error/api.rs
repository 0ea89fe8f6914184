//! API error types

/// Errors that can occur during calls to the authentication API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a status other than `200 OK`.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the error body's `message` field, empty if absent.
        message: String,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the message the server put in its error body, if any.
    ///
    /// An empty message counts as absent. Transport failures never carry one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
