//! Error types for the nimbus client

use thiserror::Error;

/// Errors that can occur when using the nimbus client
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// API returned an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// No API key was configured
    #[error("no API key configured (set NIMBUS_API_KEY or api_key in the config file)")]
    MissingApiKey,

    /// No Kubernetes cluster matched the search term
    #[error("unable to find Kubernetes cluster {0}")]
    ClusterNotFound(String),

    /// More than one Kubernetes cluster matched the search term
    #[error("unable to find Kubernetes cluster {search}: {matches} clusters match")]
    AmbiguousCluster {
        /// Search term given by the user
        search: String,
        /// Number of clusters that matched
        matches: usize,
    },
}

impl ClientError {
    /// Check if the API could not be reached or rejected our credentials
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            ClientError::Http(err) => err.is_connect() || err.is_timeout(),
            ClientError::Api { status, .. } => matches!(status, 401 | 403),
            ClientError::MissingApiKey => true,
            _ => false,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
