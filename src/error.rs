//! Error types for the orchestrator client

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Main error type for the orchestrator client and its mock
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Uplet type outside of the allowed set, detected before any request
    #[error("[orchestrator-api] Uplet type \"{value}\" is invalid. Allowed values are {allowed:?}")]
    InvalidUpletType {
        value: String,
        allowed: &'static [&'static str],
    },

    /// Uplet status outside of the allowed set, detected before any request
    #[error("[orchestrator-api] Status \"{value}\" is invalid. Allowed values are {allowed:?}")]
    InvalidStatus {
        value: String,
        allowed: &'static [&'static str],
    },

    /// Status update payload could not be marshaled
    #[error("[orchestrator-api] Error JSON-marshaling status update payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Target URL could not be assembled from the configured host and port
    #[error("[orchestrator-api] Invalid {route} URL {url}: {source}")]
    InvalidUrl {
        route: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request could not be built
    #[error("[orchestrator-api] Error building {route} POST request against {url}: {source}")]
    RequestBuild {
        route: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Connection refused, DNS failure, timeout and other transport errors
    #[error("[orchestrator-api] Error performing {route} POST request against {url}: {source}")]
    Transport {
        route: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The orchestrator answered with anything but 200 OK
    #[error("[orchestrator-api] Unexpected status code ({status}): {route} POST request against {url}")]
    UnexpectedStatus {
        route: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },

    /// Simulated missing uplet, only produced by the mock
    #[error("[orchestrator-mock][{route}] Unexisting uplet {uplet_id}")]
    UpletNotFound { route: &'static str, uplet_id: Uuid },
}

impl OrchestratorError {
    /// True for errors raised by local input validation, before any I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrchestratorError::InvalidUpletType { .. } | OrchestratorError::InvalidStatus { .. }
        )
    }

    /// HTTP status returned by the orchestrator, if the error carries one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            OrchestratorError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
