use serde::Deserialize;
use thiserror::Error;

/// Normalized error for every backend call.
///
/// Raw transport errors never leave the API layer; every failure is
/// classified here so call sites and screens see one shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend rejected the request with a structured `{error}` body.
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Server(String),

    /// Request was sent but no usable response arrived.
    #[error("Unable to reach the server - check your connection")]
    Network(#[source] reqwest::Error),

    /// Local failure: response decoding, storage, serialization.
    #[error("Client error: {0}")]
    Client(String),

    /// Form-level input check that never reached the network.
    #[error("{0}")]
    Validation(String),
}

/// Error body shape used by all backend controllers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response. A parsable `{error}` body wins;
    /// anything else degrades to a status-bearing server error.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.error {
                return ApiError::Server(message);
            }
        }
        ApiError::Server(format!("Request failed with status {}", status.as_u16()))
    }

    /// Which leg of the taxonomy this error belongs to, as reported
    /// to screens and logs.
    pub fn cause(&self) -> &'static str {
        match self {
            ApiError::Server(_) => "server",
            ApiError::Network(_) => "network",
            ApiError::Client(_) | ApiError::Validation(_) => "client",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Client(err.to_string())
    }
}

/// Result alias used by every API call site.
pub type ApiResult<T> = Result<T, ApiError>;
