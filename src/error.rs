// Error types for employee-store.
// Covers web API failures, payload decoding, session storage, and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Employee API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: the employee API rejected the request")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid employee record {id}: {reason}")]
    Decode { id: i64, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing EMP_WEBAPI_URL environment variable")]
    MissingBaseUrl,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
