// ============================================================================
// ERROR TYPES
// One enum per concern: configuration, token acquisition, response checks
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} is empty")]
    EmptyVar(&'static str),

    #[error("invalid base url in {var}: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Failure of one step of the token handshake.
///
/// Every variant is terminal: nothing is retried and no partial credentials
/// survive the failed call.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{step}: request failed: {source}")]
    Transport {
        step: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{step}: unexpected status {status}")]
    UnexpectedStatus {
        step: &'static str,
        status: StatusCode,
    },

    #[error("{step}: no tmdb.session cookie in response")]
    MissingCookie { step: &'static str },

    #[error("{step}: response has no `{field}` field")]
    MissingField {
        step: &'static str,
        field: &'static str,
    },

    #[error("access token is not a valid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ExpectationError {
    #[error("expected status {expected}, got {actual} (body: {body})")]
    Status {
        expected: u16,
        actual: u16,
        body: serde_json::Value,
    },

    #[error("json mismatch at `{path}`: expected {expected}, got {actual}")]
    Mismatch {
        path: String,
        expected: serde_json::Value,
        actual: serde_json::Value,
    },

    #[error("json path `{0}` not found in response")]
    MissingPath(String),

    #[error("json value at `{path}` is not {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },
}

pub type AuthResult<T> = Result<T, AuthError>;
