//! Client-side error type.

use serde::Deserialize;
use thiserror::Error;

/// Why a user action did not go through.
///
/// `PasswordMismatch` is caught before any request is built; every other
/// variant is a request failure and is treated the same way by the flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not encode form: {0}")]
    Encode(String),
}

impl ClientError {
    /// Builds a status failure, keeping the backend's `err` message if the
    /// body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        ClientError::Status {
            status,
            detail: error_detail(body),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::PasswordMismatch)
    }
}

/// error body written by the site handlers: `{"err": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    err: String,
}

fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.err)
        .filter(|msg| !msg.is_empty())
}
