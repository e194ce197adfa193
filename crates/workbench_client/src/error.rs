//! Error taxonomy for calls against the workbench API.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, or any other transport fault.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered, but the body was not valid JSON.
    #[error("malformed response body (status {status}): {source}")]
    MalformedBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Non-2xx status treated as a failure under `ErrorBodyPolicy::TreatAsFailure`.
    #[error("remote returned {status}")]
    RemoteStatus {
        status: StatusCode,
        body: serde_json::Value,
    },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
