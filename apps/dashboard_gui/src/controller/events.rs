//! Events flowing from the backend bridge to the UI, and error modeling.

use workbench_client::{ApiResponse, ClientError, RequestSeq};

/// Screens that issue workbench requests. Home only links to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Research,
    Brief,
    Generate,
}

impl ScreenId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Research => "Keyword Research",
            Self::Brief => "Content Brief",
            Self::Generate => "Generate Article",
        }
    }
}

pub enum UiEvent {
    BridgeReady,
    BridgeFailed(String),
    RequestFinished {
        screen: ScreenId,
        seq: RequestSeq,
        outcome: Result<ApiResponse, UiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Remote,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Decode => "Response",
            Self::Remote => "Service",
            Self::Unknown => "Unexpected",
        }
    }
}

/// Displayable request failure. Rendered as a dismissible banner, never a
/// stuck loading indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn new(category: UiErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ClientError> for UiError {
    fn from(err: ClientError) -> Self {
        let category = match &err {
            ClientError::Transport(_) => UiErrorCategory::Transport,
            ClientError::MalformedBody { .. } => UiErrorCategory::Decode,
            ClientError::RemoteStatus { .. } => UiErrorCategory::Remote,
        };
        Self::new(category, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use workbench_client::StatusCode;

    #[test]
    fn classifies_malformed_body_as_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = UiError::from(ClientError::MalformedBody {
            status: StatusCode::BAD_GATEWAY,
            source: parse_err,
        });
        assert_eq!(err.category(), UiErrorCategory::Decode);
        assert!(err.message().contains("502"));
    }

    #[test]
    fn classifies_remote_status_as_remote() {
        let err = UiError::from(ClientError::RemoteStatus {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({"detail": "bad seeds"}),
        });
        assert_eq!(err.category(), UiErrorCategory::Remote);
    }
}
