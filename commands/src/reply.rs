//! Replies sent back on the command's result channel.

use serde::Serialize;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::CommandError;

/// The answer to one method call. The UI never gets silence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CommandReply {
    /// `{"status":"success","success":true}`
    Success(SuccessResponse),
    /// Fire-and-forget acknowledgement with no result body.
    Empty,
    /// `{"status":"error","code":...,"message":...}`
    Error(ErrorResponse),
    /// The method is not handled on this channel.
    NotImplemented,
}

impl CommandReply {
    pub fn success() -> Self {
        Self::Success(SuccessResponse { success: true })
    }

    pub fn error(err: &CommandError) -> Self {
        Self::Error(ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(SuccessResponse { success: true }) | Self::Empty)
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Empty => "empty",
            Self::Error(_) => "error",
            Self::NotImplemented => "not_implemented",
        }
    }

    /// Error code, if this is an error reply.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error(body) => Some(&body.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbridge_types::BridgeError;
    use serde_json::json;

    #[test]
    fn success_wire_shape() {
        assert_eq!(
            serde_json::to_value(CommandReply::success()).unwrap(),
            json!({"status": "success", "success": true})
        );
    }

    #[test]
    fn error_wire_shape() {
        let err = CommandError::from(BridgeError::MissingArgument("callType".into()));
        assert_eq!(
            serde_json::to_value(CommandReply::error(&err)).unwrap(),
            json!({
                "status": "error",
                "code": "MISSING_ARGUMENT",
                "message": "missing required argument: callType"
            })
        );
    }

    #[test]
    fn not_implemented_wire_shape() {
        assert_eq!(
            serde_json::to_value(CommandReply::NotImplemented).unwrap(),
            json!({"status": "notImplemented"})
        );
    }

    #[test]
    fn empty_counts_as_success() {
        assert!(CommandReply::Empty.is_success());
        assert!(!CommandReply::NotImplemented.is_success());
    }
}
