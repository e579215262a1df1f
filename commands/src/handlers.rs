//! Typed commands and their argument validation.

use idbridge_types::{BridgeError, UserIdentity};
use serde::Serialize;

use crate::{CommandName, InboundCommand};

// ── Argument keys ────────────────────────────────────────────────────────

pub const KEY_CONFIG: &str = "config";
pub const KEY_FIRST_NAME: &str = "firstName";
pub const KEY_LAST_NAME: &str = "lastName";
pub const KEY_CALL_TYPE: &str = "callType";

/// A validated command, ready for the listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Host should get ready to show the verification surface.
    PrepareEngine { config: String },
    /// Assemble the config for this user and start the engine.
    StartEngine(UserIdentity),
    StopEngine,
}

impl Command {
    /// Validate an inbound command. Every required argument must be present;
    /// the first missing key is reported.
    pub fn parse(command: &InboundCommand) -> Result<Self, BridgeError> {
        let args = &command.arguments;
        match command.name()? {
            CommandName::PrepareEngine => Ok(Self::PrepareEngine {
                config: args.require_str(KEY_CONFIG)?.to_string(),
            }),
            CommandName::StartEngine => Ok(Self::StartEngine(UserIdentity::new(
                args.require_str(KEY_FIRST_NAME)?,
                args.require_str(KEY_LAST_NAME)?,
                args.require_str(KEY_CALL_TYPE)?,
            ))),
            CommandName::StopEngine => Ok(Self::StopEngine),
        }
    }

    pub fn name(&self) -> CommandName {
        match self {
            Self::PrepareEngine { .. } => CommandName::PrepareEngine,
            Self::StartEngine(_) => CommandName::StartEngine,
            Self::StopEngine => CommandName::StopEngine,
        }
    }
}

// ── Responses ────────────────────────────────────────────────────────────

/// Body of a successful `prepareEngine` / `startEngine` reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Body of an error reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
