//! Command channel error types.

use idbridge_types::BridgeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("engine rejected setup: {0}")]
    EngineRejected(String),

    #[error("no listener bound to {0}")]
    Unbound(String),

    #[error("engine already running")]
    AlreadyRunning,
}

impl CommandError {
    /// Stable code placed in the error reply.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bridge(e) => e.code(),
            Self::EngineRejected(_) => "ENGINE_REJECTED",
            Self::Unbound(_) => "UNBOUND",
            Self::AlreadyRunning => "ALREADY_RUNNING",
        }
    }
}
