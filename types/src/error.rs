//! Top-level error type shared across crates.

use thiserror::Error;

/// Error taxonomy for the bridge.
///
/// Argument and command errors are answered on the command's result channel;
/// configuration errors abort assembly before the engine is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    #[error("argument {key} must be {expected}")]
    InvalidArgument { key: String, expected: &'static str },

    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("incomplete configuration: {0} was never supplied")]
    IncompleteConfig(&'static str),

    #[error("unknown deployment tier: {0}")]
    UnknownTier(String),
}

impl BridgeError {
    /// Stable code used in error replies to the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument(_) => "MISSING_ARGUMENT",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::UnsupportedCommand(_) => "UNSUPPORTED_COMMAND",
            Self::IncompleteConfig(_) => "INCOMPLETE_CONFIG",
            Self::UnknownTier(_) => "UNKNOWN_TIER",
        }
    }

    /// Whether this error originates from configuration rather than from a
    /// malformed command.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::IncompleteConfig(_) | Self::UnknownTier(_))
    }
}
