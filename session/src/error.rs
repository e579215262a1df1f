use idbridge_types::BridgeError;
use thiserror::Error;

use crate::SurfaceId;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("config error: {0}")]
    Config(String),

    #[error("surface {0} already has an active session")]
    SurfaceAlreadyAttached(SurfaceId),

    #[error("surface {0} has no active session")]
    SurfaceNotAttached(SurfaceId),

    #[error("no such channel: {0}")]
    UnknownChannel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
