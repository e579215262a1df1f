use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine rejected configuration: {0}")]
    Rejected(String),

    #[error("engine session already running")]
    AlreadyRunning,

    #[error("unknown engine event: {0}")]
    UnknownEvent(String),
}
