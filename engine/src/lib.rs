//! Contract of the embedded identity-verification engine.
//!
//! The engine itself is a black box. This crate models only the shape of
//! its configuration entry point and of its callback surface:
//! - [`VerificationEngine`]: setup, start and stop
//! - [`EngineCallback`]: a single event sink replacing one handler per callback
//! - [`EventKind`] / [`EngineEvent`]: the tagged notification
//! - [`EventPayload`]: the optional string, flag or structured payload

pub mod engine;
pub mod error;
pub mod event;
pub mod payload;

pub use engine::{EngineCallback, VerificationEngine};
pub use error::EngineError;
pub use event::{EngineEvent, EventKind};
pub use payload::{EventPayload, FailureReport, StructuredPayload, VerifyCallResult};
