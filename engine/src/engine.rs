//! The engine's synchronous setup API and asynchronous callback surface.

use std::rc::Rc;

use idbridge_types::EngineConfig;

use crate::{EngineError, EngineEvent};

/// The embedded verification engine, seen from the bridge.
///
/// Implementations are driven from the UI thread only; none of the methods
/// may block. Slow work happens inside the engine, which reports progress
/// through the registered [`EngineCallback`].
pub trait VerificationEngine {
    /// Human-readable name of the engine implementation.
    fn name(&self) -> &str;

    /// Register the sink that receives every notification.
    ///
    /// Replaces any previously registered sink.
    fn register_callback(&self, callback: Rc<dyn EngineCallback>);

    /// Apply a complete configuration and start a verification session.
    fn initialize(&self, config: EngineConfig) -> Result<(), EngineError>;

    /// Tear down the running session. Advisory: the engine finishes its own
    /// teardown and may still fire events afterwards.
    fn stop(&self);
}

/// Receives engine notifications.
///
/// The engine's dozens of callbacks are collapsed onto this single method;
/// the [`EventKind`](crate::EventKind) inside the event names which callback
/// fired.
pub trait EngineCallback {
    fn on_event(&self, event: EngineEvent);
}
