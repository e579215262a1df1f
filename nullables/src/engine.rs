//! Nullable engine: record configurations and fire events on demand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use idbridge_engine::{EngineCallback, EngineError, EngineEvent, VerificationEngine};
use idbridge_types::EngineConfig;

/// A test engine that records what the bridge asks of it.
pub struct NullEngine {
    /// Every configuration passed to `initialize`.
    initialized: RefCell<Vec<EngineConfig>>,
    /// Number of `stop` calls.
    stops: Cell<u32>,
    /// When set, `initialize` fails with this reason.
    rejection: RefCell<Option<String>>,
    callback: RefCell<Option<Rc<dyn EngineCallback>>>,
}

impl NullEngine {
    pub fn new() -> Self {
        Self {
            initialized: RefCell::new(Vec::new()),
            stops: Cell::new(0),
            rejection: RefCell::new(None),
            callback: RefCell::new(None),
        }
    }

    /// Make every following `initialize` fail.
    pub fn reject_with(&self, reason: impl Into<String>) {
        *self.rejection.borrow_mut() = Some(reason.into());
    }

    /// Fire one event through the registered callback, as the engine would.
    /// Returns `false` when no callback is registered.
    pub fn fire(&self, event: impl Into<EngineEvent>) -> bool {
        // Clone out so the callback may re-register while handling.
        let callback = self.callback.borrow().clone();
        match callback {
            Some(callback) => {
                callback.on_event(event.into());
                true
            }
            None => false,
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Get all configurations the engine was started with (for assertions).
    pub fn initialized(&self) -> Vec<EngineConfig> {
        self.initialized.borrow().clone()
    }

    pub fn stop_count(&self) -> u32 {
        self.stops.get()
    }

    /// Clear all recorded state.
    pub fn reset(&self) {
        self.initialized.borrow_mut().clear();
        self.stops.set(0);
        self.rejection.borrow_mut().take();
    }
}

impl Default for NullEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationEngine for NullEngine {
    fn name(&self) -> &str {
        "null"
    }

    fn register_callback(&self, callback: Rc<dyn EngineCallback>) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn initialize(&self, config: EngineConfig) -> Result<(), EngineError> {
        if let Some(reason) = self.rejection.borrow().clone() {
            return Err(EngineError::Rejected(reason));
        }
        self.initialized.borrow_mut().push(config);
        Ok(())
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}
