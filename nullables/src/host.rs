//! Nullable host: record `prepareEngine` hand-offs.

use std::cell::RefCell;

use idbridge_commands::HostObserver;

/// Stand-in for the host application behind the common channel.
#[derive(Default)]
pub struct NullHost {
    prepared: RefCell<Vec<String>>,
}

impl NullHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every config string received, oldest first.
    pub fn prepared(&self) -> Vec<String> {
        self.prepared.borrow().clone()
    }
}

impl HostObserver for NullHost {
    fn on_engine_prepared(&self, config: &str) {
        self.prepared.borrow_mut().push(config.to_string());
    }
}
