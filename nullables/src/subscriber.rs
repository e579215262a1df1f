//! Nullable UI subscriber: record every outbound event.

use std::cell::RefCell;

use idbridge_events::{EventSubscriber, OutboundEvent};

#[derive(Default)]
pub struct RecordingSubscriber {
    received: RefCell<Vec<OutboundEvent>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, in delivery order.
    pub fn received(&self) -> Vec<OutboundEvent> {
        self.received.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.received
            .borrow()
            .iter()
            .map(|event| event.event_name.clone())
            .collect()
    }

    /// True once the terminal `stop` has arrived.
    pub fn stopped(&self) -> bool {
        self.received.borrow().iter().any(OutboundEvent::is_stop)
    }
}

impl EventSubscriber for RecordingSubscriber {
    fn deliver(&self, event: &OutboundEvent) {
        self.received.borrow_mut().push(event.clone());
    }
}
