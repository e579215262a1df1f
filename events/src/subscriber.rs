//! The consuming end of the outbound stream.

use crate::OutboundEvent;

/// The single UI-side consumer of the event stream.
pub trait EventSubscriber {
    fn deliver(&self, event: &OutboundEvent);
}

/// Told about every event the channel handles, delivered or not.
pub trait DeliveryObserver {
    fn delivered(&self, event_name: &str);
    fn dropped(&self, event_name: &str);
}
