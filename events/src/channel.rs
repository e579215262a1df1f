//! The event channel: one subscriber slot and in-order delivery.
//!
//! All access happens on the UI thread, so the subscriber slot is a
//! `RefCell` rather than a lock. Each delivery works on a snapshot of the
//! slot taken under a short borrow; a subscriber that re-enters the channel
//! from inside `deliver` (cancelling, or causing the engine to fire again)
//! therefore never observes a half-finished swap. Events published during a
//! delivery are queued and drained afterwards, which keeps firing order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use idbridge_engine::{EngineCallback, EngineEvent};
use tracing::{debug, info, trace};

use crate::{DeliveryObserver, EventSubscriber, OutboundEvent};

/// What happened to a published event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Published from inside another delivery; handed over once it returns.
    Queued,
    /// No subscriber was attached.
    Dropped,
}

pub struct EventChannel {
    name: String,
    subscriber: RefCell<Option<Rc<dyn EventSubscriber>>>,
    observer: RefCell<Option<Rc<dyn DeliveryObserver>>>,
    delivering: Cell<bool>,
    pending: RefCell<VecDeque<OutboundEvent>>,
}

impl EventChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscriber: RefCell::new(None),
            observer: RefCell::new(None),
            delivering: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_observer(&self, observer: Rc<dyn DeliveryObserver>) {
        *self.observer.borrow_mut() = Some(observer);
    }

    pub fn is_listening(&self) -> bool {
        self.subscriber.borrow().is_some()
    }

    /// Bind the subscriber. A previously bound subscriber is cancelled
    /// first and receives its `stop`.
    pub fn listen(&self, subscriber: Rc<dyn EventSubscriber>) {
        if self.is_listening() {
            self.cancel();
        }
        *self.subscriber.borrow_mut() = Some(subscriber);
        info!(channel = %self.name, "event subscriber attached");
    }

    /// Unbind the subscriber, sending it the terminal `stop` message.
    /// Does nothing when nobody is listening.
    pub fn cancel(&self) {
        let previous = self.subscriber.borrow_mut().take();
        if let Some(subscriber) = previous {
            subscriber.deliver(&OutboundEvent::stop());
            info!(channel = %self.name, "event subscriber detached");
        }
    }

    /// Forward one engine event.
    pub fn publish(&self, event: impl Into<OutboundEvent>) -> Delivery {
        let event = event.into();
        if self.delivering.get() {
            self.pending.borrow_mut().push_back(event);
            return Delivery::Queued;
        }

        self.delivering.set(true);
        let outcome = self.deliver_one(event);
        loop {
            // Release the queue borrow before delivering; delivery may push.
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(queued) => {
                    self.deliver_one(queued);
                }
                None => break,
            }
        }
        self.delivering.set(false);
        outcome
    }

    fn deliver_one(&self, event: OutboundEvent) -> Delivery {
        let subscriber = self.subscriber.borrow().clone();
        let observer = self.observer.borrow().clone();
        match subscriber {
            Some(subscriber) => {
                debug!(channel = %self.name, event = %event.event_name, "forwarding event");
                subscriber.deliver(&event);
                if let Some(observer) = observer {
                    observer.delivered(&event.event_name);
                }
                Delivery::Delivered
            }
            None => {
                trace!(channel = %self.name, event = %event.event_name, "no subscriber, event dropped");
                if let Some(observer) = observer {
                    observer.dropped(&event.event_name);
                }
                Delivery::Dropped
            }
        }
    }
}

impl EngineCallback for EventChannel {
    fn on_event(&self, event: EngineEvent) {
        self.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbridge_engine::{EventKind, VerifyCallResult};

    #[derive(Default)]
    struct Collect {
        seen: RefCell<Vec<OutboundEvent>>,
    }

    impl Collect {
        fn names(&self) -> Vec<String> {
            self.seen
                .borrow()
                .iter()
                .map(|e| e.event_name.clone())
                .collect()
        }
    }

    impl EventSubscriber for Collect {
        fn deliver(&self, event: &OutboundEvent) {
            self.seen.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn delivers_in_firing_order_with_payloads() {
        let channel = EventChannel::new("app/verify/events");
        let sub = Rc::new(Collect::default());
        channel.listen(sub.clone());

        channel.on_event(EngineEvent::new(EventKind::IdVerifyReady));
        channel.on_event(EngineEvent::new(EventKind::IdDocCompleted));
        channel.on_event(EngineEvent::result_received(VerifyCallResult {
            reference_id: Some("ref-1".into()),
            ..Default::default()
        }));

        assert_eq!(
            sub.names(),
            vec!["idVerifyReady", "idDocCompleted", "resultGetSucceeded"]
        );
        assert!(sub.seen.borrow()[2].payload.is_some());
    }

    #[test]
    fn cancel_sends_stop_then_unbinds() {
        let channel = EventChannel::new("app/verify/events");
        let sub = Rc::new(Collect::default());
        channel.listen(sub.clone());
        channel.publish(EngineEvent::new(EventKind::FaceReady));
        channel.cancel();

        assert_eq!(sub.names(), vec!["faceReady", "stop"]);
        assert!(!channel.is_listening());
        assert_eq!(
            channel.publish(EngineEvent::new(EventKind::FaceDetected)),
            Delivery::Dropped
        );
        assert_eq!(sub.names().len(), 2);
    }

    #[test]
    fn no_subscriber_drops_silently() {
        let channel = EventChannel::new("app/verify/events");
        assert_eq!(
            channel.publish(EngineEvent::new(EventKind::CallWait)),
            Delivery::Dropped
        );
        channel.cancel();
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let channel = EventChannel::new("app/verify/events");
        channel.publish(EngineEvent::new(EventKind::VideoCallReady));
        let sub = Rc::new(Collect::default());
        channel.listen(sub.clone());
        channel.publish(EngineEvent::new(EventKind::CallStarted));
        assert_eq!(sub.names(), vec!["callStarted"]);
    }

    #[test]
    fn rebinding_stops_the_previous_subscriber() {
        let channel = EventChannel::new("app/verify/events");
        let first = Rc::new(Collect::default());
        let second = Rc::new(Collect::default());
        channel.listen(first.clone());
        channel.listen(second.clone());
        channel.publish(EngineEvent::new(EventKind::NfcReady));

        assert_eq!(first.names(), vec!["stop"]);
        assert_eq!(second.names(), vec!["nfcReady"]);
    }

    struct Reentrant {
        channel: Rc<EventChannel>,
        seen: RefCell<Vec<String>>,
    }

    impl EventSubscriber for Reentrant {
        fn deliver(&self, event: &OutboundEvent) {
            self.seen.borrow_mut().push(event.event_name.clone());
            if event.event_name == "faceDetected" {
                self.channel.publish(EngineEvent::new(EventKind::SmileDetected));
            }
        }
    }

    #[test]
    fn events_fired_during_delivery_keep_order() {
        let channel = Rc::new(EventChannel::new("app/verify/events"));
        let sub = Rc::new(Reentrant {
            channel: channel.clone(),
            seen: RefCell::new(Vec::new()),
        });
        channel.listen(sub.clone());

        channel.publish(EngineEvent::new(EventKind::FaceDetected));
        channel.publish(EngineEvent::new(EventKind::FaceCompleted));

        assert_eq!(
            *sub.seen.borrow(),
            vec!["faceDetected", "smileDetected", "faceCompleted"]
        );
        // Break the Rc cycle between channel and subscriber.
        channel.cancel();
    }

    #[derive(Default)]
    struct Tally {
        delivered: Cell<u32>,
        dropped: Cell<u32>,
    }

    impl DeliveryObserver for Tally {
        fn delivered(&self, _event_name: &str) {
            self.delivered.set(self.delivered.get() + 1);
        }

        fn dropped(&self, _event_name: &str) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn observer_sees_delivered_and_dropped() {
        let channel = EventChannel::new("app/verify/events");
        let tally = Rc::new(Tally::default());
        channel.set_observer(tally.clone());

        channel.publish(EngineEvent::new(EventKind::IdRetry));
        channel.listen(Rc::new(Collect::default()));
        channel.publish(EngineEvent::new(EventKind::IdRetry));
        channel.publish(EngineEvent::new(EventKind::NfcRetry));

        assert_eq!(tally.dropped.get(), 1);
        assert_eq!(tally.delivered.get(), 2);
    }
}
