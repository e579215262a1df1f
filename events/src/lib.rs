//! Outbound event channel.
//!
//! The engine fires dozens of distinct callbacks; the UI layer sees a single
//! stream of [`OutboundEvent`]s keyed by event name. Delivery is in firing
//! order, at most once, and only to the currently attached subscriber.
//! Events fired while nobody listens are dropped without error.

pub mod channel;
pub mod message;
pub mod subscriber;

pub use channel::{Delivery, EventChannel};
pub use message::{OutboundEvent, STOP_EVENT};
pub use subscriber::{DeliveryObserver, EventSubscriber};
