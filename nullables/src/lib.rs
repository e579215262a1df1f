//! Nullable infrastructure for deterministic testing.
//!
//! The engine and the UI side of the bridge are abstracted behind traits.
//! This crate provides test-friendly implementations that:
//! - Record every call for later assertions
//! - Can be driven programmatically (fire an engine event on demand)
//! - Never spawn threads or touch the device
//!
//! Usage: hand these to a session in place of the real engine and UI.

pub mod engine;
pub mod host;
pub mod subscriber;

pub use engine::NullEngine;
pub use host::NullHost;
pub use subscriber::RecordingSubscriber;
