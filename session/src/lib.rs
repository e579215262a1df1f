//! Bridge session: one UI surface paired with one engine.
//!
//! A session:
//! - Claims its UI surface in the [`SurfaceRegistry`] (one session per surface)
//! - Owns the common and feature command channels plus the event channel
//! - Assembles the engine configuration on `startEngine` and hands it over
//! - Forwards every engine callback onto the outbound event stream
//! - Releases everything, sending `stop` to the subscriber, on detach

pub mod channels;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod session;
pub mod surface;
pub mod tracing_spans;

pub use channels::ChannelNames;
pub use config::HostConfig;
pub use controller::EngineController;
pub use idbridge_commands::HostObserver;
pub use error::SessionError;
pub use logging::{init_logging, LogFormat};
pub use metrics::BridgeMetrics;
pub use session::BridgeSession;
pub use surface::{SurfaceId, SurfaceRegistry};
