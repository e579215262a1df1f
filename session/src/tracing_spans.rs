//! Pre-built [`tracing::Span`] constructors for bridge operations.
//!
//! Consistent span names and fields make command and event traffic easy to
//! filter in aggregated logs.

use tracing::{debug_span, info_span, Span};

use crate::SurfaceId;

/// Span covering the whole life of one bridge session.
pub fn session_span(surface: SurfaceId) -> Span {
    info_span!("bridge_session", surface = %surface)
}

/// Span covering dispatch of one inbound method call.
pub fn command_span(channel: &str, method: &str) -> Span {
    info_span!("command", channel = %channel, method = %method)
}

/// Span covering the forwarding of one engine event.
pub fn event_span(event_name: &str) -> Span {
    debug_span!("engine_event", event = %event_name)
}
