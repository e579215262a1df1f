//! Messages on the outbound stream.

use idbridge_engine::{EngineEvent, EventPayload};
use serde::{Deserialize, Serialize};

/// Name of the terminal message sent when the subscriber cancels.
pub const STOP_EVENT: &str = "stop";

/// One message to the UI layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEvent {
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EventPayload>,
}

impl OutboundEvent {
    pub fn stop() -> Self {
        Self {
            event_name: STOP_EVENT.to_string(),
            payload: None,
        }
    }

    pub fn is_stop(&self) -> bool {
        self.event_name == STOP_EVENT
    }

    /// Serialize for a text transport.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"eventName\":{:?}}}", self.event_name)
        })
    }
}

impl From<EngineEvent> for OutboundEvent {
    fn from(event: EngineEvent) -> Self {
        let (kind, payload) = event.into_parts();
        Self {
            event_name: kind.as_str().to_string(),
            payload,
        }
    }
}
