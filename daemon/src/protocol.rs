//! JSON-lines protocol between the host shell and the UI process.
//!
//! Inbound, one object per line on stdin:
//! `{"type":"invoke","channel":"...","method":"startEngine","arguments":{...}}`,
//! `{"type":"listen","channel":"..."}`, `{"type":"cancel","channel":"..."}`,
//! `{"type":"detach"}`.
//!
//! Outbound, one object per line on stdout: replies, events and errors.

use std::io::Write;

use idbridge_commands::{CommandReply, InboundCommand};
use idbridge_events::{EventSubscriber, OutboundEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    Invoke {
        channel: String,
        #[serde(flatten)]
        command: InboundCommand,
    },
    Listen {
        channel: String,
    },
    Cancel {
        channel: String,
    },
    Detach,
}

impl HostMessage {
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostOutput<'a> {
    Reply {
        channel: &'a str,
        method: &'a str,
        reply: &'a CommandReply,
    },
    Event {
        channel: &'a str,
        event: &'a OutboundEvent,
    },
    Error {
        message: String,
    },
}

/// Write one message as a line on stdout.
pub fn emit(output: &HostOutput<'_>) {
    let line = match serde_json::to_string(output) {
        Ok(line) => line,
        Err(e) => {
            tracing::error!("failed to encode host output: {e}");
            return;
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{line}").and_then(|_| stdout.flush()) {
        tracing::warn!("failed to write to stdout: {e}");
    }
}

/// Event subscriber that prints every event for the UI process.
pub struct StdoutSubscriber {
    channel: String,
}

impl StdoutSubscriber {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl EventSubscriber for StdoutSubscriber {
    fn deliver(&self, event: &OutboundEvent) {
        emit(&HostOutput::Event {
            channel: &self.channel,
            event,
        });
    }
}
