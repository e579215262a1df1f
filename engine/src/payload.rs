//! Payloads carried by engine notifications.
//!
//! The bridge forwards these opaquely; it never interprets them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The single payload an event may carry.
///
/// Serializes untagged: text as a JSON string, a flag as a JSON boolean and
/// structured payloads as an object with a `kind` discriminator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Flag(bool),
    Text(String),
    Structured(StructuredPayload),
}

/// Structured payloads, one variant per payload-bearing callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StructuredPayload {
    Failure(FailureReport),
    #[serde(rename_all = "camelCase")]
    RecorderError {
        code: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    VerifyResult(VerifyCallResult),
    #[serde(rename_all = "camelCase")]
    SessionStart {
        succeeded: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_uid: Option<String>,
    },
    CloseSession {
        status: String,
    },
}

/// Why a verification step failed, as reported by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Step the engine was in, e.g. `"NFC"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Final verification call result.
///
/// Only the reference and status are named; every other field the engine
/// reports is kept verbatim in `fields`, which serializes as its own object
/// so engine keys never collide with `kind`, `referenceId` or `status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCallResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, serde_json::Value>,
}
