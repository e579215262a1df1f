//! Network endpoints of one deployment tier.

use serde::{Deserialize, Serialize};

/// The endpoints the engine connects to for a given tier.
///
/// Produced by the environment catalog; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    /// Verification API host.
    pub domain_host: String,
    /// TURN relay `host:port`.
    pub turn_address: String,
    /// STUN `host:port`.
    pub stun_address: String,
    /// Signaling endpoint, already resolved for the media-server flag.
    pub signaling_host: String,
    /// Back-office REST base URL.
    pub backoffice_base_url: String,
}

impl EnvironmentProfile {
    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("domainHost", &self.domain_host),
            ("turnAddress", &self.turn_address),
            ("stunAddress", &self.stun_address),
            ("signalingHost", &self.signaling_host),
            ("backofficeBaseUrl", &self.backoffice_base_url),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        missing
    }
}
