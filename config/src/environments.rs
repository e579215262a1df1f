//! Static endpoint table, one row per deployment tier.

use idbridge_types::{BridgeError, DeploymentTier, EnvironmentProfile};

/// One catalog row. Both signaling variants are precomputed; the
/// media-server flag picks one at lookup time.
#[derive(Debug)]
struct TierEndpoints {
    tier: DeploymentTier,
    domain_host: &'static str,
    turn_address: &'static str,
    stun_address: &'static str,
    signaling_host: &'static str,
    signaling_host_ms: &'static str,
    backoffice_base_url: &'static str,
}

const ENDPOINTS: &[TierEndpoints] = &[
    TierEndpoints {
        tier: DeploymentTier::Test,
        domain_host: "verify-test.idbridge.example",
        turn_address: "turn-test.idbridge.example:3478",
        stun_address: "stun-test.idbridge.example:3478",
        signaling_host: "wss://signal-test.idbridge.example",
        signaling_host_ms: "wss://signal-test-ms.idbridge.example",
        backoffice_base_url: "https://backoffice-test.idbridge.example/api",
    },
    TierEndpoints {
        tier: DeploymentTier::Preprod,
        domain_host: "verify-preprod.idbridge.example",
        turn_address: "turn-preprod.idbridge.example:3478",
        stun_address: "stun-preprod.idbridge.example:3478",
        signaling_host: "wss://signal-preprod.idbridge.example",
        signaling_host_ms: "wss://signal-preprod-ms.idbridge.example",
        backoffice_base_url: "https://backoffice-preprod.idbridge.example/api",
    },
    TierEndpoints {
        tier: DeploymentTier::Pilot,
        domain_host: "verify-pilot.idbridge.example",
        turn_address: "turn-pilot.idbridge.example:3478",
        stun_address: "stun-pilot.idbridge.example:3478",
        signaling_host: "wss://signal-pilot.idbridge.example",
        signaling_host_ms: "wss://signal-pilot-ms.idbridge.example",
        backoffice_base_url: "https://backoffice-pilot.idbridge.example/api",
    },
    TierEndpoints {
        tier: DeploymentTier::Prod,
        domain_host: "verify.idbridge.example",
        turn_address: "turn.idbridge.example:443",
        stun_address: "stun.idbridge.example:443",
        signaling_host: "wss://signal.idbridge.example",
        signaling_host_ms: "wss://signal-ms.idbridge.example",
        backoffice_base_url: "https://backoffice.idbridge.example/api",
    },
];

/// Maps a tier to its network endpoints.
pub struct EnvironmentCatalog;

impl EnvironmentCatalog {
    /// Resolve the endpoint profile for `tier`.
    ///
    /// `media_server_closed` selects the plain signaling host; otherwise the
    /// media-server (`-ms`) variant is used. A tier without a catalog row is
    /// reported as [`BridgeError::UnknownTier`] rather than defaulted.
    pub fn lookup(
        tier: DeploymentTier,
        media_server_closed: bool,
    ) -> Result<EnvironmentProfile, BridgeError> {
        let row = ENDPOINTS
            .iter()
            .find(|row| row.tier == tier)
            .ok_or_else(|| BridgeError::UnknownTier(tier.to_string()))?;

        let signaling_host = if media_server_closed {
            row.signaling_host
        } else {
            row.signaling_host_ms
        };

        Ok(EnvironmentProfile {
            domain_host: row.domain_host.to_string(),
            turn_address: row.turn_address.to_string(),
            stun_address: row.stun_address.to_string(),
            signaling_host: signaling_host.to_string(),
            backoffice_base_url: row.backoffice_base_url.to_string(),
        })
    }
}
