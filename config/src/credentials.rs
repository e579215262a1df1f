//! Static credential table.
//!
//! test, preprod and pilot authenticate with one shared non-production
//! bundle; prod has its own. A tier that is not listed fails the lookup.

use idbridge_types::{BridgeError, Credential, DeploymentTier, Secret};

#[derive(Debug)]
struct CredentialBundle {
    credential_name: &'static str,
    credential_password: &'static str,
    turn_username: &'static str,
    turn_password: &'static str,
    private_key: Option<&'static str>,
}

static NON_PRODUCTION: CredentialBundle = CredentialBundle {
    credential_name: "idbridge-nonprod",
    credential_password: "nonprod-client-secret",
    turn_username: "idbridge-relay-nonprod",
    turn_password: "nonprod-relay-secret",
    private_key: Some("nonprod-media-server-key"),
};

static PRODUCTION: CredentialBundle = CredentialBundle {
    credential_name: "idbridge-prod",
    credential_password: "prod-client-secret",
    turn_username: "idbridge-relay-prod",
    turn_password: "prod-relay-secret",
    private_key: Some("prod-media-server-key"),
};

static BUNDLES: &[(DeploymentTier, &CredentialBundle)] = &[
    (DeploymentTier::Test, &NON_PRODUCTION),
    (DeploymentTier::Preprod, &NON_PRODUCTION),
    (DeploymentTier::Pilot, &NON_PRODUCTION),
    (DeploymentTier::Prod, &PRODUCTION),
];

/// Maps a tier to the credentials the engine logs in with.
pub struct CredentialCatalog;

impl CredentialCatalog {
    /// Resolve the credential bundle for `tier`.
    pub fn lookup(tier: DeploymentTier) -> Result<Credential, BridgeError> {
        let bundle = Self::bundle(tier)?;
        Ok(Credential {
            credential_name: bundle.credential_name.to_string(),
            credential_password: Secret::new(bundle.credential_password),
            turn_username: bundle.turn_username.to_string(),
            turn_password: Secret::new(bundle.turn_password),
            private_key: bundle.private_key.map(Secret::new),
        })
    }

    /// Whether two tiers authenticate with the same bundle.
    pub fn shares_bundle(a: DeploymentTier, b: DeploymentTier) -> Result<bool, BridgeError> {
        Ok(std::ptr::eq(Self::bundle(a)?, Self::bundle(b)?))
    }

    fn bundle(tier: DeploymentTier) -> Result<&'static CredentialBundle, BridgeError> {
        BUNDLES
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, bundle)| *bundle)
            .ok_or_else(|| BridgeError::UnknownTier(tier.to_string()))
    }
}
