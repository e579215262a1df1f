//! The fully assembled engine configuration.

use serde::Serialize;

use crate::{Credential, DeploymentTier, EnvironmentProfile, PreferenceSet, UserIdentity};

/// Everything the engine's setup call needs, in one immutable value.
///
/// A value of this type always holds exactly one profile, one credential
/// bundle, one identity and one normalized preference set. Build it through
/// `idbridge_config::ConfigAssembler`, which also guarantees that profile and
/// credential were resolved for the same tier.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    tier: DeploymentTier,
    environment: EnvironmentProfile,
    credential: Credential,
    user: UserIdentity,
    preferences: PreferenceSet,
}

impl EngineConfig {
    /// Compose a configuration from parts already resolved for `tier`.
    /// Preferences are normalized on the way in.
    ///
    /// Nothing here checks that `environment` and `credential` belong to
    /// `tier`; outside the assembler use `ConfigAssembler::build` instead.
    #[doc(hidden)]
    pub fn from_resolved_parts(
        tier: DeploymentTier,
        environment: EnvironmentProfile,
        credential: Credential,
        user: UserIdentity,
        preferences: PreferenceSet,
    ) -> Self {
        Self {
            tier,
            environment,
            credential,
            user,
            preferences: preferences.normalized(),
        }
    }

    pub fn tier(&self) -> DeploymentTier {
        self.tier
    }

    pub fn environment(&self) -> &EnvironmentProfile {
        &self.environment
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }
}
