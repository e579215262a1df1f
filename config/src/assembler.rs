//! Pure assembly of an [`EngineConfig`] from independently supplied inputs.

use idbridge_types::{
    BridgeError, DeploymentTier, EngineConfig, PreferenceSet, UserIdentity,
};

use crate::{CredentialCatalog, EnvironmentCatalog};

/// Collects the inputs of an engine configuration in any order.
///
/// [`build`](Self::build) takes `&self` and returns a fresh value each call,
/// so an assembler can be adjusted and rebuilt without affecting configs it
/// produced earlier.
#[derive(Clone, Debug, Default)]
pub struct ConfigAssembler {
    environment: Option<EnvironmentSelection>,
    user: Option<UserIdentity>,
    preferences: PreferenceSet,
}

#[derive(Clone, Copy, Debug)]
struct EnvironmentSelection {
    tier: DeploymentTier,
    media_server_closed: bool,
}

impl ConfigAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the deployment tier. There is no default tier.
    pub fn set_environment(
        &mut self,
        tier: DeploymentTier,
        media_server_closed: bool,
    ) -> &mut Self {
        self.environment = Some(EnvironmentSelection {
            tier,
            media_server_closed,
        });
        self
    }

    pub fn set_user(&mut self, user: UserIdentity) -> &mut Self {
        self.user = Some(user);
        self
    }

    /// Replace the whole preference set. Unset fields keep their defaults
    /// when the set itself came from `PreferenceSet::default()`.
    pub fn set_preferences(&mut self, preferences: PreferenceSet) -> &mut Self {
        self.preferences = preferences;
        self
    }

    pub fn set_auto_close(&mut self, enabled: bool) -> &mut Self {
        self.preferences.auto_close_enabled = enabled;
        self
    }

    pub fn tier(&self) -> Option<DeploymentTier> {
        self.environment.map(|selection| selection.tier)
    }

    /// Produce an immutable snapshot of the current inputs.
    ///
    /// Fails with [`BridgeError::IncompleteConfig`] when the tier or the user
    /// identity was never supplied, and with [`BridgeError::UnknownTier`] when
    /// either catalog has no entry for the tier. Nothing is built unless every
    /// part resolves.
    pub fn build(&self) -> Result<EngineConfig, BridgeError> {
        let selection = self
            .environment
            .ok_or(BridgeError::IncompleteConfig("deployment tier"))?;
        let user = self
            .user
            .clone()
            .ok_or(BridgeError::IncompleteConfig("user identity"))?;

        let environment =
            EnvironmentCatalog::lookup(selection.tier, selection.media_server_closed)?;
        let credential = CredentialCatalog::lookup(selection.tier)?;

        let mut preferences = self.preferences.clone();
        preferences.media_server_enabled = !selection.media_server_closed;

        tracing::debug!(
            tier = %selection.tier,
            media_server_closed = selection.media_server_closed,
            call_type = %user.call_type,
            "assembled engine config"
        );

        Ok(EngineConfig::from_resolved_parts(
            selection.tier,
            environment,
            credential,
            user,
            preferences,
        ))
    }
}
