//! Deployment tier identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BridgeError;

/// Identifies which deployment of the verification backend a session talks to.
///
/// Chosen once per session; it selects both the endpoint profile and the
/// credential bundle, so the two can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTier {
    /// Internal test backend.
    Test,
    /// Pre-production backend.
    Preprod,
    /// Limited-audience pilot backend.
    Pilot,
    /// The production backend.
    Prod,
}

impl DeploymentTier {
    /// Every defined tier, in promotion order.
    pub const ALL: [DeploymentTier; 4] = [Self::Test, Self::Preprod, Self::Pilot, Self::Prod];

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Preprod => "preprod",
            Self::Pilot => "pilot",
            Self::Prod => "prod",
        }
    }

    /// Whether this tier serves real end users.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl fmt::Display for DeploymentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentTier {
    type Err = BridgeError;

    /// Parse a tier name. Unknown names are a configuration error; there is
    /// no fallback tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "preprod" => Ok(Self::Preprod),
            "pilot" => Ok(Self::Pilot),
            "prod" => Ok(Self::Prod),
            _ => Err(BridgeError::UnknownTier(s.to_string())),
        }
    }
}
