//! Credential bundle for one deployment tier.

use std::fmt;

use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string.
///
/// The contents are zeroized on drop and never printed by `Debug`.
/// Serialization writes a redaction marker so secrets cannot leak through
/// logs or the outbound event stream.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the secret to the engine's setup API.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("***")
    }
}

/// Login and relay credentials handed to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub credential_name: String,
    pub credential_password: Secret,
    pub turn_username: String,
    pub turn_password: Secret,
    /// Media-server signing key, when the tier uses one.
    pub private_key: Option<Secret>,
}

impl Credential {
    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credential_name.trim().is_empty() {
            missing.push("credentialName");
        }
        if self.credential_password.is_empty() {
            missing.push("credentialPassword");
        }
        if self.turn_username.trim().is_empty() {
            missing.push("turnUsername");
        }
        if self.turn_password.is_empty() {
            missing.push("turnPassword");
        }
        missing
    }
}
