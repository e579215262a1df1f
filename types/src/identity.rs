//! The person being verified.

use serde::{Deserialize, Serialize};

/// Identity supplied by the host once per session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub first_name: String,
    pub last_name: String,
    /// Engine call flavour, e.g. `"self-service"` or `"video-call"`.
    pub call_type: String,
}

impl UserIdentity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        call_type: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            call_type: call_type.into(),
        }
    }
}
