//! Fundamental types for the identity-verification bridge.
//!
//! This crate defines the data model shared by every other crate in the
//! workspace: deployment tiers, endpoint profiles, credentials, the user
//! identity, tunable preferences, the assembled engine configuration, and
//! the bridge error taxonomy.

pub mod config;
pub mod credential;
pub mod environment;
pub mod error;
pub mod identity;
pub mod preferences;
pub mod tier;

pub use config::EngineConfig;
pub use credential::{Credential, Secret};
pub use environment::EnvironmentProfile;
pub use error::BridgeError;
pub use identity::UserIdentity;
pub use preferences::{OcrMode, PreferenceSet};
pub use tier::DeploymentTier;
