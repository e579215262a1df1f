//! Engine configuration assembly.
//!
//! Two static catalogs resolve a [`DeploymentTier`](idbridge_types::DeploymentTier)
//! into endpoints and credentials; the [`ConfigAssembler`] combines them with
//! the user identity and preferences into one immutable
//! [`EngineConfig`](idbridge_types::EngineConfig).

pub mod assembler;
pub mod credentials;
pub mod environments;

pub use assembler::ConfigAssembler;
pub use credentials::CredentialCatalog;
pub use environments::EnvironmentCatalog;
