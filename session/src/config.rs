//! Host configuration with TOML file support.

use serde::{Deserialize, Serialize};

use idbridge_config::ConfigAssembler;
use idbridge_types::{DeploymentTier, PreferenceSet};

use crate::{ChannelNames, LogFormat, SessionError};

/// Inputs the host supplies once per session.
///
/// Can be loaded from a TOML file via [`HostConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). None of it is renegotiable while
/// a session is attached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostConfig {
    /// Channel namespace, e.g. `"com.example.app"`.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Feature segment of the feature channel names.
    #[serde(default = "default_feature")]
    pub feature: String,

    /// Deployment tier name. Deliberately has no default: starting the
    /// engine without one fails as an incomplete configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Use the plain signaling host instead of the media-server variant.
    #[serde(default)]
    pub media_server_closed: bool,

    /// Let the engine close its own screens when a flow ends.
    #[serde(default)]
    pub auto_close: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Engine preferences; unset keys keep the engine defaults.
    #[serde(default)]
    pub preferences: PreferenceSet,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_namespace() -> String {
    "app.idbridge".to_string()
}

fn default_feature() -> String {
    "verify".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl HostConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, SessionError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SessionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SessionError> {
        toml::from_str(s).map_err(|e| SessionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, SessionError> {
        toml::to_string_pretty(self).map_err(|e| SessionError::Config(e.to_string()))
    }

    pub fn channel_names(&self) -> ChannelNames {
        ChannelNames::new(&self.namespace, &self.feature)
    }

    /// Resolve the configured tier. `Ok(None)` when no tier was given.
    pub fn deployment_tier(&self) -> Result<Option<DeploymentTier>, SessionError> {
        self.tier
            .as_deref()
            .map(str::parse::<DeploymentTier>)
            .transpose()
            .map_err(SessionError::from)
    }

    pub fn log_format(&self) -> LogFormat {
        match self.log_format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Human,
        }
    }

    /// Seed an assembler with everything except the user identity, which
    /// arrives later with `startEngine`.
    pub fn assembler(&self) -> Result<ConfigAssembler, SessionError> {
        let mut assembler = ConfigAssembler::new();
        assembler
            .set_preferences(self.preferences.clone())
            .set_auto_close(self.auto_close);
        if let Some(tier) = self.deployment_tier()? {
            assembler.set_environment(tier, self.media_server_closed);
        }
        Ok(assembler)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            feature: default_feature(),
            tier: None,
            media_server_closed: false,
            auto_close: false,
            log_format: default_log_format(),
            log_level: default_log_level(),
            preferences: PreferenceSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbridge_types::{BridgeError, OcrMode};
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = HostConfig {
            tier: Some("pilot".into()),
            ..Default::default()
        };
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = HostConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.tier.as_deref(), Some("pilot"));
        assert_eq!(parsed.namespace, config.namespace);
        assert_eq!(parsed.preferences, config.preferences);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = HostConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.namespace, "app.idbridge");
        assert_eq!(config.feature, "verify");
        assert!(config.tier.is_none());
        assert_eq!(config.log_format(), LogFormat::Human);
        assert_eq!(config.preferences, PreferenceSet::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            namespace = "com.example.app"
            tier = "prod"
            media_server_closed = true
            log_format = "json"

            [preferences]
            ocrMode = "strict"
            ocrCheckSize = 25
        "#;
        let config = HostConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.deployment_tier().unwrap(), Some(DeploymentTier::Prod));
        assert!(config.media_server_closed);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.preferences.ocr_mode, OcrMode::Strict);
        assert_eq!(config.preferences.ocr_check_size, 25);
        assert_eq!(config.preferences.video_resolution, 720); // default
        assert_eq!(
            config.channel_names().feature_events,
            "com.example.app/verify/events"
        );
    }

    #[test]
    fn unknown_tier_is_a_config_error() {
        let config = HostConfig::from_toml_str(r#"tier = "staging""#).unwrap();
        let err = config.assembler().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Bridge(BridgeError::UnknownTier(ref t)) if t == "staging"
        ));
    }

    #[test]
    fn missing_tier_is_left_unset() {
        let assembler = HostConfig::default().assembler().unwrap();
        assert!(assembler.tier().is_none());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tier = \"test\"\nauto_close = true").unwrap();
        let config = HostConfig::from_toml_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.auto_close);
        assert_eq!(config.deployment_tier().unwrap(), Some(DeploymentTier::Test));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = HostConfig::from_toml_file("/nonexistent/idbridge.toml");
        assert!(matches!(result.unwrap_err(), SessionError::Config(_)));
    }
}
