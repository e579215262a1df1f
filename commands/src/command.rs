//! Raw inbound messages as they arrive from the UI layer.

use std::fmt;
use std::str::FromStr;

use idbridge_types::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Method names the bridge understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandName {
    PrepareEngine,
    StartEngine,
    StopEngine,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrepareEngine => "prepareEngine",
            Self::StartEngine => "startEngine",
            Self::StopEngine => "stopEngine",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prepareEngine" => Ok(Self::PrepareEngine),
            "startEngine" => Ok(Self::StartEngine),
            "stopEngine" => Ok(Self::StopEngine),
            other => Err(BridgeError::UnsupportedCommand(other.to_string())),
        }
    }
}

/// Argument map of one method call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for hosts and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Fetch a required string argument. Absent and `null` both count as
    /// missing.
    pub fn require_str(&self, key: &str) -> Result<&str, BridgeError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(BridgeError::MissingArgument(key.to_string())),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(BridgeError::InvalidArgument {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A method call as received: the raw name and its arguments.
///
/// The name stays a string until dispatch so that unknown names can be
/// answered with `notImplemented` instead of failing to decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InboundCommand {
    pub method: String,
    #[serde(default)]
    pub arguments: Arguments,
}

impl InboundCommand {
    pub fn new(method: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Resolve the method name.
    pub fn name(&self) -> Result<CommandName, BridgeError> {
        self.method.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_round_trip() {
        for name in [
            CommandName::PrepareEngine,
            CommandName::StartEngine,
            CommandName::StopEngine,
        ] {
            assert_eq!(name.as_str().parse::<CommandName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let command = InboundCommand::new("rebootEngine", Arguments::new());
        assert_eq!(
            command.name().unwrap_err(),
            BridgeError::UnsupportedCommand("rebootEngine".into())
        );
    }

    #[test]
    fn require_str_distinguishes_missing_and_invalid() {
        let args = Arguments::new()
            .with("firstName", "Jane")
            .with("lastName", Value::Null)
            .with("callType", 7);

        assert_eq!(args.require_str("firstName").unwrap(), "Jane");
        assert_eq!(
            args.require_str("lastName").unwrap_err(),
            BridgeError::MissingArgument("lastName".into())
        );
        assert_eq!(
            args.require_str("config").unwrap_err(),
            BridgeError::MissingArgument("config".into())
        );
        assert!(matches!(
            args.require_str("callType").unwrap_err(),
            BridgeError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn decodes_from_json_without_arguments() {
        let command: InboundCommand = serde_json::from_value(json!({"method": "stopEngine"})).unwrap();
        assert_eq!(command.name().unwrap(), CommandName::StopEngine);
        assert!(command.arguments.is_empty());
    }
}
