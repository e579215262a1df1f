//! One named method channel and its dispatch policy.

use std::rc::Rc;

use idbridge_types::{BridgeError, UserIdentity};
use tracing::{debug, warn};

use crate::{Command, CommandError, CommandName, CommandReply, InboundCommand};

/// Acts on validated commands.
///
/// Every method has a default so a listener only implements what its
/// channel accepts.
pub trait CommandListener {
    fn on_engine_prepared(&self, _config: &str) -> Result<(), CommandError> {
        Ok(())
    }

    fn on_engine_start(&self, _user: UserIdentity) -> Result<(), CommandError> {
        Err(BridgeError::UnsupportedCommand(CommandName::StartEngine.to_string()).into())
    }

    /// Must be safe to call when nothing is running.
    fn on_engine_stop(&self) {}
}

/// Host-side hooks for commands the bridge forwards without acting on.
pub trait HostObserver {
    /// `prepareEngine` arrived with its opaque configuration string.
    fn on_engine_prepared(&self, config: &str);
}

/// Whether a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    Unbound,
    Bound,
}

/// A method channel accepting a fixed set of commands.
///
/// Commands that arrive while no listener is registered are dropped with a
/// warning; they are never buffered.
pub struct CommandChannel {
    name: String,
    accepts: &'static [CommandName],
    listener: Option<Rc<dyn CommandListener>>,
}

impl CommandChannel {
    pub fn new(name: impl Into<String>, accepts: &'static [CommandName]) -> Self {
        Self {
            name: name.into(),
            accepts,
            listener: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepts(&self, name: CommandName) -> bool {
        self.accepts.contains(&name)
    }

    pub fn set_listener(&mut self, listener: Rc<dyn CommandListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn state(&self) -> ChannelState {
        if self.listener.is_some() {
            ChannelState::Bound
        } else {
            ChannelState::Unbound
        }
    }

    /// Validate and dispatch one method call. Always returns a reply.
    pub fn dispatch(&self, inbound: &InboundCommand) -> CommandReply {
        let name = match inbound.name() {
            Ok(name) if self.accepts(name) => name,
            Ok(_) | Err(_) => {
                warn!(channel = %self.name, method = %inbound.method, "method not implemented");
                return CommandReply::NotImplemented;
            }
        };

        let command = match Command::parse(inbound) {
            Ok(command) => command,
            Err(e) => {
                warn!(channel = %self.name, method = %name, error = %e, "rejected command");
                return CommandReply::error(&CommandError::from(e));
            }
        };

        let Some(listener) = self.listener.as_ref() else {
            warn!(channel = %self.name, method = %name, "no listener bound, dropping command");
            return match command {
                Command::StopEngine => CommandReply::Empty,
                _ => CommandReply::error(&CommandError::Unbound(self.name.clone())),
            };
        };

        debug!(channel = %self.name, method = %name, "dispatching command");
        let result = match command {
            Command::PrepareEngine { config } => listener.on_engine_prepared(&config),
            Command::StartEngine(user) => listener.on_engine_start(user),
            Command::StopEngine => {
                listener.on_engine_stop();
                return CommandReply::Empty;
            }
        };

        match result {
            Ok(()) => CommandReply::success(),
            Err(e) => {
                warn!(channel = %self.name, method = %name, error = %e, "command failed");
                CommandReply::error(&e)
            }
        }
    }
}
