//! Inbound command channel.
//!
//! The UI layer invokes named methods with a key/value argument map:
//! - `prepareEngine { config }` on the common channel
//! - `startEngine { firstName, lastName, callType }` on the feature channel
//! - `stopEngine {}` on the feature channel
//!
//! Every invocation is answered: a success, an error carrying a stable code,
//! an empty acknowledgement (stop), or `notImplemented` for unknown methods.

pub mod channel;
pub mod command;
pub mod error;
pub mod handlers;
pub mod reply;

pub use channel::{ChannelState, CommandChannel, CommandListener, HostObserver};
pub use command::{Arguments, CommandName, InboundCommand};
pub use error::CommandError;
pub use handlers::Command;
pub use reply::CommandReply;
