//! One UI surface paired with one engine.

use std::rc::{Rc, Weak};

use idbridge_commands::{CommandChannel, CommandName, CommandReply, InboundCommand};
use idbridge_engine::{EngineCallback, EngineEvent, VerificationEngine};
use idbridge_events::{EventChannel, EventSubscriber};
use tracing::{info, trace, warn, Span};

use crate::tracing_spans::{command_span, event_span, session_span};
use crate::{
    BridgeMetrics, ChannelNames, EngineController, HostConfig, HostObserver, SessionError,
    SurfaceId, SurfaceRegistry,
};

const COMMON_COMMANDS: &[CommandName] = &[CommandName::PrepareEngine];
const FEATURE_COMMANDS: &[CommandName] = &[CommandName::StartEngine, CommandName::StopEngine];

/// Metric label for channel and method names this session does not know.
const UNKNOWN_LABEL: &str = "unknown";

/// Engine callback registered on behalf of a session.
///
/// Holds the event channel weakly: once the session is gone, late engine
/// events are discarded here instead of keeping the channel alive.
struct EventForwarder {
    channel: Weak<EventChannel>,
}

impl EngineCallback for EventForwarder {
    fn on_event(&self, event: EngineEvent) {
        let _span = event_span(event.kind().as_str()).entered();
        match self.channel.upgrade() {
            Some(channel) => {
                channel.publish(event);
            }
            None => trace!("session detached, event discarded"),
        }
    }
}

/// Owns the command channels, the event channel and the engine controller
/// for one attached surface.
pub struct BridgeSession {
    surface: SurfaceId,
    names: ChannelNames,
    common: CommandChannel,
    feature: CommandChannel,
    events: Rc<EventChannel>,
    controller: Rc<EngineController>,
    metrics: Rc<BridgeMetrics>,
    span: Span,
}

impl BridgeSession {
    /// Attach a new session to `surface`.
    ///
    /// Fails with [`SessionError::SurfaceAlreadyAttached`] if the surface
    /// already has a session, and with a config error if the host config
    /// names an unknown tier. On failure nothing is registered anywhere.
    pub fn attach(
        registry: &mut SurfaceRegistry,
        surface: SurfaceId,
        config: &HostConfig,
        engine: Rc<dyn VerificationEngine>,
        observer: Option<Rc<dyn HostObserver>>,
        metrics: Rc<BridgeMetrics>,
    ) -> Result<Self, SessionError> {
        let seed = config.assembler()?;
        registry.attach(surface)?;

        let span = session_span(surface);
        let names = config.channel_names();

        let events = Rc::new(EventChannel::new(names.feature_events.clone()));
        events.set_observer(metrics.clone());
        engine.register_callback(Rc::new(EventForwarder {
            channel: Rc::downgrade(&events),
        }));

        let controller = Rc::new(EngineController::new(engine.clone(), seed, observer));
        let mut common = CommandChannel::new(names.common_methods.clone(), COMMON_COMMANDS);
        let mut feature = CommandChannel::new(names.feature_methods.clone(), FEATURE_COMMANDS);
        common.set_listener(controller.clone());
        feature.set_listener(controller.clone());

        metrics.sessions_active.inc();
        span.in_scope(|| {
            info!(
                engine = engine.name(),
                common = %names.common_methods,
                feature = %names.feature_methods,
                events = %names.feature_events,
                "bridge session attached"
            )
        });

        Ok(Self {
            surface,
            names,
            common,
            feature,
            events,
            controller,
            metrics,
            span,
        })
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn channel_names(&self) -> &ChannelNames {
        &self.names
    }

    pub fn is_engine_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Handle one method call arriving on `channel`. Always returns a reply;
    /// calls on a channel this session does not own are `notImplemented`.
    pub fn invoke(&self, channel: &str, inbound: &InboundCommand) -> CommandReply {
        let _session = self.span.enter();
        let _command = command_span(channel, &inbound.method).entered();

        let (reply, channel_label) = if channel == self.common.name() {
            (self.common.dispatch(inbound), self.common.name())
        } else if channel == self.feature.name() {
            (self.feature.dispatch(inbound), self.feature.name())
        } else {
            warn!(channel, method = %inbound.method, "call on unknown channel");
            (CommandReply::NotImplemented, UNKNOWN_LABEL)
        };

        // Labels are limited to known channel and method names.
        let method = inbound.name().ok();
        let method_label = method.map_or(UNKNOWN_LABEL, |name| name.as_str());
        self.metrics
            .record_command(channel_label, method_label, reply.outcome());
        if reply.is_success() && method == Some(CommandName::StartEngine) {
            self.metrics.engine_starts.inc();
        }
        reply
    }

    /// Bind the event subscriber on the event channel.
    pub fn listen(
        &self,
        channel: &str,
        subscriber: Rc<dyn EventSubscriber>,
    ) -> Result<(), SessionError> {
        let _session = self.span.enter();
        self.event_channel(channel)?.listen(subscriber);
        Ok(())
    }

    /// Unbind the event subscriber, which receives `stop`.
    pub fn cancel(&self, channel: &str) -> Result<(), SessionError> {
        let _session = self.span.enter();
        self.event_channel(channel)?.cancel();
        Ok(())
    }

    /// Tear the session down: the subscriber gets `stop`, a running engine
    /// is stopped, and the surface is released for a new session.
    pub fn detach(self, registry: &mut SurfaceRegistry) -> Result<(), SessionError> {
        let _session = self.span.enter();
        self.events.cancel();
        self.controller.shutdown();
        self.metrics.sessions_active.dec();
        registry.release(self.surface)?;
        info!("bridge session detached");
        Ok(())
    }

    fn event_channel(&self, channel: &str) -> Result<&EventChannel, SessionError> {
        if channel == self.events.name() {
            Ok(&self.events)
        } else {
            Err(SessionError::UnknownChannel(channel.to_string()))
        }
    }
}
