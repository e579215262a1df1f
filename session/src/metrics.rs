//! Prometheus metrics for bridge sessions.
//!
//! [`BridgeMetrics`] owns a dedicated [`Registry`]; hosts that expose a
//! scrape endpoint can render it with [`BridgeMetrics::encode`].

use prometheus::{
    register_int_counter_vec_with_registry, register_int_counter_with_registry,
    register_int_gauge_with_registry, Encoder, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

use idbridge_events::DeliveryObserver;

pub struct BridgeMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Inbound method calls by channel, method and reply outcome.
    pub commands: IntCounterVec,
    /// Engine configurations handed to the engine.
    pub engine_starts: IntCounter,
    /// Events delivered to a subscriber.
    pub events_forwarded: IntCounter,
    /// Events fired while no subscriber was attached.
    pub events_dropped: IntCounter,

    // ── Gauges ──────────────────────────────────────────────────────────
    /// Sessions currently attached to a surface.
    pub sessions_active: IntGauge,
}

impl BridgeMetrics {
    /// Create a fresh set of metrics, all registered under a new
    /// [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        let commands = register_int_counter_vec_with_registry!(
            Opts::new("idbridge_commands_total", "Inbound method calls handled"),
            &["channel", "method", "outcome"],
            registry
        )
        .expect("failed to register commands counter");

        let engine_starts = register_int_counter_with_registry!(
            Opts::new(
                "idbridge_engine_starts_total",
                "Engine configurations handed to the engine"
            ),
            registry
        )
        .expect("failed to register engine_starts counter");

        let events_forwarded = register_int_counter_with_registry!(
            Opts::new(
                "idbridge_events_forwarded_total",
                "Engine events delivered to the UI subscriber"
            ),
            registry
        )
        .expect("failed to register events_forwarded counter");

        let events_dropped = register_int_counter_with_registry!(
            Opts::new(
                "idbridge_events_dropped_total",
                "Engine events dropped because no subscriber was attached"
            ),
            registry
        )
        .expect("failed to register events_dropped counter");

        let sessions_active = register_int_gauge_with_registry!(
            Opts::new("idbridge_sessions_active", "Sessions attached to a UI surface"),
            registry
        )
        .expect("failed to register sessions_active gauge");

        Self {
            registry,
            commands,
            engine_starts,
            events_forwarded,
            events_dropped,
            sessions_active,
        }
    }

    pub fn record_command(&self, channel: &str, method: &str, outcome: &str) {
        self.commands
            .with_label_values(&[channel, method, outcome])
            .inc();
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn encode(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            tracing::warn!("failed to encode metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl Default for BridgeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryObserver for BridgeMetrics {
    fn delivered(&self, _event_name: &str) {
        self.events_forwarded.inc();
    }

    fn dropped(&self, _event_name: &str) {
        self.events_dropped.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_commands_by_outcome() {
        let metrics = BridgeMetrics::new();
        let channel = "app.idbridge/verify/methods";
        metrics.record_command(channel, "startEngine", "success");
        metrics.record_command(channel, "startEngine", "error");
        metrics.record_command(channel, "startEngine", "success");
        assert_eq!(
            metrics
                .commands
                .with_label_values(&[channel, "startEngine", "success"])
                .get(),
            2
        );
    }

    #[test]
    fn observer_updates_event_counters() {
        let metrics = BridgeMetrics::new();
        metrics.delivered("faceReady");
        metrics.dropped("faceReady");
        metrics.dropped("nfcReady");
        assert_eq!(metrics.events_forwarded.get(), 1);
        assert_eq!(metrics.events_dropped.get(), 2);
    }

    #[test]
    fn encode_contains_metric_names() {
        let metrics = BridgeMetrics::new();
        metrics.record_command("app.idbridge/verify/methods", "stopEngine", "empty");
        metrics.sessions_active.set(1);
        let text = metrics.encode();
        assert!(text.contains("idbridge_commands_total"));
        assert!(text.contains("idbridge_sessions_active 1"));
    }
}
