//! Turns validated commands into engine calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use idbridge_commands::{CommandError, CommandListener, HostObserver};
use idbridge_config::ConfigAssembler;
use idbridge_engine::VerificationEngine;
use idbridge_types::UserIdentity;
use tracing::{info, warn};

/// The command listener behind both method channels of a session.
///
/// Holds the assembler seeded from the host config; each `startEngine`
/// builds a fresh [`EngineConfig`](idbridge_types::EngineConfig) from a copy
/// of it so earlier identities never leak into later runs.
pub struct EngineController {
    engine: Rc<dyn VerificationEngine>,
    seed: ConfigAssembler,
    observer: Option<Rc<dyn HostObserver>>,
    running: Cell<bool>,
    last_prepared: RefCell<Option<String>>,
}

impl EngineController {
    pub fn new(
        engine: Rc<dyn VerificationEngine>,
        seed: ConfigAssembler,
        observer: Option<Rc<dyn HostObserver>>,
    ) -> Self {
        Self {
            engine,
            seed,
            observer,
            running: Cell::new(false),
            last_prepared: RefCell::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// The config string from the most recent `prepareEngine`, if any.
    pub fn last_prepared(&self) -> Option<String> {
        self.last_prepared.borrow().clone()
    }

    /// Stop the engine if it was started. Idempotent.
    pub fn shutdown(&self) {
        if self.running.replace(false) {
            info!(engine = self.engine.name(), "stopping engine");
            self.engine.stop();
        }
    }
}

impl CommandListener for EngineController {
    fn on_engine_prepared(&self, config: &str) -> Result<(), CommandError> {
        *self.last_prepared.borrow_mut() = Some(config.to_string());
        if let Some(observer) = &self.observer {
            observer.on_engine_prepared(config);
        }
        Ok(())
    }

    fn on_engine_start(&self, user: UserIdentity) -> Result<(), CommandError> {
        if self.running.get() {
            warn!(engine = self.engine.name(), "start while running, ignored");
            return Err(CommandError::AlreadyRunning);
        }
        let mut assembler = self.seed.clone();
        let config = assembler.set_user(user).build()?;

        info!(
            engine = self.engine.name(),
            tier = %config.tier(),
            "starting engine"
        );
        self.engine.initialize(config).map_err(|e| {
            warn!(engine = self.engine.name(), error = %e, "engine rejected configuration");
            CommandError::EngineRejected(e.to_string())
        })?;
        self.running.set(true);
        Ok(())
    }

    /// A no-op unless this controller started the engine.
    fn on_engine_stop(&self) {
        if self.running.replace(false) {
            info!(engine = self.engine.name(), "stop requested");
            self.engine.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbridge_engine::{EngineCallback, EngineError};
    use idbridge_types::{BridgeError, DeploymentTier, EngineConfig, PreferenceSet};

    #[derive(Default)]
    struct FakeEngine {
        configs: RefCell<Vec<EngineConfig>>,
        stops: Cell<u32>,
        reject: Cell<bool>,
    }

    impl VerificationEngine for FakeEngine {
        fn name(&self) -> &str {
            "fake"
        }

        fn register_callback(&self, _callback: Rc<dyn EngineCallback>) {}

        fn initialize(&self, config: EngineConfig) -> Result<(), EngineError> {
            if self.reject.get() {
                return Err(EngineError::Rejected("bad credentials".into()));
            }
            self.configs.borrow_mut().push(config);
            Ok(())
        }

        fn stop(&self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    fn seeded(tier: Option<DeploymentTier>) -> ConfigAssembler {
        let mut assembler = ConfigAssembler::new();
        assembler.set_preferences(PreferenceSet::default());
        if let Some(tier) = tier {
            assembler.set_environment(tier, false);
        }
        assembler
    }

    fn jane() -> UserIdentity {
        UserIdentity::new("Jane", "Doe", "selfService")
    }

    #[test]
    fn start_hands_built_config_to_engine() {
        let engine = Rc::new(FakeEngine::default());
        let controller =
            EngineController::new(engine.clone(), seeded(Some(DeploymentTier::Pilot)), None);

        controller.on_engine_start(jane()).unwrap();

        assert!(controller.is_running());
        let configs = engine.configs.borrow();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].tier(), DeploymentTier::Pilot);
        assert_eq!(configs[0].user().first_name, "Jane");
    }

    #[test]
    fn missing_tier_never_reaches_engine() {
        let engine = Rc::new(FakeEngine::default());
        let controller = EngineController::new(engine.clone(), seeded(None), None);

        let err = controller.on_engine_start(jane()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Bridge(BridgeError::IncompleteConfig(_))
        ));
        assert!(engine.configs.borrow().is_empty());
        assert!(!controller.is_running());
    }

    #[test]
    fn engine_rejection_maps_to_command_error() {
        let engine = Rc::new(FakeEngine::default());
        engine.reject.set(true);
        let controller =
            EngineController::new(engine.clone(), seeded(Some(DeploymentTier::Test)), None);

        let err = controller.on_engine_start(jane()).unwrap_err();
        assert_eq!(err.code(), "ENGINE_REJECTED");
        assert!(!controller.is_running());
    }

    #[test]
    fn stop_is_safe_when_idle() {
        let engine = Rc::new(FakeEngine::default());
        let controller = EngineController::new(engine.clone(), seeded(None), None);
        controller.on_engine_stop();
        controller.on_engine_stop();
        assert!(!controller.is_running());
        assert_eq!(engine.stops.get(), 0);
    }

    #[test]
    fn stop_after_start_reaches_engine_once() {
        let engine = Rc::new(FakeEngine::default());
        let controller =
            EngineController::new(engine.clone(), seeded(Some(DeploymentTier::Test)), None);
        controller.on_engine_start(jane()).unwrap();
        controller.on_engine_stop();
        controller.on_engine_stop();
        assert_eq!(engine.stops.get(), 1);
    }

    #[test]
    fn second_start_while_running_is_refused() {
        let engine = Rc::new(FakeEngine::default());
        let controller =
            EngineController::new(engine.clone(), seeded(Some(DeploymentTier::Pilot)), None);
        controller.on_engine_start(jane()).unwrap();

        let err = controller.on_engine_start(jane()).unwrap_err();
        assert_eq!(err, CommandError::AlreadyRunning);
        assert_eq!(err.code(), "ALREADY_RUNNING");
        assert_eq!(engine.configs.borrow().len(), 1);
        assert!(controller.is_running());

        controller.on_engine_stop();
        controller.on_engine_start(jane()).unwrap();
        assert_eq!(engine.configs.borrow().len(), 2);
    }

    #[test]
    fn shutdown_only_stops_a_running_engine() {
        let engine = Rc::new(FakeEngine::default());
        let controller =
            EngineController::new(engine.clone(), seeded(Some(DeploymentTier::Prod)), None);
        controller.shutdown();
        assert_eq!(engine.stops.get(), 0);

        controller.on_engine_start(jane()).unwrap();
        controller.shutdown();
        controller.shutdown();
        assert_eq!(engine.stops.get(), 1);
    }

    struct Prepared(RefCell<Vec<String>>);

    impl HostObserver for Prepared {
        fn on_engine_prepared(&self, config: &str) {
            self.0.borrow_mut().push(config.to_string());
        }
    }

    #[test]
    fn prepare_reaches_host_observer() {
        let observer = Rc::new(Prepared(RefCell::new(Vec::new())));
        let controller = EngineController::new(
            Rc::new(FakeEngine::default()),
            seeded(None),
            Some(observer.clone()),
        );
        controller.on_engine_prepared("{\"locale\":\"en\"}").unwrap();
        assert_eq!(*observer.0.borrow(), vec!["{\"locale\":\"en\"}".to_string()]);
        assert_eq!(controller.last_prepared().as_deref(), Some("{\"locale\":\"en\"}"));
    }
}
