//! Scripted stand-in engine for running the host shell without a device.
//!
//! After `initialize` the engine queues a fixed event sequence for the
//! requested call type and fires one event per [`DemoEngine::tick`].

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use idbridge_engine::{
    EngineCallback, EngineError, EngineEvent, EventKind, VerificationEngine, VerifyCallResult,
};
use idbridge_types::EngineConfig;
use tracing::{debug, info};

pub struct DemoEngine {
    callback: RefCell<Option<Rc<dyn EngineCallback>>>,
    script: RefCell<VecDeque<EngineEvent>>,
    running: Cell<bool>,
}

impl DemoEngine {
    pub fn new() -> Self {
        Self {
            callback: RefCell::new(None),
            script: RefCell::new(VecDeque::new()),
            running: Cell::new(false),
        }
    }

    /// Fire the next scripted event, if any. Returns whether one was fired.
    pub fn tick(&self) -> bool {
        let next = self.script.borrow_mut().pop_front();
        let Some(event) = next else {
            return false;
        };
        if self.script.borrow().is_empty() {
            self.running.set(false);
        }
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            debug!(event = %event.kind(), "demo engine firing");
            callback.on_event(event);
        }
        true
    }

    pub fn pending(&self) -> usize {
        self.script.borrow().len()
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationEngine for DemoEngine {
    fn name(&self) -> &str {
        "demo"
    }

    fn register_callback(&self, callback: Rc<dyn EngineCallback>) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn initialize(&self, config: EngineConfig) -> Result<(), EngineError> {
        if self.running.get() {
            return Err(EngineError::AlreadyRunning);
        }
        let call_type = config.user().call_type.as_str();
        let script = if call_type.to_ascii_lowercase().contains("video") {
            video_call_script()
        } else {
            self_service_script()
        };
        info!(
            tier = %config.tier(),
            call_type,
            events = script.len(),
            "demo engine initialized"
        );
        *self.script.borrow_mut() = script;
        self.running.set(true);
        Ok(())
    }

    fn stop(&self) {
        if self.running.replace(false) {
            let mut script = self.script.borrow_mut();
            script.clear();
            script.push_back(EngineEvent::new(EventKind::LocalHangedUp));
            script.push_back(EngineEvent::call_session_closed("STOPPED"));
        }
    }
}

fn self_service_script() -> VecDeque<EngineEvent> {
    VecDeque::from([
        EngineEvent::session_started(true, Some("demo-session-0001".into())),
        EngineEvent::new(EventKind::SelfServiceReady),
        EngineEvent::new(EventKind::IdVerifyReady),
        EngineEvent::new(EventKind::CardFrontDetected),
        EngineEvent::new(EventKind::IdFrontCompleted),
        EngineEvent::new(EventKind::CardBackDetected),
        EngineEvent::new(EventKind::IdDocCompleted),
        EngineEvent::new(EventKind::IdDocVerified),
        EngineEvent::new(EventKind::IdDocStored),
        EngineEvent::new(EventKind::NfcReady),
        EngineEvent::new(EventKind::NfcCompleted),
        EngineEvent::new(EventKind::NfcVerified),
        EngineEvent::new(EventKind::NfcStored),
        EngineEvent::new(EventKind::FaceReady),
        EngineEvent::new(EventKind::FaceDetected),
        EngineEvent::new(EventKind::SmileDetected),
        EngineEvent::new(EventKind::EyeCloseDetected),
        EngineEvent::new(EventKind::FaceCompleted),
        EngineEvent::new(EventKind::FaceVerified),
        EngineEvent::new(EventKind::FaceStored),
        EngineEvent::result_received(demo_result()),
    ])
}

fn video_call_script() -> VecDeque<EngineEvent> {
    VecDeque::from([
        EngineEvent::session_started(true, Some("demo-session-0002".into())),
        EngineEvent::new(EventKind::VideoCallReady),
        EngineEvent::new(EventKind::CallWait),
        EngineEvent::new(EventKind::CallStarted),
        EngineEvent::agent_request("please hold your document to the camera"),
        EngineEvent::new(EventKind::CardFrontDetected),
        EngineEvent::new(EventKind::CardHoloDetected),
        EngineEvent::new(EventKind::RemoteHangedUp),
        EngineEvent::new(EventKind::VideoAddSucceeded),
        EngineEvent::call_session_closed("COMPLETED"),
        EngineEvent::result_received(demo_result()),
    ])
}

fn demo_result() -> VerifyCallResult {
    let mut fields = BTreeMap::new();
    fields.insert("score".to_string(), serde_json::json!(0.97));
    VerifyCallResult {
        reference_id: Some("demo-ref-0001".into()),
        status: Some("APPROVED".into()),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbridge_config::ConfigAssembler;
    use idbridge_types::{DeploymentTier, UserIdentity};

    #[derive(Default)]
    struct Names(RefCell<Vec<EventKind>>);

    impl EngineCallback for Names {
        fn on_event(&self, event: EngineEvent) {
            self.0.borrow_mut().push(event.kind());
        }
    }

    fn config(call_type: &str) -> EngineConfig {
        let mut assembler = ConfigAssembler::new();
        assembler
            .set_environment(DeploymentTier::Test, false)
            .set_user(UserIdentity::new("Jane", "Doe", call_type));
        assembler.build().expect("test tier resolves")
    }

    #[test]
    fn self_service_script_ends_with_result() {
        let engine = DemoEngine::new();
        let names = Rc::new(Names::default());
        engine.register_callback(names.clone());
        engine.initialize(config("selfService")).unwrap();

        while engine.tick() {}

        let fired = names.0.borrow();
        assert_eq!(fired.first(), Some(&EventKind::SessionStartSucceeded));
        assert_eq!(fired.last(), Some(&EventKind::ResultGetSucceeded));
        let nfc = fired.iter().position(|k| *k == EventKind::NfcReady);
        let face = fired.iter().position(|k| *k == EventKind::FaceReady);
        assert!(nfc.is_some() && nfc < face, "nfc step runs before face: {fired:?}");
    }

    #[test]
    fn second_initialize_while_running_is_rejected() {
        let engine = DemoEngine::new();
        engine.initialize(config("videoCall")).unwrap();
        assert!(matches!(
            engine.initialize(config("videoCall")),
            Err(EngineError::AlreadyRunning)
        ));
    }

    #[test]
    fn stop_replaces_script_with_hangup() {
        let engine = DemoEngine::new();
        let names = Rc::new(Names::default());
        engine.register_callback(names.clone());
        engine.initialize(config("videoCall")).unwrap();
        engine.tick();
        engine.stop();

        assert_eq!(engine.pending(), 2);
        while engine.tick() {}
        assert_eq!(
            *names.0.borrow(),
            vec![
                EventKind::SessionStartSucceeded,
                EventKind::LocalHangedUp,
                EventKind::CallSessionCloseResult
            ]
        );
    }
}
