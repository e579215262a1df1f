//! The engine's notification catalogue collapsed into one tagged event.

use std::fmt;
use std::str::FromStr;

use crate::payload::{EventPayload, FailureReport, StructuredPayload, VerifyCallResult};
use crate::EngineError;

/// Every notification the engine's callback surface can fire.
///
/// The wire name of each variant is its camelCase form, see [`EventKind::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    // ── Readiness ─────────────────────────────────────────────────────────
    VideoCallReady,
    SelfServiceReady,
    IdVerifyReady,
    IdSelfVerifyReady,

    // ── Document ──────────────────────────────────────────────────────────
    IdRetry,
    IdTypeVerified,
    IdDocCompleted,
    IdDocVerified,

    // ── NFC chip ──────────────────────────────────────────────────────────
    NfcReady,
    NfcRetry,
    NfcCompleted,
    NfcVerified,

    // ── Face and liveness ─────────────────────────────────────────────────
    FaceReady,
    FaceRetry,
    FaceDetected,
    SmileDetected,
    FaceCompleted,
    FaceVerified,
    RestartVerification,

    // ── Failures and checks ───────────────────────────────────────────────
    /// A verification step failed. Carries a failure report.
    Failure,
    FakeChecked,

    // ── Liveness gestures ─────────────────────────────────────────────────
    EyeCloseDetected,
    EyeCloseIntervalDetected,
    RightEyeCloseDetected,
    LeftEyeCloseDetected,
    FaceLeftDetected,
    FaceRightDetected,
    FaceUpDetected,

    // ── Retries ───────────────────────────────────────────────────────────
    RetryFaceVerification,
    RetryNfcVerification,
    RetryTextVerification,

    // ── Call lifecycle ────────────────────────────────────────────────────
    LocalHangedUp,
    CallWait,
    CallStarted,
    RemoteHangedUp,
    ResolutionChanged,
    FaceStoreCompleted,
    /// The engine hung up on its own, e.g. after an ICE timeout.
    ForceHangup,
    /// The agent asked for something. Carries the request text.
    AgentRequest,

    // ── Card detection ────────────────────────────────────────────────────
    CardFrontDetected,
    CardBackDetected,
    CardHoloDetected,
    IdFrontCompleted,

    // ── Screen recorder ───────────────────────────────────────────────────
    ScreenRecorderStarted,
    ScreenRecorderCompleted,
    /// Carries the recorder error code and message.
    ScreenRecorderFailed,
    ScreenRecorderAppended,

    // ── Backend round-trips ───────────────────────────────────────────────
    IntegrationSucceeded,
    IntegrationFailed,
    /// The final verification result arrived. Carries the result.
    ResultGetSucceeded,
    ResultGetFailed,
    SessionStartFailed,
    /// Carries whether the session started and its uid.
    SessionStartSucceeded,
    IdDocStored,
    IdDocStoreFailed,
    NfcStored,
    NfcStoreFailed,
    FaceStored,
    FaceStoreFailed,
    RoomIdSendSucceeded,
    RoomIdSendFailed,

    // ── Agent ─────────────────────────────────────────────────────────────
    AgentCameraDisabled,
    AgentCameraEnabled,

    // ── Call session ──────────────────────────────────────────────────────
    /// BAC key derivation from the document data failed.
    NfcBacDataFailure,
    /// Carries the close status of the call session.
    CallSessionCloseResult,
    MaximumCallTimeExpired,
    VideoAddSucceeded,
    /// Carries the upload failure reason.
    VideoAddFailed,

    // ── Signing and session update ────────────────────────────────────────
    SigningSucceeded,
    SigningFailed,
    SessionUpdateSucceeded,
    SessionUpdateFailed,
}

impl EventKind {
    /// All 72 kinds, in catalogue order.
    pub const ALL: [EventKind; 72] = [
        Self::VideoCallReady,
        Self::SelfServiceReady,
        Self::IdVerifyReady,
        Self::IdSelfVerifyReady,
        Self::IdRetry,
        Self::IdTypeVerified,
        Self::IdDocCompleted,
        Self::IdDocVerified,
        Self::NfcReady,
        Self::NfcRetry,
        Self::NfcCompleted,
        Self::NfcVerified,
        Self::FaceReady,
        Self::FaceRetry,
        Self::FaceDetected,
        Self::SmileDetected,
        Self::FaceCompleted,
        Self::FaceVerified,
        Self::RestartVerification,
        Self::Failure,
        Self::FakeChecked,
        Self::EyeCloseDetected,
        Self::EyeCloseIntervalDetected,
        Self::RightEyeCloseDetected,
        Self::LeftEyeCloseDetected,
        Self::FaceLeftDetected,
        Self::FaceRightDetected,
        Self::FaceUpDetected,
        Self::RetryFaceVerification,
        Self::RetryNfcVerification,
        Self::RetryTextVerification,
        Self::LocalHangedUp,
        Self::CallWait,
        Self::CallStarted,
        Self::RemoteHangedUp,
        Self::ResolutionChanged,
        Self::FaceStoreCompleted,
        Self::ForceHangup,
        Self::AgentRequest,
        Self::CardFrontDetected,
        Self::CardBackDetected,
        Self::CardHoloDetected,
        Self::IdFrontCompleted,
        Self::ScreenRecorderStarted,
        Self::ScreenRecorderCompleted,
        Self::ScreenRecorderFailed,
        Self::ScreenRecorderAppended,
        Self::IntegrationSucceeded,
        Self::IntegrationFailed,
        Self::ResultGetSucceeded,
        Self::ResultGetFailed,
        Self::SessionStartFailed,
        Self::SessionStartSucceeded,
        Self::IdDocStored,
        Self::IdDocStoreFailed,
        Self::NfcStored,
        Self::NfcStoreFailed,
        Self::FaceStored,
        Self::FaceStoreFailed,
        Self::RoomIdSendSucceeded,
        Self::RoomIdSendFailed,
        Self::AgentCameraDisabled,
        Self::AgentCameraEnabled,
        Self::NfcBacDataFailure,
        Self::CallSessionCloseResult,
        Self::MaximumCallTimeExpired,
        Self::VideoAddSucceeded,
        Self::VideoAddFailed,
        Self::SigningSucceeded,
        Self::SigningFailed,
        Self::SessionUpdateSucceeded,
        Self::SessionUpdateFailed,
    ];

    /// Name used on the outbound event stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoCallReady => "videoCallReady",
            Self::SelfServiceReady => "selfServiceReady",
            Self::IdVerifyReady => "idVerifyReady",
            Self::IdSelfVerifyReady => "idSelfVerifyReady",
            Self::IdRetry => "idRetry",
            Self::IdTypeVerified => "idTypeVerified",
            Self::IdDocCompleted => "idDocCompleted",
            Self::IdDocVerified => "idDocVerified",
            Self::NfcReady => "nfcReady",
            Self::NfcRetry => "nfcRetry",
            Self::NfcCompleted => "nfcCompleted",
            Self::NfcVerified => "nfcVerified",
            Self::FaceReady => "faceReady",
            Self::FaceRetry => "faceRetry",
            Self::FaceDetected => "faceDetected",
            Self::SmileDetected => "smileDetected",
            Self::FaceCompleted => "faceCompleted",
            Self::FaceVerified => "faceVerified",
            Self::RestartVerification => "restartVerification",
            Self::Failure => "failure",
            Self::FakeChecked => "fakeChecked",
            Self::EyeCloseDetected => "eyeCloseDetected",
            Self::EyeCloseIntervalDetected => "eyeCloseIntervalDetected",
            Self::RightEyeCloseDetected => "rightEyeCloseDetected",
            Self::LeftEyeCloseDetected => "leftEyeCloseDetected",
            Self::FaceLeftDetected => "faceLeftDetected",
            Self::FaceRightDetected => "faceRightDetected",
            Self::FaceUpDetected => "faceUpDetected",
            Self::RetryFaceVerification => "retryFaceVerification",
            Self::RetryNfcVerification => "retryNfcVerification",
            Self::RetryTextVerification => "retryTextVerification",
            Self::LocalHangedUp => "localHangedUp",
            Self::CallWait => "callWait",
            Self::CallStarted => "callStarted",
            Self::RemoteHangedUp => "remoteHangedUp",
            Self::ResolutionChanged => "resolutionChanged",
            Self::FaceStoreCompleted => "faceStoreCompleted",
            Self::ForceHangup => "forceHangup",
            Self::AgentRequest => "agentRequest",
            Self::CardFrontDetected => "cardFrontDetected",
            Self::CardBackDetected => "cardBackDetected",
            Self::CardHoloDetected => "cardHoloDetected",
            Self::IdFrontCompleted => "idFrontCompleted",
            Self::ScreenRecorderStarted => "screenRecorderStarted",
            Self::ScreenRecorderCompleted => "screenRecorderCompleted",
            Self::ScreenRecorderFailed => "screenRecorderFailed",
            Self::ScreenRecorderAppended => "screenRecorderAppended",
            Self::IntegrationSucceeded => "integrationSucceeded",
            Self::IntegrationFailed => "integrationFailed",
            Self::ResultGetSucceeded => "resultGetSucceeded",
            Self::ResultGetFailed => "resultGetFailed",
            Self::SessionStartFailed => "sessionStartFailed",
            Self::SessionStartSucceeded => "sessionStartSucceeded",
            Self::IdDocStored => "idDocStored",
            Self::IdDocStoreFailed => "idDocStoreFailed",
            Self::NfcStored => "nfcStored",
            Self::NfcStoreFailed => "nfcStoreFailed",
            Self::FaceStored => "faceStored",
            Self::FaceStoreFailed => "faceStoreFailed",
            Self::RoomIdSendSucceeded => "roomIdSendSucceeded",
            Self::RoomIdSendFailed => "roomIdSendFailed",
            Self::AgentCameraDisabled => "agentCameraDisabled",
            Self::AgentCameraEnabled => "agentCameraEnabled",
            Self::NfcBacDataFailure => "nfcBacDataFailure",
            Self::CallSessionCloseResult => "callSessionCloseResult",
            Self::MaximumCallTimeExpired => "maximumCallTimeExpired",
            Self::VideoAddSucceeded => "videoAddSucceeded",
            Self::VideoAddFailed => "videoAddFailed",
            Self::SigningSucceeded => "signingSucceeded",
            Self::SigningFailed => "signingFailed",
            Self::SessionUpdateSucceeded => "sessionUpdateSucceeded",
            Self::SessionUpdateFailed => "sessionUpdateFailed",
        }
    }
}

impl EventKind {
    /// Whether the engine attaches a payload to this notification.
    pub fn carries_payload(&self) -> bool {
        matches!(
            self,
            Self::Failure
                | Self::AgentRequest
                | Self::ScreenRecorderFailed
                | Self::ResultGetSucceeded
                | Self::SessionStartSucceeded
                | Self::CallSessionCloseResult
                | Self::VideoAddFailed
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownEvent(s.to_string()))
    }
}

/// One firing of an engine callback: its kind plus the optional payload.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineEvent {
    kind: EventKind,
    payload: Option<EventPayload>,
}

impl EngineEvent {
    /// A notification without payload.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    pub fn with_payload(kind: EventKind, payload: EventPayload) -> Self {
        Self {
            kind,
            payload: Some(payload),
        }
    }

    pub fn failure(report: FailureReport) -> Self {
        Self::with_payload(
            EventKind::Failure,
            EventPayload::Structured(StructuredPayload::Failure(report)),
        )
    }

    pub fn agent_request(request: impl Into<String>) -> Self {
        Self::with_payload(EventKind::AgentRequest, EventPayload::Text(request.into()))
    }

    pub fn screen_recorder_failed(code: i32, message: Option<String>) -> Self {
        Self::with_payload(
            EventKind::ScreenRecorderFailed,
            EventPayload::Structured(StructuredPayload::RecorderError { code, message }),
        )
    }

    pub fn result_received(result: VerifyCallResult) -> Self {
        Self::with_payload(
            EventKind::ResultGetSucceeded,
            EventPayload::Structured(StructuredPayload::VerifyResult(result)),
        )
    }

    pub fn session_started(succeeded: bool, session_uid: Option<String>) -> Self {
        Self::with_payload(
            EventKind::SessionStartSucceeded,
            EventPayload::Structured(StructuredPayload::SessionStart {
                succeeded,
                session_uid,
            }),
        )
    }

    pub fn call_session_closed(status: impl Into<String>) -> Self {
        Self::with_payload(
            EventKind::CallSessionCloseResult,
            EventPayload::Structured(StructuredPayload::CloseSession {
                status: status.into(),
            }),
        )
    }

    pub fn video_add_failed(reason: impl Into<String>) -> Self {
        Self::with_payload(EventKind::VideoAddFailed, EventPayload::Text(reason.into()))
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload(&self) -> Option<&EventPayload> {
        self.payload.as_ref()
    }

    pub fn into_parts(self) -> (EventKind, Option<EventPayload>) {
        (self.kind, self.payload)
    }
}

impl From<EventKind> for EngineEvent {
    fn from(kind: EventKind) -> Self {
        Self::new(kind)
    }
}
