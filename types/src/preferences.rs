//! Tunable engine preferences.
//!
//! Every field has a documented default; numeric fields with a documented
//! range are clamped by [`PreferenceSet::normalized`] before the set is
//! allowed into an [`EngineConfig`](crate::EngineConfig).

use serde::{Deserialize, Serialize};

/// Valid range for the eye-close and smile calibration factors.
pub const CALIBRATION_RANGE: (f64, f64) = (0.1, 1.0);

/// Valid range for the face-detect timeout, in seconds (3 is hard, 30 easy).
pub const FACE_DETECT_TIMEOUT_RANGE: (u32, u32) = (3, 30);

/// Valid range for the OCR check size (10 is hard, 50 easy).
pub const OCR_CHECK_SIZE_RANGE: (u32, u32) = (10, 50);

/// Document text-recognition strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrMode {
    /// Accept the first confident read.
    #[default]
    Fast,
    /// Require repeated agreement; pair with a lower `ocr_check_size`.
    Strict,
}

/// Engine preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceSet {
    // ── Liveness ─────────────────────────────────────────────────────────
    /// Eye-close sensitivity: 0.1 is strict, 1.0 lenient.
    pub eye_close_calibration: f64,
    /// Smile sensitivity: 0.1 is lenient, 1.0 strict.
    pub smiling_calibration: f64,
    pub face_detect_timeout_sec: u32,
    /// Timeout for the eye/smile/head-angle steps.
    pub face_angle_timeout_sec: u32,

    // ── Document ─────────────────────────────────────────────────────────
    pub ocr_mode: OcrMode,
    pub ocr_check_size: u32,
    /// Show engine toast messages while reading the NFC chip.
    pub nfc_toast_messages_enabled: bool,
    /// Release the camera while the NFC step runs.
    pub camera_closes_on_nfc: bool,

    // ── Call ─────────────────────────────────────────────────────────────
    /// Route the video call through the TURN relay from the start.
    pub relay_forced: bool,
    pub call_wait_timeout_ms: u32,
    pub video_resolution: u32,
    /// Re-derived from the environment's media-server flag at build time.
    pub media_server_enabled: bool,
    /// Long ICE checks may force a hang-up.
    pub ice_checking_timeout_sec: u32,
    pub auto_close_enabled: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            eye_close_calibration: 0.3,
            smiling_calibration: 0.7,
            face_detect_timeout_sec: 30,
            face_angle_timeout_sec: 30,
            ocr_mode: OcrMode::Fast,
            ocr_check_size: 50,
            nfc_toast_messages_enabled: false,
            camera_closes_on_nfc: true,
            relay_forced: true,
            call_wait_timeout_ms: 6000,
            video_resolution: 720,
            media_server_enabled: true,
            ice_checking_timeout_sec: 60,
            auto_close_enabled: false,
        }
    }
}

impl PreferenceSet {
    /// Return a copy with every numeric field inside its accepted range.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        Self {
            eye_close_calibration: clamp_calibration(
                self.eye_close_calibration,
                defaults.eye_close_calibration,
            ),
            smiling_calibration: clamp_calibration(
                self.smiling_calibration,
                defaults.smiling_calibration,
            ),
            face_detect_timeout_sec: self
                .face_detect_timeout_sec
                .clamp(FACE_DETECT_TIMEOUT_RANGE.0, FACE_DETECT_TIMEOUT_RANGE.1),
            face_angle_timeout_sec: self.face_angle_timeout_sec.max(1),
            ocr_check_size: self
                .ocr_check_size
                .clamp(OCR_CHECK_SIZE_RANGE.0, OCR_CHECK_SIZE_RANGE.1),
            call_wait_timeout_ms: self.call_wait_timeout_ms.max(1),
            video_resolution: self.video_resolution.max(1),
            ice_checking_timeout_sec: self.ice_checking_timeout_sec.max(1),
            ..self.clone()
        }
    }

    /// Whether every numeric field is already inside its accepted range.
    pub fn is_normalized(&self) -> bool {
        self == &self.normalized()
    }
}

fn clamp_calibration(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(CALIBRATION_RANGE.0, CALIBRATION_RANGE.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_documentation() {
        let prefs = PreferenceSet::default();
        assert_eq!(prefs.eye_close_calibration, 0.3);
        assert_eq!(prefs.smiling_calibration, 0.7);
        assert!(!prefs.nfc_toast_messages_enabled);
        assert!(prefs.relay_forced);
        assert_eq!(prefs.call_wait_timeout_ms, 6000);
        assert_eq!(prefs.video_resolution, 720);
        assert_eq!(prefs.ice_checking_timeout_sec, 60);
        assert_eq!(prefs.face_detect_timeout_sec, 30);
        assert_eq!(prefs.face_angle_timeout_sec, 30);
        assert_eq!(prefs.ocr_mode, OcrMode::Fast);
        assert_eq!(prefs.ocr_check_size, 50);
        assert!(prefs.camera_closes_on_nfc);
        assert!(prefs.is_normalized());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let prefs = PreferenceSet {
            eye_close_calibration: 3.0,
            smiling_calibration: 0.0,
            face_detect_timeout_sec: 1,
            ocr_check_size: 500,
            ..Default::default()
        }
        .normalized();
        assert_eq!(prefs.eye_close_calibration, 1.0);
        assert_eq!(prefs.smiling_calibration, 0.1);
        assert_eq!(prefs.face_detect_timeout_sec, 3);
        assert_eq!(prefs.ocr_check_size, 50);
    }

    #[test]
    fn nan_calibration_falls_back_to_default() {
        let prefs = PreferenceSet {
            smiling_calibration: f64::NAN,
            ..Default::default()
        }
        .normalized();
        assert_eq!(prefs.smiling_calibration, 0.7);
    }

    #[test]
    fn zero_timeouts_are_raised_to_one() {
        let prefs = PreferenceSet {
            call_wait_timeout_ms: 0,
            ice_checking_timeout_sec: 0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(prefs.call_wait_timeout_ms, 1);
        assert_eq!(prefs.ice_checking_timeout_sec, 1);
    }

    #[test]
    fn partial_json_uses_field_defaults() {
        let prefs: PreferenceSet =
            serde_json::from_str(r#"{"ocrMode":"strict","ocrCheckSize":20}"#).unwrap();
        assert_eq!(prefs.ocr_mode, OcrMode::Strict);
        assert_eq!(prefs.ocr_check_size, 20);
        assert_eq!(prefs.video_resolution, 720);
    }
}
