use proptest::prelude::*;

use idbridge_types::preferences::{
    CALIBRATION_RANGE, FACE_DETECT_TIMEOUT_RANGE, OCR_CHECK_SIZE_RANGE,
};
use idbridge_types::{DeploymentTier, OcrMode, PreferenceSet};

fn any_preferences() -> impl Strategy<Value = PreferenceSet> {
    (
        (any::<f64>(), any::<f64>(), any::<u32>(), any::<u32>()),
        (any::<bool>(), any::<u32>(), any::<bool>(), any::<bool>()),
        (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>()),
    )
        .prop_map(
            |(
                (eye, smile, face_detect, face_angle),
                (strict, ocr_size, toast, camera_closes),
                (call_wait, resolution, ice, auto_close),
            )| PreferenceSet {
                eye_close_calibration: eye,
                smiling_calibration: smile,
                face_detect_timeout_sec: face_detect,
                face_angle_timeout_sec: face_angle,
                ocr_mode: if strict { OcrMode::Strict } else { OcrMode::Fast },
                ocr_check_size: ocr_size,
                nfc_toast_messages_enabled: toast,
                camera_closes_on_nfc: camera_closes,
                call_wait_timeout_ms: call_wait,
                video_resolution: resolution,
                ice_checking_timeout_sec: ice,
                auto_close_enabled: auto_close,
                ..PreferenceSet::default()
            },
        )
}

proptest! {
    /// Normalized calibrations always land inside the documented range.
    #[test]
    fn normalized_calibrations_in_range(prefs in any_preferences()) {
        let n = prefs.normalized();
        prop_assert!(n.eye_close_calibration >= CALIBRATION_RANGE.0);
        prop_assert!(n.eye_close_calibration <= CALIBRATION_RANGE.1);
        prop_assert!(n.smiling_calibration >= CALIBRATION_RANGE.0);
        prop_assert!(n.smiling_calibration <= CALIBRATION_RANGE.1);
    }

    /// Normalized integer fields respect their bounds.
    #[test]
    fn normalized_integers_in_range(prefs in any_preferences()) {
        let n = prefs.normalized();
        prop_assert!(n.face_detect_timeout_sec >= FACE_DETECT_TIMEOUT_RANGE.0);
        prop_assert!(n.face_detect_timeout_sec <= FACE_DETECT_TIMEOUT_RANGE.1);
        prop_assert!(n.ocr_check_size >= OCR_CHECK_SIZE_RANGE.0);
        prop_assert!(n.ocr_check_size <= OCR_CHECK_SIZE_RANGE.1);
        prop_assert!(n.call_wait_timeout_ms >= 1);
        prop_assert!(n.video_resolution >= 1);
        prop_assert!(n.ice_checking_timeout_sec >= 1);
    }

    /// Normalization is idempotent.
    #[test]
    fn normalize_is_idempotent(prefs in any_preferences()) {
        let once = prefs.normalized();
        prop_assert_eq!(once.normalized(), once);
    }

    /// Flags pass through normalization untouched.
    #[test]
    fn normalize_preserves_flags(prefs in any_preferences()) {
        let n = prefs.normalized();
        prop_assert_eq!(n.ocr_mode, prefs.ocr_mode);
        prop_assert_eq!(n.nfc_toast_messages_enabled, prefs.nfc_toast_messages_enabled);
        prop_assert_eq!(n.camera_closes_on_nfc, prefs.camera_closes_on_nfc);
        prop_assert_eq!(n.auto_close_enabled, prefs.auto_close_enabled);
        prop_assert_eq!(n.relay_forced, prefs.relay_forced);
    }

    /// Arbitrary names either parse to a tier whose name matches, or fail.
    #[test]
    fn tier_parse_never_defaults(name in "[a-zA-Z]{0,10}") {
        match name.parse::<DeploymentTier>() {
            Ok(tier) => prop_assert_eq!(tier.as_str(), name.to_ascii_lowercase()),
            Err(err) => prop_assert_eq!(err.code(), "UNKNOWN_TIER"),
        }
    }
}
