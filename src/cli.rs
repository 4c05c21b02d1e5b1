// This is free and unencumbered software released into the public domain.

//! CLI helpers (error reporting, verbosity handling, camera listing output).
//!
//! This module must compile even when the crate feature `cli` is disabled,
//! because the library is built in non-CLI configurations.

#[cfg(feature = "cli")]
use crate::shared::{CameraError, CameraInfo};

#[cfg(feature = "cli")]
use asimov_module::SysexitsError::{self, *};

#[cfg(feature = "cli")]
use clientele::StandardOptions;

#[cfg(feature = "cli")]
pub fn handle_error(err: &CameraError, flags: &StandardOptions) -> SysexitsError {
    tracing::error!(%err, "camera command failed");

    if flags.debug || flags.verbose >= 2 {
        tracing::debug!(?err, "detailed error");
    }

    report_error(err, flags);
    map_error_to_sysexit(err)
}

#[cfg(feature = "cli")]
pub fn info_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("INFO: {msg}");
    }
    tracing::info!("{msg}");
}

#[cfg(feature = "cli")]
pub fn warn_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("WARN: {msg}");
    }
    tracing::warn!("{msg}");
}

/// One line of `cataloger` text output: `id: facing, orientation`.
#[cfg(feature = "cli")]
pub fn camera_line(camera: &CameraInfo) -> String {
    let c = &camera.characteristics;
    let facing = c.facing.map(|f| f.as_str()).unwrap_or("unknown");
    match c.sensor_orientation {
        Some(degrees) => format!("{}: {facing} [{degrees}°]", camera.id),
        None => format!("{}: {facing}", camera.id),
    }
}

#[cfg(feature = "cli")]
pub fn camera_json(camera: &CameraInfo) -> serde_json::Value {
    let c = &camera.characteristics;
    serde_json::json!({
        "id": camera.id,
        "facing": c.facing.map(|f| f.as_str()),
        "orientation": c.sensor_orientation,
    })
}

#[cfg(feature = "cli")]
fn report_error(err: &CameraError, flags: &StandardOptions) {
    use std::error::Error as _;
    use std::io::Write;

    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "ERROR: {err}");

    if flags.debug || flags.verbose >= 2 {
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = writeln!(stderr, "  Caused by: {}", cause);
            source = cause.source();
        }
    }
}

#[cfg(feature = "cli")]
fn map_error_to_sysexit(err: &CameraError) -> SysexitsError {
    match err {
        CameraError::NoDriver => EX_UNAVAILABLE,
        CameraError::NoCamera => EX_UNAVAILABLE,
        CameraError::CameraNotFound(_) => EX_USAGE,
        CameraError::AlreadyStarted => EX_SOFTWARE,
        CameraError::DriverError { .. } => EX_SOFTWARE,
        CameraError::Other(_) => EX_SOFTWARE,
    }
}

// When `cli` is disabled, keep the module linkable without exposing CLI-only types.
#[cfg(not(feature = "cli"))]
#[inline]
pub fn info_user(_msg: &str) {}

#[cfg(not(feature = "cli"))]
#[inline]
pub fn warn_user(_msg: &str) {}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::shared::{CameraCharacteristics, LensFacing};

    fn back_camera() -> CameraInfo {
        CameraInfo {
            id: "0".into(),
            characteristics: CameraCharacteristics {
                facing: Some(LensFacing::Back),
                sensor_orientation: Some(90),
            },
        }
    }

    #[test]
    fn text_line_includes_facing_and_orientation() {
        assert_eq!(camera_line(&back_camera()), "0: back [90°]");

        let bare = CameraInfo {
            id: "5".into(),
            characteristics: CameraCharacteristics::default(),
        };
        assert_eq!(camera_line(&bare), "5: unknown");
    }

    #[test]
    fn json_line_uses_null_for_missing_characteristics() {
        assert_eq!(
            camera_json(&back_camera()),
            serde_json::json!({ "id": "0", "facing": "back", "orientation": 90 })
        );

        let bare = CameraInfo {
            id: "5".into(),
            characteristics: CameraCharacteristics::default(),
        };
        assert_eq!(
            camera_json(&bare),
            serde_json::json!({ "id": "5", "facing": null, "orientation": null })
        );
    }
}
