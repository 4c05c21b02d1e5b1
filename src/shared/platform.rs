// This is free and unencumbered software released into the public domain.

use crate::shared::{CameraError, EventHub};
use std::sync::Arc;

/// Capture-intent template a capture request is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestTemplate {
    #[default]
    Preview,
    StillCapture,
    Record,
    VideoSnapshot,
    ZeroShutterLag,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LensFacing {
    Front,
    Back,
    External,
}

impl LensFacing {
    /// Maps the `android.lens.facing` metadata value.
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Front),
            1 => Some(Self::Back),
            2 => Some(Self::External),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::External => "external",
        }
    }
}

/// The subset of camera characteristics this crate reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CameraCharacteristics {
    pub facing: Option<LensFacing>,
    pub sensor_orientation: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraInfo {
    pub id: String,
    pub characteristics: CameraCharacteristics,
}

/// The native camera stack, one method per platform call the preview
/// pipeline makes.
///
/// Handles are owned values: every `create_*`/`open_*` hands one out and the
/// matching `free_*`/`close_*`/`release_*` consumes it, so a handle can be
/// released at most once.
pub trait CameraPlatform: dogma::Named + Send {
    type Window: Send;
    type Device: Send;
    type Request: Send;
    type OutputTarget: Send;
    type SessionOutput: Send;
    type OutputContainer: Send;
    type Session: Send;

    fn camera_ids(&mut self) -> Result<Vec<String>, CameraError>;

    fn characteristics(&mut self, camera_id: &str) -> Result<CameraCharacteristics, CameraError>;

    /// Opens a camera. Disconnect and error callbacks are reported to `events`.
    fn open_camera(
        &mut self,
        camera_id: &str,
        events: Arc<EventHub>,
    ) -> Result<Self::Device, CameraError>;

    fn create_capture_request(
        &mut self,
        device: &Self::Device,
        template: RequestTemplate,
    ) -> Result<Self::Request, CameraError>;

    fn create_output_target(
        &mut self,
        window: &Self::Window,
    ) -> Result<Self::OutputTarget, CameraError>;

    fn add_target(
        &mut self,
        request: &mut Self::Request,
        target: &Self::OutputTarget,
    ) -> Result<(), CameraError>;

    fn create_session_output(
        &mut self,
        window: &Self::Window,
    ) -> Result<Self::SessionOutput, CameraError>;

    fn create_output_container(&mut self) -> Result<Self::OutputContainer, CameraError>;

    fn add_output(
        &mut self,
        container: &mut Self::OutputContainer,
        output: &Self::SessionOutput,
    ) -> Result<(), CameraError>;

    /// Creates a capture session. Ready, active and closed callbacks are
    /// reported to `events`.
    fn create_capture_session(
        &mut self,
        device: &Self::Device,
        outputs: &Self::OutputContainer,
        events: Arc<EventHub>,
    ) -> Result<Self::Session, CameraError>;

    fn set_repeating_request(
        &mut self,
        session: &mut Self::Session,
        request: &Self::Request,
    ) -> Result<(), CameraError>;

    fn close_session(&mut self, session: Self::Session);

    fn free_request(&mut self, request: Self::Request);

    fn free_output_target(&mut self, target: Self::OutputTarget);

    fn close_device(&mut self, device: Self::Device) -> Result<(), CameraError>;

    fn free_session_output(&mut self, output: Self::SessionOutput);

    fn free_output_container(&mut self, container: Self::OutputContainer);

    fn release_window(&mut self, window: Self::Window);
}

/// Enumerates every camera with its characteristics summary.
///
/// Cameras whose characteristics cannot be read are still listed, with an
/// empty summary.
pub fn catalog<P: CameraPlatform>(platform: &mut P) -> Result<Vec<CameraInfo>, CameraError> {
    let ids = platform.camera_ids()?;
    let mut result = Vec::with_capacity(ids.len());
    for id in ids {
        let characteristics = match platform.characteristics(&id) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(camera_id = %id, %err, "failed to read camera characteristics");
                CameraCharacteristics::default()
            },
        };
        result.push(CameraInfo {
            id,
            characteristics,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_facing_from_metadata() {
        assert_eq!(LensFacing::from_raw(0), Some(LensFacing::Front));
        assert_eq!(LensFacing::from_raw(1), Some(LensFacing::Back));
        assert_eq!(LensFacing::from_raw(2), Some(LensFacing::External));
        assert_eq!(LensFacing::from_raw(3), None);
        assert_eq!(LensFacing::Back.as_str(), "back");
    }
}
