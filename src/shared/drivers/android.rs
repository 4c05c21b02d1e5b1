// This is free and unencumbered software released into the public domain.

//! The NDK Camera2 platform.
//!
//! Each handle kind is an RAII wrapper that frees its native object on drop,
//! so the release operations of [`NdkPlatform`] are plain drops, except for
//! the device whose close status is reported.

use crate::shared::{
    CameraCharacteristics, CameraError, CameraPlatform, EventHub, RequestTemplate,
};
use alloc::borrow::Cow;
use ndk_sys::android_get_device_api_level;
use std::sync::Arc;

mod camera_capture_session;
pub use camera_capture_session::*;

mod camera_device;
pub use camera_device::*;

mod camera_manager;
pub use camera_manager::*;

mod camera_metadata;
pub use camera_metadata::*;

mod camera_output_target;
pub use camera_output_target::*;

mod camera_status;
pub use camera_status::*;

mod capture_request;
pub use capture_request::*;

mod capture_session_output;
pub use capture_session_output::*;

mod capture_session_output_container;
pub use capture_session_output_container::*;

pub mod logcat;

mod native_window;
pub use native_window::*;

#[link(name = "camera2ndk")]
unsafe extern "C" {}

#[link(name = "android")]
unsafe extern "C" {}

/// The first API level shipping the NDK camera library.
pub const MIN_API_LEVEL: i32 = 24;

#[derive(Debug)]
pub struct NdkPlatform {
    manager: CameraManager,
}

impl NdkPlatform {
    pub fn new() -> Result<Self, CameraError> {
        let api_level = unsafe { android_get_device_api_level() };
        tracing::debug!(api_level, "android_get_device_api_level");
        check_api_level(api_level)?;

        let manager = CameraManager::new().ok_or(CameraError::NoDriver)?;
        Ok(Self { manager })
    }
}

/// Fails with [`CameraError::NoDriver`] below [`MIN_API_LEVEL`], or when the
/// level is unknown (-1).
pub fn check_api_level(api_level: i32) -> Result<(), CameraError> {
    if api_level < MIN_API_LEVEL {
        tracing::error!(api_level, min = MIN_API_LEVEL, "camera2 NDK is unavailable");
        return Err(CameraError::NoDriver);
    }
    Ok(())
}

impl dogma::Named for NdkPlatform {
    fn name(&self) -> Cow<'_, str> {
        "camera2".into()
    }
}

impl CameraPlatform for NdkPlatform {
    type Window = NativeWindow;
    type Device = CameraDevice;
    type Request = CaptureRequest;
    type OutputTarget = CameraOutputTarget;
    type SessionOutput = CaptureSessionOutput;
    type OutputContainer = CaptureSessionOutputContainer;
    type Session = CameraCaptureSession;

    fn camera_ids(&mut self) -> Result<Vec<String>, CameraError> {
        self.manager
            .get_camera_ids()
            .map_err(|s| CameraError::driver("getting camera id list", s))
    }

    fn characteristics(&mut self, camera_id: &str) -> Result<CameraCharacteristics, CameraError> {
        self.manager
            .get_characteristics(camera_id)
            .map(|metadata| metadata.characteristics())
            .map_err(|s| CameraError::driver("getting camera characteristics", s))
    }

    fn open_camera(
        &mut self,
        camera_id: &str,
        events: Arc<EventHub>,
    ) -> Result<CameraDevice, CameraError> {
        self.manager
            .open_camera(camera_id, events)
            .map_err(|s| CameraError::driver("opening camera device", s))
    }

    fn create_capture_request(
        &mut self,
        device: &CameraDevice,
        template: RequestTemplate,
    ) -> Result<CaptureRequest, CameraError> {
        CaptureRequest::new(device, template)
            .map_err(|s| CameraError::driver("creating capture request", s))
    }

    fn create_output_target(
        &mut self,
        window: &NativeWindow,
    ) -> Result<CameraOutputTarget, CameraError> {
        CameraOutputTarget::new(window)
            .map_err(|s| CameraError::driver("creating camera output target", s))
    }

    fn add_target(
        &mut self,
        request: &mut CaptureRequest,
        target: &CameraOutputTarget,
    ) -> Result<(), CameraError> {
        request
            .add_target(target)
            .map_err(|s| CameraError::driver("adding capture request target", s))
    }

    fn create_session_output(
        &mut self,
        window: &NativeWindow,
    ) -> Result<CaptureSessionOutput, CameraError> {
        CaptureSessionOutput::new(window)
            .map_err(|s| CameraError::driver("creating capture session output", s))
    }

    fn create_output_container(&mut self) -> Result<CaptureSessionOutputContainer, CameraError> {
        CaptureSessionOutputContainer::new()
            .map_err(|s| CameraError::driver("creating session output container", s))
    }

    fn add_output(
        &mut self,
        container: &mut CaptureSessionOutputContainer,
        output: &CaptureSessionOutput,
    ) -> Result<(), CameraError> {
        container
            .add(output)
            .map_err(|s| CameraError::driver("adding session output", s))
    }

    fn create_capture_session(
        &mut self,
        device: &CameraDevice,
        outputs: &CaptureSessionOutputContainer,
        events: Arc<EventHub>,
    ) -> Result<CameraCaptureSession, CameraError> {
        CameraCaptureSession::open(device, outputs, events)
            .map_err(|s| CameraError::driver("creating capture session", s))
    }

    fn set_repeating_request(
        &mut self,
        session: &mut CameraCaptureSession,
        request: &CaptureRequest,
    ) -> Result<(), CameraError> {
        session
            .set_repeating_request(request)
            .map_err(|s| CameraError::driver("setting repeating request", s))
    }

    fn close_session(&mut self, session: CameraCaptureSession) {
        drop(session);
    }

    fn free_request(&mut self, request: CaptureRequest) {
        drop(request);
    }

    fn free_output_target(&mut self, target: CameraOutputTarget) {
        drop(target);
    }

    fn close_device(&mut self, mut device: CameraDevice) -> Result<(), CameraError> {
        device
            .close()
            .map_err(|s| CameraError::driver("closing camera device", s))
    }

    fn free_session_output(&mut self, output: CaptureSessionOutput) {
        drop(output);
    }

    fn free_output_container(&mut self, container: CaptureSessionOutputContainer) {
        drop(container);
    }

    fn release_window(&mut self, window: NativeWindow) {
        drop(window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_level_below_24_has_no_driver() {
        assert!(check_api_level(MIN_API_LEVEL).is_ok());
        assert!(check_api_level(34).is_ok());
        assert!(matches!(check_api_level(23), Err(CameraError::NoDriver)));
        assert!(matches!(check_api_level(-1), Err(CameraError::NoDriver)));
    }
}
