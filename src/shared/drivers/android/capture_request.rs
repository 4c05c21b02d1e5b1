// This is free and unencumbered software released into the public domain.

use super::{CameraDevice, CameraOutputTarget, CameraResult, CameraStatus};
use crate::shared::RequestTemplate;
use core::ptr::null_mut;
use ndk_sys::{
    ACameraDevice_createCaptureRequest, ACameraDevice_request_template, ACaptureRequest,
    ACaptureRequest_addTarget, ACaptureRequest_free,
};

#[derive(Debug)]
pub struct CaptureRequest {
    pub(crate) handle: *mut ACaptureRequest,
}

unsafe impl Send for CaptureRequest {}

impl Drop for CaptureRequest {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe { ACaptureRequest_free(self.handle) }
        self.handle = null_mut();
    }
}

impl CaptureRequest {
    pub fn new(device: &CameraDevice, template: RequestTemplate) -> CameraResult<Self> {
        let mut result = Self { handle: null_mut() };
        let status = unsafe {
            ACameraDevice_createCaptureRequest(
                device.handle,
                request_template(template),
                &mut result.handle,
            )
        };
        tracing::debug!(?status, "ACameraDevice_createCaptureRequest");
        CameraStatus::check(status)?;
        Ok(result)
    }

    pub fn add_target(&mut self, target: &CameraOutputTarget) -> CameraResult {
        let status = unsafe { ACaptureRequest_addTarget(self.handle, target.handle) };
        CameraStatus::check(status)
    }
}

fn request_template(template: RequestTemplate) -> ACameraDevice_request_template {
    match template {
        RequestTemplate::Preview => ACameraDevice_request_template::TEMPLATE_PREVIEW,
        RequestTemplate::StillCapture => ACameraDevice_request_template::TEMPLATE_STILL_CAPTURE,
        RequestTemplate::Record => ACameraDevice_request_template::TEMPLATE_RECORD,
        RequestTemplate::VideoSnapshot => ACameraDevice_request_template::TEMPLATE_VIDEO_SNAPSHOT,
        RequestTemplate::ZeroShutterLag => {
            ACameraDevice_request_template::TEMPLATE_ZERO_SHUTTER_LAG
        },
        RequestTemplate::Manual => ACameraDevice_request_template::TEMPLATE_MANUAL,
    }
}
