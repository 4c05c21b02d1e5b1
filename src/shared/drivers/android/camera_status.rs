// This is free and unencumbered software released into the public domain.

use derive_more::Display;
use ndk_sys::camera_status_t;

pub type CameraResult<T = ()> = core::result::Result<T, CameraStatus>;

/// A non-OK `camera_status_t` returned by the NDK.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[display("camera status {} ({})", _0.0, status_name(_0))]
pub struct CameraStatus(pub(crate) camera_status_t);

impl core::error::Error for CameraStatus {}

impl From<camera_status_t> for CameraStatus {
    fn from(input: camera_status_t) -> Self {
        Self(input)
    }
}

impl CameraStatus {
    pub(crate) fn check(status: camera_status_t) -> CameraResult {
        if status == camera_status_t::ACAMERA_OK {
            Ok(())
        } else {
            Err(status.into())
        }
    }

    pub fn code(&self) -> i32 {
        self.0.0 as _
    }

    pub fn name(&self) -> &'static str {
        status_name(&self.0)
    }
}

fn status_name(status: &camera_status_t) -> &'static str {
    match *status {
        camera_status_t::ACAMERA_ERROR_UNKNOWN => "unknown",
        camera_status_t::ACAMERA_ERROR_INVALID_PARAMETER => "invalid parameter",
        camera_status_t::ACAMERA_ERROR_CAMERA_DISCONNECTED => "camera disconnected",
        camera_status_t::ACAMERA_ERROR_NOT_ENOUGH_MEMORY => "not enough memory",
        camera_status_t::ACAMERA_ERROR_METADATA_NOT_FOUND => "metadata not found",
        camera_status_t::ACAMERA_ERROR_CAMERA_DEVICE => "camera device error",
        camera_status_t::ACAMERA_ERROR_CAMERA_SERVICE => "camera service error",
        camera_status_t::ACAMERA_ERROR_SESSION_CLOSED => "session closed",
        camera_status_t::ACAMERA_ERROR_INVALID_OPERATION => "invalid operation",
        camera_status_t::ACAMERA_ERROR_STREAM_CONFIGURE_FAIL => "stream configure failed",
        camera_status_t::ACAMERA_ERROR_CAMERA_IN_USE => "camera in use",
        camera_status_t::ACAMERA_ERROR_MAX_CAMERA_IN_USE => "too many cameras in use",
        camera_status_t::ACAMERA_ERROR_CAMERA_DISABLED => "camera disabled",
        camera_status_t::ACAMERA_ERROR_PERMISSION_DENIED => "permission denied",
        _ => "unrecognized",
    }
}
