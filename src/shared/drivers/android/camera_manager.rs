// This is free and unencumbered software released into the public domain.

use super::{CameraDevice, CameraMetadata, CameraResult, CameraStatus};
use crate::shared::EventHub;
use alloc::ffi::CString;
use core::{ffi::CStr, ptr::null_mut};
use ndk_sys::{
    ACameraManager, ACameraManager_create, ACameraManager_delete,
    ACameraManager_deleteCameraIdList, ACameraManager_getCameraCharacteristics,
    ACameraManager_getCameraIdList, ACameraManager_openCamera, camera_status_t,
};
use scopeguard::defer;
use std::sync::Arc;

#[derive(Debug)]
pub struct CameraManager {
    pub(crate) handle: *mut ACameraManager,
}

// The NDK camera manager is documented as thread safe.
unsafe impl Send for CameraManager {}

impl Drop for CameraManager {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe { ACameraManager_delete(self.handle) };
        self.handle = null_mut();
    }
}

impl CameraManager {
    /// Connects to the camera service, or `None` if it is unavailable.
    pub fn new() -> Option<Self> {
        let handle = unsafe { ACameraManager_create() };
        if handle.is_null() {
            return None;
        }
        Some(Self { handle })
    }

    pub fn get_camera_ids(&self) -> CameraResult<Vec<String>> {
        let mut list_ptr = null_mut();
        let status = unsafe { ACameraManager_getCameraIdList(self.handle, &mut list_ptr) };
        CameraStatus::check(status)?;

        defer! {
            unsafe { ACameraManager_deleteCameraIdList(list_ptr); }
        }

        let list = unsafe { &*list_ptr };
        if list.numCameras < 1 || list.cameraIds.is_null() {
            return Ok(Vec::new()); // no devices
        }

        let ids = unsafe { core::slice::from_raw_parts(list.cameraIds, list.numCameras as usize) };

        let result: Vec<String> = ids
            .iter()
            .map(|p| unsafe { CStr::from_ptr(*p).to_string_lossy().into_owned() })
            .collect();

        Ok(result)
    }

    pub fn get_characteristics(&self, id: &str) -> CameraResult<CameraMetadata> {
        let id = camera_id_cstring(id)?;
        let mut metadata = CameraMetadata { handle: null_mut() };
        let status = unsafe {
            ACameraManager_getCameraCharacteristics(self.handle, id.as_ptr(), &mut metadata.handle)
        };
        CameraStatus::check(status)?;
        Ok(metadata)
    }

    pub fn open_camera(&self, id: &str, events: Arc<EventHub>) -> CameraResult<CameraDevice> {
        let id = camera_id_cstring(id)?;

        let mut device = CameraDevice::new(events);
        let status = unsafe {
            ACameraManager_openCamera(
                self.handle,
                id.as_ptr(),
                &mut *device.state_callbacks,
                &mut device.handle,
            )
        };
        tracing::debug!(?status, "ACameraManager_openCamera");
        CameraStatus::check(status)?;

        Ok(device)
    }
}

fn camera_id_cstring(id: &str) -> CameraResult<CString> {
    CString::new(id).map_err(|_| camera_status_t::ACAMERA_ERROR_INVALID_PARAMETER.into())
}
