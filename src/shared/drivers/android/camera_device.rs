// This is free and unencumbered software released into the public domain.

use super::{CameraResult, CameraStatus};
use crate::shared::{EventHub, PreviewEvent};
use alloc::{borrow::Cow, boxed::Box};
use core::{
    ffi::{CStr, c_int, c_void},
    ptr::null_mut,
};
use ndk_sys::{ACameraDevice, ACameraDevice_StateCallbacks, ACameraDevice_close, ACameraDevice_getId};
use std::sync::Arc;

/// An opened camera device together with the state callbacks registered for
/// it. The callbacks and their context live exactly as long as the device.
#[derive(Debug)]
pub struct CameraDevice {
    pub(crate) handle: *mut ACameraDevice,
    pub(crate) state_callbacks: Box<ACameraDevice_StateCallbacks>,
    events: Arc<EventHub>,
}

// Device handles are only touched by the owning controller; the framework's
// callback threads see nothing but the `EventHub`.
unsafe impl Send for CameraDevice {}

impl Drop for CameraDevice {
    fn drop(&mut self) {
        if let Err(status) = self.close() {
            tracing::error!(%status, "failed to close camera device");
        }
    }
}

impl CameraDevice {
    pub(crate) fn new(events: Arc<EventHub>) -> Self {
        let state_callbacks = Box::new(ACameraDevice_StateCallbacks {
            context: Arc::as_ptr(&events) as *mut c_void,
            onDisconnected: Some(on_disconnected),
            onError: Some(on_error),
        });
        Self {
            handle: null_mut(),
            state_callbacks,
            events,
        }
    }

    pub fn id(&self) -> Option<String> {
        if self.handle.is_null() {
            return None;
        }
        Some(unsafe { device_id(self.handle) }.into_owned())
    }

    pub fn events(&self) -> &Arc<EventHub> {
        &self.events
    }

    /// Closes the device. Closing an already closed device is a no-op.
    pub fn close(&mut self) -> CameraResult {
        if self.handle.is_null() {
            return Ok(());
        }
        let status = unsafe { ACameraDevice_close(self.handle) };
        self.handle = null_mut();
        CameraStatus::check(status)
    }
}

unsafe fn device_id<'a>(device: *mut ACameraDevice) -> Cow<'a, str> {
    let id = unsafe { ACameraDevice_getId(device) };
    if id.is_null() {
        return Cow::Borrowed("?");
    }
    unsafe { CStr::from_ptr(id) }.to_string_lossy()
}

unsafe extern "C" fn on_disconnected(context: *mut c_void, device: *mut ACameraDevice) {
    let camera_id = unsafe { device_id(device) }.into_owned();
    tracing::info!(%camera_id, "camera disconnected");
    if let Some(events) = unsafe { (context as *const EventHub).as_ref() } {
        events.emit(PreviewEvent::DeviceDisconnected { camera_id });
    }
}

unsafe extern "C" fn on_error(context: *mut c_void, device: *mut ACameraDevice, error: c_int) {
    let camera_id = unsafe { device_id(device) }.into_owned();
    tracing::error!(%camera_id, code = error, "camera device error");
    if let Some(events) = unsafe { (context as *const EventHub).as_ref() } {
        events.emit(PreviewEvent::DeviceError {
            camera_id,
            code: error as i32,
        });
    }
}
