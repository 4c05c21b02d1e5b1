// This is free and unencumbered software released into the public domain.

use super::{
    CameraDevice, CameraResult, CameraStatus, CaptureRequest, CaptureSessionOutputContainer,
};
use crate::shared::{EventHub, PreviewEvent};
use alloc::boxed::Box;
use core::{ffi::c_void, ptr::null_mut};
use ndk_sys::{
    ACameraCaptureSession, ACameraCaptureSession_close, ACameraCaptureSession_setRepeatingRequest,
    ACameraCaptureSession_stateCallbacks, ACameraDevice_createCaptureSession,
};
use std::sync::Arc;

#[derive(Debug)]
pub struct CameraCaptureSession {
    handle: *mut ACameraCaptureSession,
    state_callbacks: Box<ACameraCaptureSession_stateCallbacks>,
}

unsafe impl Send for CameraCaptureSession {}

impl Drop for CameraCaptureSession {
    fn drop(&mut self) {
        self.close()
    }
}

impl CameraCaptureSession {
    pub fn open(
        device: &CameraDevice,
        outputs: &CaptureSessionOutputContainer,
        events: Arc<EventHub>,
    ) -> CameraResult<Self> {
        // onClosed may run after close returns, so once a session exists the
        // context reference is never reclaimed and the hub outlives it.
        let state_callbacks = Box::new(ACameraCaptureSession_stateCallbacks {
            context: Arc::into_raw(events) as *mut c_void,
            onClosed: Some(on_closed),
            onReady: Some(on_ready),
            onActive: Some(on_active),
        });
        let mut result = Self {
            handle: null_mut(),
            state_callbacks,
        };

        let status = unsafe {
            ACameraDevice_createCaptureSession(
                device.handle,
                outputs.handle,
                &*result.state_callbacks,
                &mut result.handle,
            )
        };
        tracing::debug!(?status, "ACameraDevice_createCaptureSession");
        if let Err(err) = CameraStatus::check(status) {
            // no session, so no callback can fire
            unsafe { release_context(result.state_callbacks.context) };
            result.state_callbacks.context = null_mut();
            return Err(err);
        }

        Ok(result)
    }

    /// See: https://developer.android.com/ndk/reference/group/camera#acameracapturesession_setrepeatingrequest
    pub fn set_repeating_request(&mut self, request: &CaptureRequest) -> CameraResult {
        let mut requests = request.handle;
        let status = unsafe {
            ACameraCaptureSession_setRepeatingRequest(
                self.handle,
                null_mut(),
                1,
                &mut requests,
                null_mut(),
            )
        };
        tracing::debug!(?status, "ACameraCaptureSession_setRepeatingRequest");
        CameraStatus::check(status)
    }

    /// Closes the session, cancelling its repeating request.
    pub fn close(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe { ACameraCaptureSession_close(self.handle) }
        self.handle = null_mut();
    }
}

/// Drops the hub reference taken by `Arc::into_raw` in [`CameraCaptureSession::open`].
///
/// # Safety
/// `context` must come from that `Arc::into_raw` call and not be used again.
unsafe fn release_context(context: *mut c_void) {
    if !context.is_null() {
        drop(unsafe { Arc::from_raw(context as *const EventHub) });
    }
}

fn emit(context: *mut c_void, event: PreviewEvent) {
    if let Some(events) = unsafe { (context as *const EventHub).as_ref() } {
        events.emit(event);
    }
}

unsafe extern "C" fn on_ready(context: *mut c_void, _session: *mut ACameraCaptureSession) {
    tracing::info!("session is ready");
    emit(context, PreviewEvent::SessionReady);
}

unsafe extern "C" fn on_active(context: *mut c_void, _session: *mut ACameraCaptureSession) {
    tracing::info!("session is activated");
    emit(context, PreviewEvent::SessionActive);
}

unsafe extern "C" fn on_closed(context: *mut c_void, _session: *mut ACameraCaptureSession) {
    tracing::info!("session is closed");
    emit(context, PreviewEvent::SessionClosed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_context_returns_the_hub_reference() {
        let hub = EventHub::new();
        let context = Arc::into_raw(Arc::clone(&hub)) as *mut c_void;
        assert_eq!(Arc::strong_count(&hub), 2);

        unsafe { release_context(context) };

        assert_eq!(Arc::strong_count(&hub), 1);
        unsafe { release_context(null_mut()) };
    }
}
