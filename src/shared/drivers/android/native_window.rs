// This is free and unencumbered software released into the public domain.

use core::ptr::null_mut;
use ndk_sys::{ANativeWindow, ANativeWindow_fromSurface, ANativeWindow_release, JNIEnv, jobject};

/// A reference to the native window behind a Java `android.view.Surface`.
#[derive(Debug)]
pub struct NativeWindow {
    pub(crate) handle: *mut ANativeWindow,
}

// ANativeWindow is reference counted and may be released from any thread.
unsafe impl Send for NativeWindow {}

impl Drop for NativeWindow {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe { ANativeWindow_release(self.handle) };
        self.handle = null_mut();
    }
}

impl NativeWindow {
    /// Acquires the window of `surface`, or `None` if the surface has none.
    ///
    /// # Safety
    /// `env` must be the JNI environment of the calling thread and `surface`
    /// a live local or global reference to an `android.view.Surface`.
    pub unsafe fn from_surface(env: *mut JNIEnv, surface: jobject) -> Option<Self> {
        // See: https://developer.android.com/ndk/reference/group/native-activity#anativewindow_fromsurface
        let handle = unsafe { ANativeWindow_fromSurface(env, surface) };
        if handle.is_null() {
            return None;
        }
        Some(Self { handle })
    }
}
