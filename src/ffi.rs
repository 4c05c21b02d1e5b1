// This is free and unencumbered software released into the public domain.

//! JNI entry points of `org.freedesktop.nativecamera2.NativeCamera2`.
//!
//! ```java
//! public static native void startPreview(Surface surface);
//! public static native void stopPreview();
//! ```
//!
//! Neither method reports failure to Java: errors are logged to logcat.

use crate::{
    logging,
    shared::{
        PreviewConfig, PreviewController,
        drivers::android::{NativeWindow, NdkPlatform},
    },
};
use jni::{
    JNIEnv,
    objects::{JClass, JObject},
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

/// The one preview session of the process. Created by the first
/// `startPreview`, kept for the lifetime of the library.
static PREVIEW: Mutex<Option<PreviewController<NdkPlatform>>> = Mutex::new(None);

fn preview() -> MutexGuard<'static, Option<PreviewController<NdkPlatform>>> {
    PREVIEW.lock().unwrap_or_else(PoisonError::into_inner)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_freedesktop_nativecamera2_NativeCamera2_startPreview(
    env: JNIEnv,
    _class: JClass,
    surface: JObject,
) {
    logging::init();

    if surface.as_raw().is_null() {
        error!("startPreview called with a null surface");
        return;
    }

    let Some(window) =
        (unsafe { NativeWindow::from_surface(env.get_raw().cast(), surface.as_raw().cast()) })
    else {
        error!("surface has no native window");
        return;
    };
    info!(surface = ?surface.as_raw(), "surface is prepared");

    let mut guard = preview();
    if guard.is_none() {
        match NdkPlatform::new() {
            Ok(platform) => *guard = Some(PreviewController::new(platform, PreviewConfig::default())),
            Err(err) => {
                error!(%err, "failed to connect to the camera service");
                return;
            },
        }
    }

    if let Some(controller) = guard.as_mut() {
        // failures are logged by the controller
        let _ = controller.start(window);
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_freedesktop_nativecamera2_NativeCamera2_stopPreview(
    _env: JNIEnv,
    _class: JClass,
) {
    logging::init();

    if let Some(controller) = preview().as_mut() {
        controller.stop();
    }
}
