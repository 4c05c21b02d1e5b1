// This is free and unencumbered software released into the public domain.

use super::{CameraError, CameraInfo};

/// Lists the cameras of the native platform this crate was built for.
pub fn list_cameras() -> Result<Vec<CameraInfo>, CameraError> {
    if cfg!(all(feature = "android", target_os = "android")) {
        #[cfg(all(feature = "android", target_os = "android"))]
        return super::catalog(&mut super::drivers::android::NdkPlatform::new()?);
    }
    Err(CameraError::NoDriver)
}
