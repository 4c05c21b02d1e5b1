// This is free and unencumbered software released into the public domain.

use crate::shared::{CameraCharacteristics, LensFacing};
use core::{mem::zeroed, ptr::null_mut};
use ndk_sys::{
    ACameraMetadata, ACameraMetadata_const_entry, ACameraMetadata_free,
    ACameraMetadata_getConstEntry, acamera_metadata_tag, camera_status_t,
};

const LENS_FACING: u32 = acamera_metadata_tag::ACAMERA_LENS_FACING.0 as u32;
const SENSOR_ORIENTATION: u32 = acamera_metadata_tag::ACAMERA_SENSOR_ORIENTATION.0 as u32;

#[derive(Debug)]
pub struct CameraMetadata {
    pub(crate) handle: *mut ACameraMetadata,
}

impl Drop for CameraMetadata {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe { ACameraMetadata_free(self.handle) };
        self.handle = null_mut();
    }
}

impl CameraMetadata {
    fn entry(&self, tag: u32) -> Option<ACameraMetadata_const_entry> {
        let mut entry: ACameraMetadata_const_entry = unsafe { zeroed() };
        let status = unsafe { ACameraMetadata_getConstEntry(self.handle, tag, &mut entry) };
        if status != camera_status_t::ACAMERA_OK || entry.count < 1 {
            return None;
        }
        Some(entry)
    }

    pub fn lens_facing(&self) -> Option<LensFacing> {
        let entry = self.entry(LENS_FACING)?;
        LensFacing::from_raw(unsafe { *entry.data.u8_ })
    }

    pub fn sensor_orientation(&self) -> Option<i32> {
        let entry = self.entry(SENSOR_ORIENTATION)?;
        Some(unsafe { *entry.data.i32_ })
    }

    pub fn characteristics(&self) -> CameraCharacteristics {
        CameraCharacteristics {
            facing: self.lens_facing(),
            sensor_orientation: self.sensor_orientation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_section_and_index() {
        // ACAMERA_LENS (8), index 5; ACAMERA_SENSOR (14), index 14
        assert_eq!(LENS_FACING, 0x0008_0005);
        assert_eq!(SENSOR_ORIENTATION, 0x000E_000E);
    }
}
