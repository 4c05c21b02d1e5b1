// This is free and unencumbered software released into the public domain.

mod common;

use common::{FakePlatform, lock};
use native_camera2::shared::{CameraCharacteristics, LensFacing, catalog};

#[test]
fn lists_every_camera_with_characteristics() {
    let (mut platform, _journal) = FakePlatform::new(&["0", "1"]);

    let cameras = catalog(&mut platform).unwrap();

    let ids: Vec<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["0", "1"]);
    assert_eq!(cameras[0].characteristics.facing, Some(LensFacing::Back));
    assert_eq!(cameras[1].characteristics.facing, Some(LensFacing::Front));
    assert_eq!(cameras[1].characteristics.sensor_orientation, Some(90));
}

#[test]
fn unreadable_characteristics_still_list_the_camera() {
    let (mut platform, journal) = FakePlatform::new(&["0"]);
    lock(&journal).fail.insert("characteristics");

    let cameras = catalog(&mut platform).unwrap();

    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras[0].characteristics, CameraCharacteristics::default());
}

#[test]
fn enumeration_failure_propagates() {
    let (mut platform, journal) = FakePlatform::new(&["0"]);
    lock(&journal).fail.insert("camera_ids");

    assert!(catalog(&mut platform).is_err());
}

#[test]
fn no_cameras_is_an_empty_list() {
    let (mut platform, _journal) = FakePlatform::new(&[]);

    assert!(catalog(&mut platform).unwrap().is_empty());
}
