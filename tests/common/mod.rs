// This is free and unencumbered software released into the public domain.

//! A recording stand-in for the NDK camera stack.

#![allow(dead_code)]

use native_camera2::shared::{
    CameraCharacteristics, CameraError, CameraPlatform, EventHub, LensFacing, PreviewEvent,
    RequestTemplate,
};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, Mutex, MutexGuard},
};

/// An opaque handle. Not `Clone`, like the NDK pointers it stands in for.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeHandle {
    pub kind: &'static str,
    pub id: u32,
}

#[derive(Debug, Default)]
pub struct Journal {
    /// Every platform call, in order: `create device`, `release request`, ...
    pub calls: Vec<String>,
    pub live: BTreeMap<u32, &'static str>,
    /// Operations that fail when called.
    pub fail: BTreeSet<&'static str>,
    pub hub: Option<Arc<EventHub>>,
    pub template: Option<RequestTemplate>,
    next_id: u32,
}

impl Journal {
    fn call(&mut self, op: &'static str) -> Result<(), CameraError> {
        self.calls.push(op.to_string());
        if self.fail.contains(op) {
            return Err(CameraError::other(format!("{op} failed")));
        }
        Ok(())
    }

    fn create(&mut self, kind: &'static str) -> Result<FakeHandle, CameraError> {
        self.calls.push(format!("create {kind}"));
        if self.fail.contains(kind) {
            return Err(CameraError::other(format!("create {kind} failed")));
        }
        self.next_id += 1;
        self.live.insert(self.next_id, kind);
        Ok(FakeHandle {
            kind,
            id: self.next_id,
        })
    }

    fn release(&mut self, handle: FakeHandle, kind: &'static str) {
        assert_eq!(handle.kind, kind, "released through the wrong call");
        match self.live.remove(&handle.id) {
            Some(_) => self.calls.push(format!("release {kind}")),
            None => panic!("{kind} #{} released twice or never created", handle.id),
        }
    }

    fn assert_live(&self, handle: &FakeHandle) {
        assert!(
            self.live.contains_key(&handle.id),
            "{} #{} used after release",
            handle.kind,
            handle.id
        );
    }

    /// The `release` entries, in call order, without the prefix.
    pub fn releases(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| c.strip_prefix("release "))
            .collect()
    }

    pub fn created(&self, kind: &str) -> bool {
        self.calls.iter().any(|c| c == &format!("create {kind}"))
    }
}

pub type SharedJournal = Arc<Mutex<Journal>>;

pub fn lock(journal: &SharedJournal) -> MutexGuard<'_, Journal> {
    journal.lock().unwrap()
}

/// Hands out a window the way `ANativeWindow_fromSurface` would.
pub fn new_window(journal: &SharedJournal) -> FakeHandle {
    lock(journal).create("window").unwrap()
}

pub struct FakePlatform {
    pub camera_ids: Vec<String>,
    journal: SharedJournal,
}

impl FakePlatform {
    pub fn new(camera_ids: &[&str]) -> (Self, SharedJournal) {
        let journal = SharedJournal::default();
        let platform = Self {
            camera_ids: camera_ids.iter().map(|s| s.to_string()).collect(),
            journal: Arc::clone(&journal),
        };
        (platform, journal)
    }

    fn journal(&self) -> MutexGuard<'_, Journal> {
        lock(&self.journal)
    }
}

impl dogma::Named for FakePlatform {
    fn name(&self) -> Cow<'_, str> {
        "fake".into()
    }
}

impl CameraPlatform for FakePlatform {
    type Window = FakeHandle;
    type Device = FakeHandle;
    type Request = FakeHandle;
    type OutputTarget = FakeHandle;
    type SessionOutput = FakeHandle;
    type OutputContainer = FakeHandle;
    type Session = FakeHandle;

    fn camera_ids(&mut self) -> Result<Vec<String>, CameraError> {
        self.journal().call("camera_ids")?;
        Ok(self.camera_ids.clone())
    }

    fn characteristics(&mut self, camera_id: &str) -> Result<CameraCharacteristics, CameraError> {
        self.journal().call("characteristics")?;
        let facing = if camera_id == "0" {
            LensFacing::Back
        } else {
            LensFacing::Front
        };
        Ok(CameraCharacteristics {
            facing: Some(facing),
            sensor_orientation: Some(90),
        })
    }

    fn open_camera(
        &mut self,
        camera_id: &str,
        events: Arc<EventHub>,
    ) -> Result<FakeHandle, CameraError> {
        let mut j = self.journal();
        assert!(self.camera_ids.iter().any(|id| id == camera_id));
        j.hub = Some(events);
        j.create("device")
    }

    fn create_capture_request(
        &mut self,
        device: &FakeHandle,
        template: RequestTemplate,
    ) -> Result<FakeHandle, CameraError> {
        let mut j = self.journal();
        j.assert_live(device);
        j.template = Some(template);
        j.create("request")
    }

    fn create_output_target(&mut self, window: &FakeHandle) -> Result<FakeHandle, CameraError> {
        let mut j = self.journal();
        j.assert_live(window);
        j.create("output_target")
    }

    fn add_target(
        &mut self,
        request: &mut FakeHandle,
        target: &FakeHandle,
    ) -> Result<(), CameraError> {
        let mut j = self.journal();
        j.assert_live(request);
        j.assert_live(target);
        j.call("add_target")
    }

    fn create_session_output(&mut self, window: &FakeHandle) -> Result<FakeHandle, CameraError> {
        let mut j = self.journal();
        j.assert_live(window);
        j.create("session_output")
    }

    fn create_output_container(&mut self) -> Result<FakeHandle, CameraError> {
        self.journal().create("output_container")
    }

    fn add_output(
        &mut self,
        container: &mut FakeHandle,
        output: &FakeHandle,
    ) -> Result<(), CameraError> {
        let mut j = self.journal();
        j.assert_live(container);
        j.assert_live(output);
        j.call("add_output")
    }

    fn create_capture_session(
        &mut self,
        device: &FakeHandle,
        outputs: &FakeHandle,
        events: Arc<EventHub>,
    ) -> Result<FakeHandle, CameraError> {
        let session = {
            let mut j = self.journal();
            j.assert_live(device);
            j.assert_live(outputs);
            j.create("session")?
        };
        events.emit(PreviewEvent::SessionReady);
        Ok(session)
    }

    fn set_repeating_request(
        &mut self,
        session: &mut FakeHandle,
        request: &FakeHandle,
    ) -> Result<(), CameraError> {
        let mut j = self.journal();
        j.assert_live(session);
        j.assert_live(request);
        j.call("set_repeating")
    }

    fn close_session(&mut self, session: FakeHandle) {
        self.journal().release(session, "session");
    }

    fn free_request(&mut self, request: FakeHandle) {
        self.journal().release(request, "request");
    }

    fn free_output_target(&mut self, target: FakeHandle) {
        self.journal().release(target, "output_target");
    }

    fn close_device(&mut self, device: FakeHandle) -> Result<(), CameraError> {
        let mut j = self.journal();
        j.release(device, "device");
        j.call("close_device")
    }

    fn free_session_output(&mut self, output: FakeHandle) {
        self.journal().release(output, "session_output");
    }

    fn free_output_container(&mut self, container: FakeHandle) {
        self.journal().release(container, "output_container");
    }

    fn release_window(&mut self, window: FakeHandle) {
        self.journal().release(window, "window");
    }
}
