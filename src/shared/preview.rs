// This is free and unencumbered software released into the public domain.

use crate::shared::{
    CameraError, CameraPlatform, EventHub, PreviewConfig, PreviewListener, RequestTemplate,
    StartPolicy,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Idle,
    Previewing,
}

/// Every native handle held by one preview session. A `None` slot is empty.
pub struct SessionHandles<P: CameraPlatform> {
    pub window: Option<P::Window>,
    pub device: Option<P::Device>,
    pub request: Option<P::Request>,
    pub output_target: Option<P::OutputTarget>,
    pub session_output: Option<P::SessionOutput>,
    pub output_container: Option<P::OutputContainer>,
    pub session: Option<P::Session>,
}

impl<P: CameraPlatform> Default for SessionHandles<P> {
    fn default() -> Self {
        Self {
            window: None,
            device: None,
            request: None,
            output_target: None,
            session_output: None,
            output_container: None,
            session: None,
        }
    }
}

impl<P: CameraPlatform> core::fmt::Debug for SessionHandles<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionHandles")
            .field("window", &self.window.is_some())
            .field("device", &self.device.is_some())
            .field("request", &self.request.is_some())
            .field("output_target", &self.output_target.is_some())
            .field("session_output", &self.session_output.is_some())
            .field("output_container", &self.output_container.is_some())
            .field("session", &self.session.is_some())
            .finish()
    }
}

impl<P: CameraPlatform> SessionHandles<P> {
    pub fn is_empty(&self) -> bool {
        self.window.is_none()
            && self.device.is_none()
            && self.request.is_none()
            && self.output_target.is_none()
            && self.session_output.is_none()
            && self.output_container.is_none()
            && self.session.is_none()
    }
}

/// Owns the single preview session: opens the camera, streams a repeating
/// request onto a window, and tears everything down again.
///
/// All methods take `&mut self`; callers sharing a controller across threads
/// must serialize access (the JNI layer keeps it behind a `Mutex`).
pub struct PreviewController<P: CameraPlatform> {
    platform: P,
    config: PreviewConfig,
    handles: SessionHandles<P>,
    camera_id: Option<String>,
    state: PreviewState,
    events: Arc<EventHub>,
}

impl<P: CameraPlatform> core::fmt::Debug for PreviewController<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreviewController")
            .field("platform", &self.platform.name())
            .field("config", &self.config)
            .field("handles", &self.handles)
            .field("camera_id", &self.camera_id)
            .field("state", &self.state)
            .finish()
    }
}

impl<P: CameraPlatform> Drop for PreviewController<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<P: CameraPlatform> PreviewController<P> {
    pub fn new(platform: P, config: PreviewConfig) -> Self {
        Self {
            platform,
            config,
            handles: SessionHandles::default(),
            camera_id: None,
            state: PreviewState::Idle,
            events: EventHub::new(),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn handles(&self) -> &SessionHandles<P> {
        &self.handles
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// True while any native handle is held, including after a `start`
    /// that failed part-way.
    pub fn holds_handles(&self) -> bool {
        !self.handles.is_empty()
    }

    /// The camera opened by the last `start`, while its device is held.
    pub fn camera_id(&self) -> Option<&str> {
        self.camera_id.as_deref()
    }

    pub fn subscribe(&self, listener: PreviewListener) {
        self.events.subscribe(listener);
    }

    /// Starts streaming preview frames onto `window`, taking ownership of it.
    ///
    /// On failure the handles created so far stay held until [`stop`]; no
    /// later stage runs against a handle that failed to be created.
    ///
    /// [`stop`]: Self::stop
    pub fn start(&mut self, window: P::Window) -> Result<(), CameraError> {
        if self.state == PreviewState::Previewing {
            match self.config.policy {
                StartPolicy::Restart => {
                    warn!("preview already running, restarting it");
                    self.stop();
                },
                StartPolicy::Reject => {
                    warn!("preview already running, rejecting start");
                    self.platform.release_window(window);
                    return Err(CameraError::AlreadyStarted);
                },
            }
        } else if self.holds_handles() {
            debug!("releasing handles left by a failed start");
            self.stop();
        }

        self.handles.window = Some(window);

        let result = self
            .open_camera(self.config.template)
            .and_then(|()| self.start_preview());
        match &result {
            Ok(()) => {
                self.state = PreviewState::Previewing;
                info!(camera_id = ?self.camera_id, "preview started");
            },
            Err(err) => error!(%err, "failed to start preview"),
        }
        result
    }

    fn open_camera(&mut self, template: RequestTemplate) -> Result<(), CameraError> {
        let ids = self.platform.camera_ids().inspect_err(|err| {
            error!(%err, "failed to get camera id list");
        })?;

        if ids.is_empty() {
            error!("no camera device detected");
            return Err(CameraError::NoCamera);
        }

        let camera_id = match self.config.select_camera(&ids) {
            Some(id) => id.to_string(),
            None => {
                let wanted = self.config.device.clone().unwrap_or_default();
                error!(camera_id = %wanted, "configured camera not present");
                return Err(CameraError::CameraNotFound(wanted));
            },
        };

        info!(camera_id = %camera_id, cameras = ids.len(), platform = %self.platform.name(), "opening camera");

        match self.platform.characteristics(&camera_id) {
            Ok(c) => debug!(camera_id = %camera_id, facing = ?c.facing, orientation = ?c.sensor_orientation, "camera characteristics"),
            Err(err) => error!(camera_id = %camera_id, %err, "failed to get camera characteristics"),
        }

        let device = self
            .platform
            .open_camera(&camera_id, Arc::clone(&self.events))
            .inspect_err(|err| error!(camera_id = %camera_id, %err, "failed to open camera device"))?;
        let device = self.handles.device.insert(device);
        self.camera_id = Some(camera_id);

        let request = self
            .platform
            .create_capture_request(device, template)
            .inspect_err(|err| error!(?template, %err, "failed to create capture request"))?;
        self.handles.request = Some(request);

        Ok(())
    }

    fn start_preview(&mut self) -> Result<(), CameraError> {
        let h = &mut self.handles;
        let (Some(window), Some(device), Some(request)) =
            (h.window.as_ref(), h.device.as_ref(), h.request.as_mut())
        else {
            return Err(CameraError::other("camera is not open"));
        };

        let target = self.platform.create_output_target(window)?;
        let target = h.output_target.insert(target);
        self.platform.add_target(request, target)?;

        let output = self.platform.create_session_output(window)?;
        let output = h.session_output.insert(output);

        let container = self.platform.create_output_container()?;
        let container = h.output_container.insert(container);
        self.platform.add_output(container, output)?;

        let session = self.platform.create_capture_session(
            device,
            container,
            Arc::clone(&self.events),
        )?;
        let session = h.session.insert(session);

        self.platform.set_repeating_request(session, request)
    }

    /// Releases every held handle in dependency order. Safe to call at any
    /// time, any number of times.
    pub fn stop(&mut self) {
        if !self.holds_handles() {
            return;
        }

        let h = &mut self.handles;

        if let Some(session) = h.session.take() {
            self.platform.close_session(session);
        }

        if let Some(request) = h.request.take() {
            self.platform.free_request(request);
        }

        if let Some(target) = h.output_target.take() {
            self.platform.free_output_target(target);
        }

        if let Some(device) = h.device.take() {
            if let Err(err) = self.platform.close_device(device) {
                error!(%err, "failed to close camera device");
            }
        }

        if let Some(output) = h.session_output.take() {
            self.platform.free_session_output(output);
        }

        if let Some(container) = h.output_container.take() {
            self.platform.free_output_container(container);
        }

        if let Some(window) = h.window.take() {
            self.platform.release_window(window);
        }

        self.camera_id = None;
        self.state = PreviewState::Idle;
        info!("camera closed");
    }
}
