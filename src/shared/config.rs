// This is free and unencumbered software released into the public domain.

use crate::shared::RequestTemplate;

/// What `start` does when a preview session is already running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPolicy {
    /// Tear the running session down, then start a new one.
    #[default]
    Restart,
    /// Refuse with [`CameraError::AlreadyStarted`](crate::shared::CameraError::AlreadyStarted).
    Reject,
}

#[derive(Clone, Debug, Default)]
pub struct PreviewConfig {
    /// Camera id to open. `None` picks the first enumerated camera.
    pub device: Option<String>,
    pub template: RequestTemplate,
    pub policy: StartPolicy,
}

impl PreviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn with_template(mut self, template: RequestTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_policy(mut self, policy: StartPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Picks the camera to open out of the enumerated ids.
    pub fn select_camera<'a>(&self, ids: &'a [String]) -> Option<&'a str> {
        match &self.device {
            Some(wanted) => ids.iter().find(|id| *id == wanted).map(String::as_str),
            None => ids.first().map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_first_camera_and_preview() {
        let config = PreviewConfig::default();
        assert_eq!(config.template, RequestTemplate::Preview);
        assert_eq!(config.policy, StartPolicy::Restart);
        assert_eq!(config.select_camera(&ids(&["0", "1"])), Some("0"));
        assert_eq!(config.select_camera(&[]), None);
    }

    #[test]
    fn selects_configured_camera() {
        let config = PreviewConfig::new().with_device("1");
        assert_eq!(config.select_camera(&ids(&["0", "1"])), Some("1"));
        assert_eq!(config.select_camera(&ids(&["0"])), None);
    }
}
