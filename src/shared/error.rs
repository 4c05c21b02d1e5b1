// This is free and unencumbered software released into the public domain.

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("no camera platform available for this target")]
    NoDriver,

    #[error("no camera device available")]
    NoCamera,

    #[error("camera device `{0}` not found")]
    CameraNotFound(String),

    #[error("a preview session is already running")]
    AlreadyStarted,

    #[error("driver error while {context}")]
    DriverError {
        context: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{0}")]
    Other(String),
}

impl CameraError {
    #[inline]
    pub fn driver(context: &'static str, source: impl StdError + Send + Sync + 'static) -> Self {
        Self::DriverError {
            context,
            source: Box::new(source),
        }
    }

    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// The operation that failed, for driver errors.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::DriverError { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("status -10001")]
    struct Status;

    #[test]
    fn driver_error_keeps_context_and_source() {
        let err = CameraError::driver("opening camera device", Status);
        assert_eq!(err.context(), Some("opening camera device"));
        assert_eq!(err.to_string(), "driver error while opening camera device");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("status -10001"));
    }

    #[test]
    fn plain_errors_have_no_context() {
        assert_eq!(CameraError::NoCamera.context(), None);
        assert_eq!(
            CameraError::CameraNotFound("2".into()).to_string(),
            "camera device `2` not found"
        );
    }
}
