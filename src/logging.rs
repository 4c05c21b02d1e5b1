// This is free and unencumbered software released into the public domain.

//! Process-wide `tracing` subscriber for the library when it is loaded by an
//! application, which installs none of its own.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Overrides [`DEFAULT_FILTER`] with `EnvFilter` directives, e.g.
/// `native_camera2=debug`.
pub const FILTER_ENV: &str = "NATIVE_CAMERA2_LOG";

pub const DEFAULT_FILTER: &str = "native_camera2=info";

/// The `EnvFilter` built from `directives`, falling back to
/// [`DEFAULT_FILTER`] when they are unset, empty or invalid.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the subscriber once; later calls do nothing. Does not replace a
/// subscriber the host already installed.
pub fn init() {
    INIT.call_once(|| {
        let directives = std::env::var(FILTER_ENV).ok();
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter(directives.as_deref()))
            .with_ansi(false)
            .with_target(false);

        // logcat stamps time and priority itself
        #[cfg(all(feature = "android", target_os = "android"))]
        let result = builder
            .without_time()
            .with_level(false)
            .with_writer(crate::shared::drivers::android::logcat::Logcat)
            .try_init();

        #[cfg(not(all(feature = "android", target_os = "android")))]
        let result = builder.with_writer(std::io::stderr).try_init();

        if result.is_err() {
            tracing::debug!("a tracing subscriber is already installed");
        }
    });
}
