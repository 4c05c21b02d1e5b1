// This is free and unencumbered software released into the public domain.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod event;
pub use event::*;

mod platform;
pub use platform::*;

mod preview;
pub use preview::*;

pub mod drivers {
    #[cfg(all(feature = "android", target_os = "android"))]
    pub mod android;
}

mod open;
pub use open::*;
