// This is free and unencumbered software released into the public domain.

#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod cli;
pub mod logging;
pub mod shared;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "android", target_os = "android"))] {
        pub mod ffi;
    }
}
