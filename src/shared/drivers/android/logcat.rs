// This is free and unencumbered software released into the public domain.

use alloc::ffi::CString;
use core::ffi::{CStr, c_char, c_int};
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub const TAG: &CStr = c"native-camera2";

// Priorities from <android/log.h>.
const ANDROID_LOG_VERBOSE: c_int = 2;
const ANDROID_LOG_DEBUG: c_int = 3;
const ANDROID_LOG_INFO: c_int = 4;
const ANDROID_LOG_WARN: c_int = 5;
const ANDROID_LOG_ERROR: c_int = 6;

#[link(name = "log")]
unsafe extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

/// Routes formatted `tracing` events to logcat, one log entry per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logcat;

impl<'a> MakeWriter<'a> for Logcat {
    type Writer = LogcatWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogcatWriter::new(&Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LogcatWriter::new(meta.level())
    }
}

#[derive(Debug)]
pub struct LogcatWriter {
    priority: c_int,
    buffer: Vec<u8>,
}

impl LogcatWriter {
    fn new(level: &Level) -> Self {
        let priority = match *level {
            Level::ERROR => ANDROID_LOG_ERROR,
            Level::WARN => ANDROID_LOG_WARN,
            Level::INFO => ANDROID_LOG_INFO,
            Level::DEBUG => ANDROID_LOG_DEBUG,
            _ => ANDROID_LOG_VERBOSE,
        };
        Self {
            priority,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl io::Write for LogcatWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogcatWriter {
    fn drop(&mut self) {
        while self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.is_empty() {
            return;
        }
        let mut bytes = core::mem::take(&mut self.buffer);
        bytes.retain(|b| *b != 0);
        let Ok(text) = CString::new(bytes) else {
            return;
        };
        unsafe {
            __android_log_write(self.priority, TAG.as_ptr(), text.as_ptr());
        }
    }
}
