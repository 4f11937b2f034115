//! Output target for forensic records.
//!
//! A logger writes to exactly one sink. Production code uses stdout; tests
//! use an in-memory capture buffer.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ForensicError;

enum Target {
    Stdout,
    Capture(CaptureBuffer),
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Where emitted lines go.
pub struct Sink {
    target: Target,
}

impl Sink {
    /// The process's standard output.
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// In-memory sink plus a handle for reading back what was written.
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        let sink = Self {
            target: Target::Capture(buffer.clone()),
        };
        (sink, buffer)
    }

    /// Any writer, e.g. a file or a pipe.
    pub fn writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            target: Target::Writer(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one complete line with a single `write_all`.
    ///
    /// The line is written under a lock, so concurrent lines never interleave.
    pub fn write_line(&self, line: &[u8]) -> Result<(), ForensicError> {
        match &self.target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()?;
            }
            Target::Capture(buffer) => buffer.inner.lock().extend_from_slice(line),
            Target::Writer(writer) => {
                let mut writer = writer.lock();
                writer.write_all(line)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.target {
            Target::Stdout => "stdout",
            Target::Capture(_) => "capture",
            Target::Writer(_) => "writer",
        };
        f.debug_struct("Sink").field("target", &kind).finish()
    }
}

/// Shared handle onto the bytes written to a capture sink.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn byte_len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Every captured line parsed as JSON. Unparsable lines are an error.
    pub fn records(&self) -> Result<Vec<serde_json::Value>, ForensicError> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).map_err(ForensicError::from))
            .collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
