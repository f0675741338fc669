//! Utilities for choosing where rendered lines are written.
//!
//! A handler holds a [`MakeWriter`] rather than a writer so that it can
//! acquire a fresh writer per record and issue a single `write_all` for
//! the whole line. That single write is the serialization point: the
//! handler itself never locks, so concurrent callers interleave at line
//! granularity at the sink, not mid-line.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

/// A type that produces an [`io::Write`] for each rendered line.
///
/// This trait is implemented for all `Fn() -> W` where `W: io::Write`,
/// so `std::io::stdout` and `std::io::stderr` can be used directly.
pub trait MakeWriter {
    /// The writer produced for a single line.
    type Writer: io::Write;

    /// Returns a new writer.
    fn make_writer(&self) -> Self::Writer;
}

impl<F, W> MakeWriter for F
where
    F: Fn() -> W,
    W: io::Write,
{
    type Writer = W;

    fn make_writer(&self) -> W {
        self()
    }
}

/// A [`MakeWriter`] that writes to stdout.
///
/// This is functionally the same as using [`std::io::stdout`] as a
/// `MakeWriter`, except it has a named type and can therefore be used in
/// type signatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeStdout;

/// A [`MakeWriter`] that writes to stderr.
///
/// This is functionally the same as using [`std::io::stderr`] as a
/// `MakeWriter`, except it has a named type and can therefore be used in
/// type signatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeStderr;

impl MakeWriter for MakeStdout {
    type Writer = io::Stdout;

    fn make_writer(&self) -> io::Stdout {
        io::stdout()
    }
}

impl MakeWriter for MakeStderr {
    type Writer = io::Stderr;

    fn make_writer(&self) -> io::Stderr {
        io::stderr()
    }
}

/// A [`MakeWriter`] that collects lines into a shared in-memory buffer.
///
/// Clones share the same buffer, so a `Capture` can be handed to a
/// handler while the test keeps a handle for inspection.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use timberline::writer::Capture;
/// use timberline::{LineHandler, Logger};
///
/// let capture = Capture::new();
/// let handler = LineHandler::new("test").writer(capture.clone());
/// let logger = Logger::with_handler(Arc::new(handler));
///
/// timberline::info!(logger, "captured");
/// assert!(capture.contents().contains("captured"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Returns a new `Capture` with an empty buffer.
    pub fn new() -> Self {
        Capture::default()
    }

    /// Returns everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Returns the captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MakeWriter for Capture {
    type Writer = Capture;

    fn make_writer(&self) -> Capture {
        self.clone()
    }
}
