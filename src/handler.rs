//! The handler contract and the stream-writing handler.
//!
//! A handler is the backend half of the facade split: the facade front
//! ([`Logger`][crate::logger::Logger]) decides whether a record passes the
//! severity threshold, and the handler renders every record it is given.
//! [`LogHandler`] is the contract between the two; [`LineHandler`] is the
//! built-in implementation that renders with a [`Formatter`] and writes
//! one newline-terminated line per record.

use crate::formatter::{Formatter, LineFormatter};
use crate::level::Level;
use crate::metadata::Metadata;
use crate::record::Record;
use crate::writer::{MakeStdout, MakeWriter};
use arc_swap::ArcSwap;
use chrono::Local;
use std::io::Write;

/// A logging backend for one named channel.
///
/// Implementors render and deliver every record passed to [`log`]; the
/// severity threshold exposed through [`level`] is read by the facade
/// front *before* it calls [`log`], never by the handler itself.
///
/// Instance metadata is keyed read/write state that persists across
/// calls. Both it and the threshold may be mutated at any point in the
/// handler's lifetime, including while other threads are logging.
///
/// [`log`]: LogHandler::log
/// [`level`]: LogHandler::level
pub trait LogHandler: Send + Sync + 'static {
    /// Renders and delivers one record.
    fn log(&self, record: Record<'_>);

    /// The name of the channel this handler was created for.
    fn label(&self) -> &str;

    /// The minimum severity a record must have to be handed to [`log`].
    ///
    /// [`log`]: LogHandler::log
    fn level(&self) -> Level;

    /// Replaces the severity threshold.
    fn set_level(&self, level: Level);

    /// Returns the instance metadata value for `key`, if present.
    fn metadata_value(&self, key: &str) -> Option<String>;

    /// Inserts or overwrites the instance metadata value for `key`;
    /// `None` removes the key.
    fn set_metadata_value(&self, key: &str, value: Option<String>);
}

/// A [`LogHandler`] that renders records with a [`Formatter`] and writes
/// each one as a single line to the writer produced by its [`MakeWriter`].
///
/// By default records are rendered by [`LineFormatter`] and written to
/// stdout. Use [`formatter`] and [`writer`] for custom configuration:
///
/// ```
/// use timberline::LineHandler;
///
/// let handler = LineHandler::new("app").writer(std::io::stderr);
/// # let _ = handler;
/// ```
///
/// Mutable state (threshold and instance metadata) lives behind a
/// copy-on-write snapshot: each [`log`] call loads one consistent
/// snapshot, and mutations swap in a new one without disturbing renders
/// already in flight. Line + newline are written with a single
/// `write_all`, so concurrent output interleaves only at line
/// granularity.
///
/// [`formatter`]: LineHandler::formatter
/// [`writer`]: LineHandler::writer
/// [`log`]: LogHandler::log
#[derive(Debug)]
pub struct LineHandler<F = LineFormatter, W = MakeStdout> {
    label: String,
    shared: ArcSwap<Shared>,
    formatter: F,
    make_writer: W,
}

#[derive(Clone, Debug)]
struct Shared {
    level: Level,
    metadata: Metadata,
}

impl LineHandler {
    /// Returns a new handler for the channel named `label`, rendering
    /// with [`LineFormatter`] and writing to stdout.
    ///
    /// The initial threshold is [`Level::Debug`] and the instance
    /// metadata starts empty.
    pub fn new(label: impl Into<String>) -> Self {
        LineHandler {
            label: label.into(),
            shared: ArcSwap::from_pointee(Shared {
                level: Level::Debug,
                metadata: Metadata::new(),
            }),
            formatter: LineFormatter::new(),
            make_writer: MakeStdout,
        }
    }
}

impl<F, W> LineHandler<F, W> {
    /// Set the formatter.
    ///
    /// See the [`Formatter`] trait for details on possible inputs.
    pub fn formatter<F2>(self, formatter: F2) -> LineHandler<F2, W>
    where
        F2: Formatter,
    {
        LineHandler {
            label: self.label,
            shared: self.shared,
            formatter,
            make_writer: self.make_writer,
        }
    }

    /// Set the writer.
    pub fn writer<W2>(self, make_writer: W2) -> LineHandler<F, W2>
    where
        W2: MakeWriter,
    {
        LineHandler {
            label: self.label,
            shared: self.shared,
            formatter: self.formatter,
            make_writer,
        }
    }
}

impl<F, W> LogHandler for LineHandler<F, W>
where
    F: Formatter + Send + Sync + 'static,
    W: MakeWriter + Send + Sync + 'static,
{
    fn log(&self, record: Record<'_>) {
        let shared = self.shared.load();
        let timestamp = Local::now();

        let line = match self.formatter.fmt(&record, &shared.metadata, timestamp) {
            Ok(line) => line,
            Err(_) => return,
        };

        #[cfg(feature = "smallvec")]
        let mut buf = smallvec::SmallVec::<[u8; 256]>::new();
        #[cfg(not(feature = "smallvec"))]
        let mut buf = Vec::with_capacity(256);

        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        // sink failures are not the handler's to report
        let _ = self.make_writer.make_writer().write_all(&buf);
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn level(&self) -> Level {
        self.shared.load().level
    }

    fn set_level(&self, level: Level) {
        self.shared.rcu(|shared| {
            let mut next = Shared::clone(shared);
            next.level = level;
            next
        });
    }

    fn metadata_value(&self, key: &str) -> Option<String> {
        self.shared.load().metadata.get(key).cloned()
    }

    fn set_metadata_value(&self, key: &str, value: Option<String>) {
        self.shared.rcu(|shared| {
            let mut next = Shared::clone(shared);
            match &value {
                Some(value) => next.metadata.insert(key.to_owned(), value.clone()),
                None => next.metadata.remove(key),
            };
            next
        });
    }
}
