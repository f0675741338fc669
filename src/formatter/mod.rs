//! Trait for rendering records into output lines.
//!
//! See [`Formatter`] for more details.

use crate::metadata::Metadata;
use crate::record::Record;
use chrono::{DateTime, Local};
use std::error::Error;

mod line;
pub use line::LineFormatter;

/// Renders a [`Record`] into a single output line.
///
/// The handler captures the wall clock once per record and passes the
/// timestamp in, so a `Formatter` is a pure function of its arguments:
/// rendering the same record with the same timestamp twice yields
/// byte-identical lines.
///
/// The returned line carries no trailing newline; the handler
/// newline-terminates it when writing to the sink.
///
/// # Examples
///
/// This trait implements all `Fn(&Record, &Metadata, DateTime<Local>) ->
/// Result<String, E>` types, where `E: Error + Send + Sync`, so a closure
/// or top-level `fn` can be used wherever a `Formatter` is required:
///
/// ```
/// use chrono::{DateTime, Local};
/// use timberline::{LineHandler, Metadata, Record};
///
/// fn terse(
///     record: &Record<'_>,
///     _metadata: &Metadata,
///     _timestamp: DateTime<Local>,
/// ) -> Result<String, std::fmt::Error> {
///     Ok(format!("{}: {}", record.level, record.message))
/// }
///
/// let handler = LineHandler::new("terse").formatter(terse);
/// # let _ = handler;
/// ```
pub trait Formatter {
    /// The error type if the record cannot be rendered.
    type Error: Error + Send + Sync;

    /// Renders the record, merging `metadata` (the handler's instance
    /// metadata) with the record's own call metadata.
    ///
    /// # Errors
    ///
    /// If the record cannot be rendered to a string, an error is returned
    /// and the handler drops the record.
    fn fmt(
        &self,
        record: &Record<'_>,
        metadata: &Metadata,
        timestamp: DateTime<Local>,
    ) -> Result<String, Self::Error>;
}

impl<F, E> Formatter for F
where
    F: Fn(&Record<'_>, &Metadata, DateTime<Local>) -> Result<String, E>,
    E: Error + Send + Sync,
{
    type Error = E;

    #[inline]
    fn fmt(
        &self,
        record: &Record<'_>,
        metadata: &Metadata,
        timestamp: DateTime<Local>,
    ) -> Result<String, E> {
        self(record, metadata, timestamp)
    }
}
