//! The transient record handed from the facade to a handler.

use crate::level::Level;
use crate::metadata::Metadata;

/// A single log record, borrowed for the duration of one render.
///
/// Records are constructed by the facade front ([`Logger`] and the logging
/// macros) and consumed by [`LogHandler::log`]. They carry no owned data
/// and have no life beyond the call that renders them.
///
/// The call-site fields (`source`, `file`, `function`, `line`) are opaque
/// to the renderer: it never inspects them beyond extracting the final
/// path segment of `file` for error-class records.
///
/// [`Logger`]: crate::logger::Logger
/// [`LogHandler::log`]: crate::handler::LogHandler::log
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    /// The record's severity.
    pub level: Level,

    /// The message, rendered verbatim with no escaping or truncation.
    pub message: &'a str,

    /// One-off metadata for this record, merged over the handler's
    /// instance metadata. `None` behaves like an empty map.
    pub metadata: Option<&'a Metadata>,

    /// The module or subsystem the record originates from.
    pub source: &'a str,

    /// Path of the file containing the call site.
    pub file: &'a str,

    /// Name of the function containing the call site.
    pub function: &'a str,

    /// Line number of the call site.
    pub line: u32,
}
