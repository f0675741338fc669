//! Render leveled, metadata-carrying log records as single human-readable lines.
//!
//! # Overview
//!
//! `timberline` is the backend half of a structured logging pipeline. A
//! thin facade front (the [`Logger`] handle plus the [`log!`] family of
//! macros) captures the call site, applies the severity threshold, and
//! hands each surviving record to a [`LogHandler`]. The built-in
//! [`LineHandler`] renders every record into exactly one timestamped
//! line and writes it to a process output stream:
//!
//! ```log
//! 19-06-2021 13:05:02.1234 myapp::server [info ] (region=eu-1) accepting connections
//! 19-06-2021 13:05:02.1240 myapp::server [error] (region=eu-1) @ server.rs:88:myapp::server::accept, listener dropped
//! ```
//!
//! Records at `error` and `critical` severity carry their call site in
//! the rendered line; everything below does not. There is no rotation,
//! buffering, or structured output: one record in, one line out.
//!
//! # Getting started
//!
//! Create a logger per named channel and log through the macros:
//!
//! ```
//! use timberline::{metadata, Logger};
//!
//! let logger = Logger::new("myapp");
//!
//! timberline::info!(logger, "starting up");
//! timberline::warning!(logger, "disk almost full", metadata! {
//!     "free" => "312MiB",
//! });
//! ```
//!
//! To route every logger in the process somewhere else, install a
//! handler factory once with [`bootstrap`] before any loggers are
//! created:
//!
//! ```
//! use std::sync::Arc;
//! use timberline::{LineHandler, LogHandler};
//!
//! fn to_stderr(label: &str) -> Arc<dyn LogHandler> {
//!     Arc::new(LineHandler::new(label).writer(std::io::stderr))
//! }
//!
//! timberline::bootstrap(to_stderr).expect("bootstrapped twice");
//! ```
//!
//! # Metadata
//!
//! Context comes in two flavors that merge at render time. Instance
//! metadata is attached to a handler and persists across calls; call
//! metadata rides on a single record and wins on key collisions:
//!
//! ```
//! use timberline::{metadata, Logger};
//!
//! let logger = Logger::new("worker");
//! logger.set_metadata_value("thread", Some("worker-1".to_owned()));
//!
//! // renders with (attempt=2, thread=worker-1)
//! timberline::debug!(logger, "retrying", metadata! { "attempt" => 2 });
//! ```
//!
//! Rendered pairs are always sorted by key, so the same record renders
//! the same bytes no matter how its maps were built.
//!
//! # Concurrency
//!
//! Rendering happens synchronously on the calling thread; the handler
//! holds its mutable state (threshold and instance metadata) behind
//! copy-on-write snapshots, so owners may adjust either while other
//! threads log. Each line is written with a single `write_all`, making
//! the output stream the only serialization point: concurrent lines
//! may interleave with each other, never within themselves.
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `smallvec`: Assembles output lines on the stack when they fit.
//! * `log`: Bridges the `log` facade to this backend, see the `bridge`
//!   module.

pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod metadata;
pub mod record;
pub mod writer;

#[cfg(feature = "log")]
pub mod bridge;

#[macro_use]
mod macros;

pub use crate::formatter::{Formatter, LineFormatter};
pub use crate::handler::{LineHandler, LogHandler};
pub use crate::level::Level;
pub use crate::logger::{bootstrap, BootstrapError, Logger};
pub use crate::metadata::Metadata;
pub use crate::record::Record;
