//! The facade front: named logger handles and process-wide bootstrap.
//!
//! A [`Logger`] is a cheap-to-clone handle on a [`LogHandler`]. It owns
//! the severity-threshold check, so a record below the handler's threshold
//! is dropped before the handler ever sees it, and forwards everything
//! else (label, threshold, instance metadata) to the handler.
//!
//! By default every [`Logger::new`] gets its own stdout [`LineHandler`].
//! A process that wants different wiring installs a handler factory once
//! with [`bootstrap`]; every logger created afterwards is built by that
//! factory.

use crate::handler::{LineHandler, LogHandler};
use crate::level::Level;
use crate::metadata::Metadata;
use crate::record::Record;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

type HandlerFactory = dyn Fn(&str) -> Arc<dyn LogHandler> + Send + Sync;

static FACTORY: OnceLock<Box<HandlerFactory>> = OnceLock::new();

/// Installs the process-wide handler factory used by [`Logger::new`].
///
/// This is a one-time, non-reversible step: the first call installs the
/// factory for the lifetime of the process, and every later call fails
/// with [`BootstrapError`] and leaves the installed factory untouched.
/// Call it once, early, before any part of the program creates loggers.
///
/// Loggers created *before* bootstrap keep the handlers they were built
/// with; only subsequent [`Logger::new`] calls consult the factory.
/// [`Logger::with_handler`] bypasses the factory entirely, so no
/// bootstrap is ever required.
///
/// # Errors
///
/// Returns [`BootstrapError`] if a factory has already been installed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use timberline::{LineHandler, LogHandler, Logger};
///
/// fn stderr_handler(label: &str) -> Arc<dyn LogHandler> {
///     Arc::new(LineHandler::new(label).writer(std::io::stderr))
/// }
///
/// timberline::bootstrap(stderr_handler).expect("bootstrapped twice");
///
/// // built by the factory above
/// let logger = Logger::new("app");
/// # let _ = logger;
/// ```
pub fn bootstrap<F>(factory: F) -> Result<(), BootstrapError>
where
    F: Fn(&str) -> Arc<dyn LogHandler> + Send + Sync + 'static,
{
    FACTORY
        .set(Box::new(factory))
        .map_err(|_| BootstrapError(()))
}

/// Error returned by [`bootstrap`] when a handler factory has already
/// been installed.
#[derive(Debug)]
pub struct BootstrapError(pub(crate) ());

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad("A handler factory is already installed; bootstrap can only happen once per process")
    }
}

impl Error for BootstrapError {}

/// A handle for logging to one named channel.
///
/// Cloning a `Logger` is cheap and clones share the underlying handler,
/// so a logger can be handed to other threads while the owner keeps
/// adjusting the threshold or instance metadata.
///
/// # Examples
///
/// ```
/// use timberline::{Level, Logger};
///
/// let logger = Logger::new("app");
/// timberline::info!(logger, "starting up");
///
/// logger.set_level(Level::Warning);
/// assert!(!logger.enabled(Level::Info));
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    /// Returns a logger for the channel named `label`.
    ///
    /// The handler comes from the [`bootstrap`]ped factory, or defaults
    /// to a stdout [`LineHandler`] when no factory is installed. Each
    /// call creates a fresh handler instance: two loggers created with
    /// the same label do not share threshold or metadata.
    pub fn new(label: &str) -> Self {
        let handler: Arc<dyn LogHandler> = match FACTORY.get() {
            Some(factory) => factory(label),
            None => Arc::new(LineHandler::new(label)),
        };

        Logger { handler }
    }

    /// Returns a logger backed by an explicit handler.
    pub fn with_handler(handler: Arc<dyn LogHandler>) -> Self {
        Logger { handler }
    }

    /// The name of the channel this logger writes to.
    pub fn label(&self) -> &str {
        self.handler.label()
    }

    /// The handler's current severity threshold.
    pub fn level(&self) -> Level {
        self.handler.level()
    }

    /// Replaces the handler's severity threshold.
    pub fn set_level(&self, level: Level) {
        self.handler.set_level(level);
    }

    /// Returns `true` if a record at `level` would be handed to the
    /// handler rather than dropped.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.handler.level()
    }

    /// Returns the instance metadata value for `key`, if present.
    pub fn metadata_value(&self, key: &str) -> Option<String> {
        self.handler.metadata_value(key)
    }

    /// Inserts or overwrites the instance metadata value for `key`;
    /// `None` removes the key.
    ///
    /// ```
    /// use timberline::Logger;
    ///
    /// let logger = Logger::new("app");
    /// logger.set_metadata_value("thread", Some("worker-1".to_owned()));
    /// assert_eq!(logger.metadata_value("thread").as_deref(), Some("worker-1"));
    ///
    /// logger.set_metadata_value("thread", None);
    /// assert_eq!(logger.metadata_value("thread"), None);
    /// ```
    pub fn set_metadata_value(&self, key: &str, value: Option<String>) {
        self.handler.set_metadata_value(key, value);
    }

    /// Logs a record, applying the threshold check first.
    ///
    /// This is the single full entry point; the [`log!`][crate::log!]
    /// family of macros forwards here with the call site filled in.
    #[allow(clippy::too_many_arguments)]
    pub fn log(
        &self,
        level: Level,
        message: &str,
        metadata: Option<&Metadata>,
        source: &str,
        file: &str,
        function: &str,
        line: u32,
    ) {
        if !self.enabled(level) {
            return;
        }

        self.handler.log(Record {
            level,
            message,
            metadata,
            source,
            file,
            function,
            line,
        });
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label())
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
