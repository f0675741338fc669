//! Bridge to the [`log`] facade.
//!
//! The native facade front carries seven severities and a function name
//! per call site; the [`log`] facade carries five and no function name.
//! The bridge maps between the two so that code instrumented with the
//! standard `log` macros can be rendered by this backend: `log` levels
//! inject into [`Level`], `Notice` and `Critical` stay native-only, and
//! the function field of bridged records renders as the empty string.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use timberline::writer::Capture;
//! use timberline::{LineHandler, Logger};
//!
//! let capture = Capture::new();
//! let handler = LineHandler::new("bridge").writer(capture.clone());
//! let logger = Logger::with_handler(Arc::new(handler));
//!
//! timberline::bridge::install(logger).expect("another global logger is installed");
//!
//! log::warn!("through the facade");
//! assert!(capture.contents().contains("[warn ] through the facade"));
//! ```

use crate::level::Level;
use crate::logger::Logger;

/// Converts a `log` level into its native counterpart.
fn level_from(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Trace,
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warning,
        log::Level::Error => Level::Error,
    }
}

/// Mirrors a native threshold into the coarser `log` filter.
///
/// The filter is an optimization; [`Logger::log`] re-applies the exact
/// threshold, so a `Critical` threshold mapped to the `Error` filter
/// still drops plain error records.
fn filter_from(level: Level) -> log::LevelFilter {
    match level {
        Level::Trace => log::LevelFilter::Trace,
        Level::Debug => log::LevelFilter::Debug,
        Level::Info => log::LevelFilter::Info,
        Level::Notice | Level::Warning => log::LevelFilter::Warn,
        Level::Error | Level::Critical => log::LevelFilter::Error,
    }
}

/// A [`log::Log`] implementation that forwards every record to a
/// [`Logger`].
///
/// The record's target becomes the rendered source module.
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Returns a new bridge around `logger`.
    pub fn new(logger: Logger) -> Self {
        LogBridge { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(level_from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();

        self.logger.log(
            level_from(record.level()),
            &message,
            None,
            record.target(),
            record.file().unwrap_or(""),
            "",
            record.line().unwrap_or(0),
        );
    }

    fn flush(&self) {}
}

/// Registers `logger` as the `log` facade's process-wide backend.
///
/// Like all `log` facade registration this is one-time: the facade
/// rejects a second global logger. The facade-side filter is mirrored
/// from the logger's threshold at installation; later [`set_level`]
/// changes still take effect through the logger's own check, though
/// records below the installed filter are dropped by the facade without
/// reaching it.
///
/// # Errors
///
/// Returns [`log::SetLoggerError`] if a global logger is already
/// installed.
///
/// [`set_level`]: Logger::set_level
pub fn install(logger: Logger) -> Result<(), log::SetLoggerError> {
    log::set_max_level(filter_from(logger.level()));
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))
}

#[cfg(test)]
mod tests {
    use super::{filter_from, level_from};
    use crate::level::Level;

    #[test]
    fn facade_levels_inject_into_native_levels() {
        let expected = [
            (log::Level::Trace, Level::Trace),
            (log::Level::Debug, Level::Debug),
            (log::Level::Info, Level::Info),
            (log::Level::Warn, Level::Warning),
            (log::Level::Error, Level::Error),
        ];

        for (facade, native) in expected.iter() {
            assert_eq!(level_from(*facade), *native);
        }
    }

    #[test]
    fn filters_never_starve_the_native_threshold() {
        // every record the native threshold accepts must survive the
        // facade-side filter
        for threshold in Level::ALL.iter() {
            let filter = filter_from(*threshold);
            for facade in [
                log::Level::Error,
                log::Level::Warn,
                log::Level::Info,
                log::Level::Debug,
                log::Level::Trace,
            ]
            .iter()
            {
                if level_from(*facade) >= *threshold {
                    assert!(*facade <= filter, "{} starves {}", filter, facade);
                }
            }
        }
    }
}
