/// Logs a message through a [`Logger`], capturing the call site.
///
/// The macro fills in the record's source module, file, enclosing
/// function, and line from the call site, then forwards to
/// [`Logger::log`], which applies the severity threshold. An optional
/// trailing argument supplies one-off call metadata (typically built
/// with [`metadata!`]) that overrides the handler's instance metadata
/// on key collisions.
///
/// The per-level shorthands [`trace!`], [`debug!`], [`info!`],
/// [`notice!`], [`warning!`], [`error!`], and [`critical!`] expand to
/// this macro.
///
/// # Examples
///
/// ```
/// use timberline::{metadata, Level, Logger};
///
/// let logger = Logger::new("app");
///
/// timberline::log!(logger, Level::Info, "starting up");
/// timberline::log!(logger, Level::Warning, "disk almost full", metadata! {
///     "free" => "312MiB",
/// });
/// ```
///
/// [`Logger`]: crate::Logger
/// [`Logger::log`]: crate::Logger::log
#[macro_export]
macro_rules! log {
    (@call $logger:expr, $level:expr, $message:expr, $metadata:expr) => {
        $crate::Logger::log(
            &$logger,
            $level,
            ::core::convert::AsRef::<str>::as_ref(&$message),
            $metadata,
            module_path!(),
            file!(),
            $crate::__function!(),
            line!(),
        )
    };
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $crate::log!(@call $logger, $level, $message, ::core::option::Option::None)
    };
    ($logger:expr, $level:expr, $message:expr, $metadata:expr $(,)?) => {{
        let metadata = $metadata;
        $crate::log!(@call $logger, $level, $message, ::core::option::Option::Some(&metadata))
    }};
}

/// Logs a message at the trace level. See [`log!`].
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($rest)+)
    };
}

/// Logs a message at the debug level. See [`log!`].
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

/// Logs a message at the info level.
///
/// # Examples
///
/// ```
/// use timberline::{metadata, Logger};
///
/// let logger = Logger::new("app");
///
/// timberline::info!(logger, "listening");
/// timberline::info!(logger, "listening", metadata! { "port" => 8080 });
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// Logs a message at the notice level. See [`log!`].
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($rest)+)
    };
}

/// Logs a message at the warning level. See [`log!`].
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($rest)+)
    };
}

/// Logs a message at the error level.
///
/// Error-class records are rendered with a source-location suffix, so
/// the captured file, line, and function show up in the output line.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($rest)+)
    };
}

/// Logs a message at the critical level.
///
/// Like [`error!`], the rendered line carries the call site:
///
/// ```
/// use timberline::Logger;
///
/// let logger = Logger::new("app");
/// timberline::critical!(logger, "this is bad");
/// ```
/// ```log
/// 19-06-2021 13:05:02.1234 app [crit ] @ main.rs:4:app::main, this is bad
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($rest)+)
    };
}

/// Builds a [`Metadata`] map, stringifying keys and values through
/// their `Display` impls.
///
/// # Examples
///
/// ```
/// use timberline::metadata;
///
/// let meta = metadata! {
///     "attempt" => 3,
///     "peer" => "10.0.0.7:4433",
/// };
/// assert_eq!(meta["attempt"], "3");
/// ```
///
/// [`Metadata`]: crate::Metadata
#[macro_export]
macro_rules! metadata {
    () => { $crate::Metadata::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::Metadata::new();
        $(
            metadata.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        metadata
    }};
}

// Resolves to the path of the enclosing function by naming a nested item
// and trimming the trailing "::f" from its type name.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}
