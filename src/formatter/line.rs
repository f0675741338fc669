use crate::formatter::Formatter;
use crate::metadata::{self, Metadata};
use crate::record::Record;
use chrono::{DateTime, Local, Timelike};
use std::fmt::{self, Write};

/// The default single-line format.
///
/// Every record becomes one line of the shape:
///
/// ```log
/// 19-06-2021 13:05:02.1234 client [debug] Logger initialized
/// ```
///
/// with a parenthesized `key=value` block when the merged metadata is
/// non-empty, and a `@ file:line:function, ` suffix for error-class
/// records:
///
/// ```log
/// 19-06-2021 13:05:02.1234 client [crit ] (thread=worker-1) @ Foo.swift:42:bar, Whoops that's not very good
/// ```
///
/// The timestamp is `dd-MM-yyyy HH:mm:ss` followed by four fractional
/// digits. Metadata pairs are sorted by key, so the same record always
/// renders the same bytes.
#[derive(Clone, Debug, Default)]
pub struct LineFormatter {
    _priv: (),
}

impl LineFormatter {
    /// Returns a new `LineFormatter`.
    pub const fn new() -> Self {
        LineFormatter { _priv: () }
    }
}

impl Formatter for LineFormatter {
    type Error = fmt::Error;

    fn fmt(
        &self,
        record: &Record<'_>,
        metadata: &Metadata,
        timestamp: DateTime<Local>,
    ) -> Result<String, fmt::Error> {
        let mut writer = String::with_capacity(256);

        // nanosecond() exceeds 1s during a leap second; fold it back
        let fraction = timestamp.nanosecond() % 1_000_000_000 / 100_000;

        write!(
            writer,
            "{}.{:04} {} [{}] ",
            timestamp.format("%d-%m-%Y %H:%M:%S"),
            fraction,
            record.source,
            record.level.short_code(),
        )?;

        let merged = metadata::merge(metadata, record.metadata);
        if !merged.is_empty() {
            writer.push('(');
            let mut pairs = merged.iter();
            if let Some((key, value)) = pairs.next() {
                write!(writer, "{}={}", key, value)?;
            }
            for (key, value) in pairs {
                write!(writer, ", {}={}", key, value)?;
            }
            writer.push_str(") ");
        }

        if record.level.is_error_class() {
            let file_name = record
                .file
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or("unknown");

            write!(writer, "@ {}:{}:{}, ", file_name, record.line, record.function)?;
        }

        writer.push_str(record.message);

        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::LineFormatter;
    use crate::formatter::Formatter;
    use crate::level::Level;
    use crate::metadata::Metadata;
    use crate::record::Record;
    use chrono::{DateTime, Local, TimeZone, Timelike};

    fn fixed_clock() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2021, 6, 19, 13, 5, 2)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap()
    }

    fn record<'a>(level: Level, message: &'a str, metadata: Option<&'a Metadata>) -> Record<'a> {
        Record {
            level,
            message,
            metadata,
            source: "client",
            file: "/a/b/c/Foo.swift",
            function: "bar",
            line: 42,
        }
    }

    fn render(record: &Record<'_>, metadata: &Metadata) -> String {
        LineFormatter::new()
            .fmt(record, metadata, fixed_clock())
            .unwrap()
    }

    #[test]
    fn debug_line_without_metadata() {
        let line = render(&record(Level::Debug, "Logger initialized", None), &Metadata::new());

        assert_eq!(line, "19-06-2021 13:05:02.1234 client [debug] Logger initialized");
    }

    #[test]
    fn critical_line_with_metadata_and_location() {
        let mut instance = Metadata::new();
        instance.insert("thread".to_owned(), "worker-1".to_owned());

        let line = render(
            &record(Level::Critical, "Whoops that's not very good", None),
            &instance,
        );

        assert_eq!(
            line,
            "19-06-2021 13:05:02.1234 client [crit ] (thread=worker-1) \
             @ Foo.swift:42:bar, Whoops that's not very good"
        );
    }

    #[test]
    fn call_metadata_overrides_instance_metadata() {
        let mut instance = Metadata::new();
        instance.insert("k".to_owned(), "v1".to_owned());
        instance.insert("j".to_owned(), "x".to_owned());

        let mut call = Metadata::new();
        call.insert("k".to_owned(), "v2".to_owned());

        let line = render(&record(Level::Info, "collision", Some(&call)), &instance);

        assert!(line.contains("(j=x, k=v2) "), "{}", line);
        assert!(!line.contains("v1"), "{}", line);
    }

    #[test]
    fn empty_metadata_renders_no_block() {
        let line = render(&record(Level::Info, "plain", None), &Metadata::new());

        assert!(!line.contains("()"), "{}", line);
        assert!(line.contains("[info ] plain"), "{}", line);
    }

    #[test]
    fn location_uses_final_path_segment() {
        let mut rec = record(Level::Error, "boom", None);
        rec.file = "/a/b/c/File.ext";

        let line = render(&rec, &Metadata::new());
        assert!(line.contains("@ File.ext:42:bar, "), "{}", line);
    }

    #[test]
    fn location_without_separator_is_verbatim() {
        let mut rec = record(Level::Error, "boom", None);
        rec.file = "NoSlashes";

        let line = render(&rec, &Metadata::new());
        assert!(line.contains("@ NoSlashes:42:bar, "), "{}", line);
    }

    #[test]
    fn empty_file_path_falls_back_to_unknown() {
        for file in ["", "/", "//"].iter() {
            let mut rec = record(Level::Critical, "boom", None);
            rec.file = *file;

            let line = render(&rec, &Metadata::new());
            assert!(line.contains("@ unknown:42:bar, "), "{}", line);
        }
    }

    #[test]
    fn only_error_class_levels_carry_a_location() {
        for level in Level::ALL.iter() {
            let line = render(&record(*level, "msg", None), &Metadata::new());
            assert_eq!(line.contains("@ Foo.swift:42:bar, "), level.is_error_class(), "{}", level);
        }
    }

    #[test]
    fn rendering_is_idempotent_under_a_fixed_clock() {
        let mut instance = Metadata::new();
        instance.insert("a".to_owned(), "1".to_owned());

        let rec = record(Level::Critical, "again", None);
        assert_eq!(render(&rec, &instance), render(&rec, &instance));
    }
}
