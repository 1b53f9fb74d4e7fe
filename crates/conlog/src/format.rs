//! Deterministic line formatting.
//!
//! Composes a timestamp, a colored severity tag, an optional bracketed
//! prefix, and the message body into one newline-terminated line. The
//! formatter is a pure function of its inputs; the wall clock is read by
//! the caller and passed in.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::severity::Severity;
use crate::theme;

/// `YYYY-MM-DD HH:MM:SS`, zero-padded fixed-width fields.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Formats one log line from its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormatter {
    colors: bool,
}

impl LineFormatter {
    /// Create a formatter, with or without ANSI styling.
    #[must_use]
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Whether this formatter emits ANSI escape sequences.
    #[must_use]
    pub const fn colors(self) -> bool {
        self.colors
    }

    /// Compose a full line, trailing newline included.
    ///
    /// Identical inputs produce byte-identical output. An empty prefix
    /// renders as an empty field, leaving two consecutive spaces before
    /// the `>` separator.
    #[must_use]
    pub fn format_line(
        &self,
        severity: Severity,
        prefix: &str,
        timestamp: OffsetDateTime,
        message: &str,
    ) -> String {
        format!(
            "{} {} {} > {}\n",
            Self::timestamp_tag(timestamp),
            self.severity_tag(severity),
            Self::prefix_tag(prefix),
            message
        )
    }

    fn timestamp_tag(timestamp: OffsetDateTime) -> String {
        let rendered = timestamp.format(&TIMESTAMP_FORMAT).unwrap_or_default();
        format!("[{rendered}]")
    }

    fn severity_tag(&self, severity: Severity) -> String {
        if self.colors {
            let (start, reset) = theme::color_pair(severity);
            format!("{start}{tag}{reset}", tag = severity.tag())
        } else {
            severity.tag().to_string()
        }
    }

    fn prefix_tag(prefix: &str) -> String {
        if prefix.is_empty() {
            String::new()
        } else {
            format!("[{prefix}]")
        }
    }
}

/// Current wall-clock time in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined (the
/// `time` crate refuses to read it in some multi-threaded environments);
/// field widths and layout are unaffected.
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
