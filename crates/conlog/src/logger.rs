//! The [`Logger`] type: a prefix, a sink, and the four severity
//! operations.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::builder::LoggerBuilder;
use crate::format::{self, LineFormatter};
use crate::severity::Severity;

/// Destination for formatted lines.
#[derive(Clone)]
pub(crate) enum Sink {
    /// Process standard output.
    Stdout,
    /// Injected writer, shared between clones.
    Shared(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Sink {
    /// Write one line synchronously. Failures are discarded: the caller
    /// has no error path for output it does not own.
    fn write_line(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(line.as_bytes());
                let _ = out.flush();
            }
            Self::Shared(writer) => {
                if let Ok(mut writer) = writer.lock() {
                    let _ = writer.write_all(line.as_bytes());
                    let _ = writer.flush();
                }
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Shared(_) => f.write_str("Shared"),
        }
    }
}

/// Console logger with an immutable component prefix.
///
/// Each operation writes exactly one newline-terminated line to the
/// logger's sink (process stdout unless a writer was injected via
/// [`LoggerBuilder::writer`]) before returning. Loggers are cheap values;
/// independent instances share no state beyond the output stream itself.
#[derive(Debug, Clone)]
pub struct Logger {
    prefix: String,
    formatter: LineFormatter,
    sink: Sink,
}

impl Logger {
    /// Logger with the given prefix, writing colored lines to stdout.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        LoggerBuilder::new().prefix(prefix).build()
    }

    /// Logger whose color mode is taken from the environment
    /// ([`crate::detection::should_colorize`]).
    #[must_use]
    pub fn detect(prefix: impl Into<String>) -> Self {
        LoggerBuilder::new().prefix(prefix).detect_colors().build()
    }

    /// Configure a logger via the builder.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(prefix: String, formatter: LineFormatter, sink: Sink) -> Self {
        Self {
            prefix,
            formatter,
            sink,
        }
    }

    /// The component prefix, possibly empty.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// A logger with a different prefix sharing this logger's sink and
    /// color mode.
    #[must_use]
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            formatter: self.formatter,
            sink: self.sink.clone(),
        }
    }

    /// Write an info line.
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Write a warning line.
    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Write a success line.
    pub fn success(&self, message: &str) {
        self.log(Severity::Success, message);
    }

    /// Write an error line.
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Format and synchronously write one line at the given severity.
    pub fn log(&self, severity: Severity, message: &str) {
        let line = self
            .formatter
            .format_line(severity, &self.prefix, format::now(), message);
        self.sink.write_line(&line);
    }
}

impl Default for Logger {
    /// Logger with an empty prefix.
    fn default() -> Self {
        Self::new("")
    }
}
