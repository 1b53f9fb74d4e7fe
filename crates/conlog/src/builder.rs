//! Builder-style construction for [`Logger`].

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::detection;
use crate::format::LineFormatter;
use crate::logger::{Logger, Sink};

/// Builder for configuring a [`Logger`].
///
/// # Example
///
/// ```
/// use conlog::Logger;
///
/// let log = Logger::builder().prefix("db").colors(false).build();
/// log.info("plain line");
/// ```
#[derive(Debug)]
pub struct LoggerBuilder {
    prefix: String,
    colors: bool,
    sink: Sink,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a builder with defaults: empty prefix, colors on, stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            colors: true,
            sink: Sink::Stdout,
        }
    }

    /// Set the component prefix rendered as a bracketed tag.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable ANSI color sequences.
    #[must_use]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Take the color mode from the environment
    /// ([`detection::should_colorize`]).
    #[must_use]
    pub fn detect_colors(mut self) -> Self {
        self.colors = detection::should_colorize();
        self
    }

    /// Write lines to the given writer instead of stdout (for capture in
    /// tests and tools).
    #[must_use]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Sink::Shared(Arc::new(Mutex::new(Box::new(writer) as Box<dyn Write + Send>)));
        self
    }

    /// Build the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger::from_parts(self.prefix, LineFormatter::new(self.colors), self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = LoggerBuilder::new();
        assert_eq!(builder.prefix, "");
        assert!(builder.colors);
    }

    #[test]
    fn test_builder_prefix() {
        let logger = LoggerBuilder::new().prefix("svc").build();
        assert_eq!(logger.prefix(), "svc");
    }

    #[test]
    fn test_builder_colors_off() {
        let builder = LoggerBuilder::new().colors(false);
        assert!(!builder.colors);
    }

    #[test]
    fn test_default_matches_new() {
        let defaulted = LoggerBuilder::default();
        assert_eq!(defaulted.prefix, LoggerBuilder::new().prefix);
    }
}
