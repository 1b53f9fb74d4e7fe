//! `log` crate facade adapter.
//!
//! Routes records from the `log` macros through a [`Logger`] so that
//! `log::info!` and friends come out in the same line format as direct
//! calls. By default the record target becomes the line prefix.
//!
//! # Usage
//!
//! ```no_run
//! use conlog::LogBridge;
//!
//! LogBridge::try_init();
//! log::info!(target: "net", "listening on :8080");
//! ```

use log::{LevelFilter, Log, Metadata, Record};

use crate::logger::Logger;
use crate::severity::Severity;

/// A `log::Log` implementation backed by a [`Logger`].
///
/// No filtering policy of its own: every record the facade delivers is
/// written. Callers that want filtering use `log::set_max_level`.
pub struct LogBridge {
    logger: Logger,
    use_targets: bool,
}

impl LogBridge {
    /// Bridge with defaults: stdout logger, record targets as prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Configure a bridge via the builder.
    #[must_use]
    pub fn builder() -> LogBridgeBuilder {
        LogBridgeBuilder::new()
    }

    /// Install a default bridge as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init() -> Result<(), log::SetLoggerError> {
        Self::builder().init()
    }

    /// Install a default bridge, ignoring an already-set logger.
    pub fn try_init() {
        let _ = Self::init();
    }
}

impl Default for LogBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let severity = Severity::from(record.level());
        let message = record.args().to_string();

        if self.use_targets {
            self.logger
                .with_prefix(record.target())
                .log(severity, &message);
        } else {
            self.logger.log(severity, &message);
        }
    }

    fn flush(&self) {}
}

/// Builder for configuring a [`LogBridge`].
#[derive(Debug)]
pub struct LogBridgeBuilder {
    logger: Option<Logger>,
    use_targets: bool,
}

impl Default for LogBridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBridgeBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logger: None,
            use_targets: true,
        }
    }

    /// Route records through the given logger instead of a default
    /// stdout logger.
    #[must_use]
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Render each record's target as the line prefix (default), or keep
    /// the bridge logger's own prefix.
    #[must_use]
    pub fn with_targets(mut self, use_targets: bool) -> Self {
        self.use_targets = use_targets;
        self
    }

    /// Build the bridge without installing it.
    #[must_use]
    pub fn build(self) -> LogBridge {
        LogBridge {
            logger: self.logger.unwrap_or_default(),
            use_targets: self.use_targets,
        }
    }

    /// Build and install as the global logger.
    ///
    /// Returns an error if a logger has already been set. The facade's
    /// max level is opened up to `Trace`; this facility attaches no
    /// filtering of its own.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let bridge = Box::new(self.build());
        log::set_boxed_logger(bridge)?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    /// Build and install, ignoring an already-set logger.
    pub fn try_init(self) {
        let _ = self.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestLogger;
    use log::Level;

    fn record_into(bridge: &LogBridge, level: Level, target: &str, message: &str) {
        bridge.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[test]
    fn test_bridge_always_enabled() {
        let bridge = LogBridge::new();
        let metadata = Metadata::builder().level(Level::Trace).target("t").build();
        assert!(bridge.enabled(&metadata));
    }

    #[test]
    fn test_record_target_becomes_prefix() {
        let capture = TestLogger::new("");
        let bridge = LogBridge::builder().logger(capture.logger().clone()).build();

        record_into(&bridge, Level::Info, "net", "listening");
        capture.assert_contains("[net] > listening");
    }

    #[test]
    fn test_fixed_prefix_when_targets_disabled() {
        let capture = TestLogger::new("app");
        let bridge = LogBridge::builder()
            .logger(capture.logger().clone())
            .with_targets(false)
            .build();

        record_into(&bridge, Level::Info, "ignored", "hello");
        capture.assert_contains("[app] > hello");
        capture.assert_not_contains("[ignored]");
    }

    #[test]
    fn test_level_mapping() {
        let capture = TestLogger::new("");
        let bridge = LogBridge::builder().logger(capture.logger().clone()).build();

        record_into(&bridge, Level::Error, "t", "e");
        record_into(&bridge, Level::Warn, "t", "w");
        record_into(&bridge, Level::Info, "t", "i");
        record_into(&bridge, Level::Debug, "t", "d");

        capture.assert_contains("[ERR]");
        capture.assert_contains("[WAR]");
        capture.assert_contains("[INF]");
        // Debug renders as a plain info line
        assert_eq!(capture.output().matches("[INF]").count(), 2);
    }

    #[test]
    fn test_flush_is_noop() {
        LogBridge::new().flush();
    }

    #[test]
    fn test_builder_defaults() {
        let builder = LogBridgeBuilder::new();
        assert!(builder.use_targets);
        assert!(builder.logger.is_none());
    }
}
