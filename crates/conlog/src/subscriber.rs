//! Tracing layer adapter.
//!
//! Provides a `tracing-subscriber` [`Layer`] that renders events as
//! console lines through a [`Logger`]. Event targets become line
//! prefixes; non-message fields are dropped (this facility emits plain
//! text lines, not key-value pairs).

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;
use crate::severity::Severity;

/// A tracing layer that renders events as console lines.
pub struct ConsoleLayer {
    logger: Logger,
    use_targets: bool,
}

impl ConsoleLayer {
    /// Layer with defaults: stdout logger, event targets as prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Configure a layer via the builder.
    #[must_use]
    pub fn builder() -> ConsoleLayerBuilder {
        ConsoleLayerBuilder::new()
    }

    /// Install a registry with a default layer as the global subscriber.
    ///
    /// Returns an error if a subscriber has already been set.
    pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        Self::builder().init()
    }

    /// Install a default layer, ignoring an already-set subscriber.
    pub fn try_init() {
        let _ = Self::init();
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the `message` field of an event; everything else is dropped.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" && self.message.is_none() {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" && self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let severity = Severity::from(*metadata.level());
        let message = visitor
            .message
            .unwrap_or_else(|| metadata.name().to_string());

        if self.use_targets {
            self.logger
                .with_prefix(metadata.target())
                .log(severity, &message);
        } else {
            self.logger.log(severity, &message);
        }
    }
}

/// Builder for configuring a [`ConsoleLayer`].
#[derive(Debug)]
pub struct ConsoleLayerBuilder {
    logger: Option<Logger>,
    use_targets: bool,
}

impl Default for ConsoleLayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLayerBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logger: None,
            use_targets: true,
        }
    }

    /// Route events through the given logger instead of a default stdout
    /// logger.
    #[must_use]
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Render each event's target as the line prefix (default), or keep
    /// the layer logger's own prefix.
    #[must_use]
    pub fn with_targets(mut self, use_targets: bool) -> Self {
        self.use_targets = use_targets;
        self
    }

    /// Build the layer without installing it.
    #[must_use]
    pub fn build(self) -> ConsoleLayer {
        ConsoleLayer {
            logger: self.logger.unwrap_or_default(),
            use_targets: self.use_targets,
        }
    }

    /// Build and install a registry with this layer as the global
    /// subscriber.
    ///
    /// Returns an error if a subscriber has already been set. No level
    /// filter is attached; use the subscriber's own filtering if wanted.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let subscriber = tracing_subscriber::registry().with(self.build());
        tracing::subscriber::set_global_default(subscriber)
    }

    /// Build and install, ignoring an already-set subscriber.
    pub fn try_init(self) {
        let _ = self.init();
    }
}
