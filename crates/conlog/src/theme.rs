//! Fixed severity → ANSI color table.
//!
//! The mapping never changes at runtime, so it lives in a constant lookup
//! rather than a configurable theme object.

use crate::severity::Severity;

/// Start sequence for red text.
pub const RED: &str = "\x1b[31m";
/// Start sequence for green text.
pub const GREEN: &str = "\x1b[32m";
/// Start sequence for yellow text.
pub const YELLOW: &str = "\x1b[33m";
/// Start sequence for white text.
pub const WHITE: &str = "\x1b[37m";
/// Reset to the default color.
pub const RESET: &str = "\x1b[0m";

/// The `(start, reset)` escape pair enclosing a severity tag.
#[must_use]
pub const fn color_pair(severity: Severity) -> (&'static str, &'static str) {
    let start = match severity {
        Severity::Info => WHITE,
        Severity::Warning => YELLOW,
        Severity::Success => GREEN,
        Severity::Error => RED,
    };
    (start, RESET)
}
