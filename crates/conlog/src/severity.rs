//! Severity classification for log lines.

/// Severity of a single log line.
///
/// Selects the bracketed tag and its color, nothing more: there is no
/// ordering between variants and no filtering attached to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Routine status output.
    Info,
    /// Something looks off but the process continues.
    Warning,
    /// An operation completed as intended.
    Success,
    /// An operation failed.
    Error,
}

impl Severity {
    /// The bracketed three-letter tag rendered in every line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INF]",
            Self::Warning => "[WAR]",
            Self::Success => "[SUC]",
            Self::Error => "[ERR]",
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            // `Success` has no facade counterpart; debug/trace records are
            // rendered as plain info lines.
            _ => Self::Info,
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            Self::Error
        } else if level == tracing::Level::WARN {
            Self::Warning
        } else {
            Self::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Severity::Info.tag(), "[INF]");
        assert_eq!(Severity::Warning.tag(), "[WAR]");
        assert_eq!(Severity::Success.tag(), "[SUC]");
        assert_eq!(Severity::Error.tag(), "[ERR]");
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Info);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Info);
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Severity::from(tracing::Level::ERROR), Severity::Error);
        assert_eq!(Severity::from(tracing::Level::WARN), Severity::Warning);
        assert_eq!(Severity::from(tracing::Level::INFO), Severity::Info);
        assert_eq!(Severity::from(tracing::Level::DEBUG), Severity::Info);
    }

    #[test]
    fn test_severity_equality() {
        assert_eq!(Severity::Info, Severity::Info);
        assert_ne!(Severity::Info, Severity::Error);
    }
}
