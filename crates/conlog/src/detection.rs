//! Color-mode detection from the environment.
//!
//! Only [`Logger::detect`](crate::Logger::detect) and
//! [`LoggerBuilder::detect_colors`](crate::LoggerBuilder::detect_colors)
//! consult the environment; plain construction always colors.

/// Determine whether lines should carry ANSI color sequences.
///
/// `CONLOG_FORCE_COLOR` wins over everything. `NO_COLOR` (the standard
/// convention) and `CONLOG_PLAIN` disable styling. An unset environment
/// means color on.
#[must_use]
pub fn should_colorize() -> bool {
    // Explicit enable always wins
    if std::env::var("CONLOG_FORCE_COLOR").is_ok() {
        return true;
    }

    if std::env::var("NO_COLOR").is_ok() || std::env::var("CONLOG_PLAIN").is_ok() {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mutating the process environment races with the parallel test
    // harness, so only the ambient state is exercised here.
    #[test]
    fn test_should_colorize_is_consistent() {
        assert_eq!(should_colorize(), should_colorize());
    }
}
