//! `TestLogger` for capturing output in tests.
//!
//! Provides a [`Logger`] wired to an in-memory buffer for assertion
//! instead of writing to stdout.

use std::io::Write;
use std::sync::{Arc, Mutex};

use strip_ansi_escapes::strip;

use crate::logger::Logger;

/// A [`Logger`] that captures output for assertions.
///
/// Use [`logger()`](Self::logger) to obtain the capturing logger (or pass
/// it to a bridge/layer), then `output()`, `contains()`, and the
/// assertion methods to verify what was written.
pub struct TestLogger {
    logger: Logger,
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestLogger {
    /// Capture colored output under the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_colors(prefix, true)
    }

    /// Capture with an explicit color mode.
    #[must_use]
    pub fn with_colors(prefix: impl Into<String>, colors: bool) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = BufferWriter(buffer.clone());
        let logger = Logger::builder()
            .prefix(prefix)
            .colors(colors)
            .writer(writer)
            .build();

        Self { logger, buffer }
    }

    /// The capturing logger. Clones share this buffer.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Captured output with ANSI escapes preserved.
    #[must_use]
    pub fn raw_output(&self) -> String {
        self.buffer
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    /// Captured output with ANSI escapes stripped.
    #[must_use]
    pub fn output(&self) -> String {
        let raw = self.buffer.lock().map(|b| b.clone()).unwrap_or_default();
        let stripped = strip(raw);
        String::from_utf8_lossy(&stripped).into_owned()
    }

    /// Captured lines, escapes stripped.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(String::from).collect()
    }

    /// Check if the stripped output contains a string.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output().contains(needle)
    }

    /// Check if the stripped output contains all of the given strings.
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if the raw output matches a regex pattern.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.raw_output()),
            Err(_) => false,
        }
    }

    /// Assert that the stripped output contains a string.
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output()
        );
    }

    /// Assert that the stripped output does NOT contain a string.
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output()
        );
    }

    /// Assert the captured output has a specific number of lines.
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.lines().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output()
        );
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }
}

impl Default for TestLogger {
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for TestLogger {
    fn clone(&self) -> Self {
        Self {
            logger: self.logger.clone(),
            buffer: self.buffer.clone(),
        }
    }
}

impl std::fmt::Debug for TestLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestLogger")
            .field("prefix", &self.logger.prefix())
            .field("line_count", &self.lines().len())
            .finish()
    }
}

/// Writer that captures to a shared buffer.
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_capture() {
        let tc = TestLogger::new("svc");
        tc.logger().info("hello");
        assert!(tc.contains("hello"));
        assert!(tc.contains("[svc]"));
    }

    #[test]
    fn test_output_strips_escapes() {
        let tc = TestLogger::new("svc");
        tc.logger().error("boom");
        assert!(tc.raw_output().contains('\x1b'));
        assert!(!tc.output().contains('\x1b'));
        assert!(tc.output().contains("[ERR]"));
    }

    #[test]
    fn test_plain_capture_has_no_escapes() {
        let tc = TestLogger::with_colors("svc", false);
        tc.logger().error("boom");
        assert!(!tc.raw_output().contains('\x1b'));
        assert_eq!(tc.raw_output(), tc.output());
    }

    #[test]
    fn test_contains_all() {
        let tc = TestLogger::new("svc");
        tc.logger().info("the quick brown fox");
        assert!(tc.contains_all(&["quick", "brown", "fox"]));
        assert!(!tc.contains_all(&["quick", "lazy"]));
    }

    #[test]
    fn test_matches_regex() {
        let tc = TestLogger::new("svc");
        tc.logger().info("error code: 42");
        assert!(tc.matches(r"code: \d+"));
        assert!(!tc.matches(r"code: [a-z]+"));
    }

    #[test]
    fn test_assert_not_contains() {
        let tc = TestLogger::new("svc");
        tc.logger().success("fine");
        tc.assert_not_contains("[ERR]");
    }

    #[test]
    fn test_line_count() {
        let tc = TestLogger::new("svc");
        tc.logger().info("one");
        tc.logger().info("two");
        tc.assert_line_count(2);
    }

    #[test]
    fn test_clear() {
        let tc = TestLogger::new("svc");
        tc.logger().info("something");
        assert!(!tc.lines().is_empty());
        tc.clear();
        assert!(tc.lines().is_empty());
    }

    #[test]
    fn test_clone_shares_buffer() {
        let tc = TestLogger::new("svc");
        let tc2 = tc.clone();
        tc.logger().info("shared");
        assert!(tc2.contains("shared"));
    }

    #[test]
    fn test_default() {
        let tc = TestLogger::default();
        tc.logger().info("bare");
        assert_eq!(tc.logger().prefix(), "");
    }
}
