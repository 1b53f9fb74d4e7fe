//! Test utilities for asserting on captured log output.

mod test_logger;

pub use test_logger::TestLogger;
