#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod builder;
pub mod detection;
pub mod format;
pub mod logger;
pub mod severity;
pub mod subscriber;
pub mod testing;
pub mod theme;

pub use bridge::{LogBridge, LogBridgeBuilder};
pub use builder::LoggerBuilder;
pub use detection::should_colorize;
pub use format::LineFormatter;
pub use logger::Logger;
pub use severity::Severity;
pub use subscriber::{ConsoleLayer, ConsoleLayerBuilder};
