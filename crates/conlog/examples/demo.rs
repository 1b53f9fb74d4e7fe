//! One-screen tour of the line format.
//!
//! Run with: `cargo run --example demo`

use conlog::Logger;

fn main() {
    let log = Logger::default();
    log.info("starting up");
    log.warning("config file missing, using defaults");

    let db = Logger::new("db");
    db.info("connecting");
    db.success("connection established");
    db.error("query timed out");

    // Records from the `log` facade come out in the same format, with
    // the target as the prefix.
    conlog::LogBridge::try_init();
    log::info!(target: "net", "listening on :8080");
    log::warn!(target: "net", "slow client detected");

    log.success("shutdown complete");
}
