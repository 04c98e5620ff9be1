// src/log.rs
use std::io;
use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Install the global subscriber: warnings and errors to stderr (e.g. a page
/// whose bytes did not decode cleanly). Stdout is reserved for the per-file
/// progress lines. Safe to call twice.
pub fn init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    });
}
