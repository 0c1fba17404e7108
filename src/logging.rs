//! Tracing subscriber setup for hosts and test binaries.
//!
//! The library itself only emits events: `debug` for swallowed gestures and
//! host callbacks, `trace` for forwarded ones, `warn` for settings that fail
//! to load. Nothing is surfaced to the end user.

use tracing::{Level, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target all of this crate's events are emitted under
pub const LOG_TARGET: &str = "salon_calendar";

/// Initialize logging at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize logging for this crate at `level`.
///
/// `RUST_LOG` still applies on top. Safe to call more than once; only the
/// first call installs a subscriber.
pub fn init_with_level(level: Level) -> bool {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    if let Ok(directive) = format!("{LOG_TARGET}={level}").parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    result.is_ok()
}
