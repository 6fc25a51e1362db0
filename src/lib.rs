//! Short, URL-safe identifiers that sort by creation time.
//!
//! An identifier is 20 characters: an 8-character millisecond timestamp
//! followed by a 12-character random suffix. Ascending identifiers compare
//! greater the later they were made; descending identifiers compare smaller,
//! so a plain string sort lists the newest first.
//!
//! The free functions share one process-wide [`Generator`]. Build your own
//! with a fixed seed or [`ManualClock`] when you need reproducible output.

pub mod alphabet;
pub mod clock;
pub mod config;
pub mod decode;
pub mod generator;

use std::sync::OnceLock;

// Re-export commonly used types
pub use alphabet::Order;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GeneratorConfig, SuffixPolicy};
pub use decode::{DecodeError, Decoded};
pub use generator::{Generator, GeneratorState};

/// Greatest possible identifier string. Sorts after every generated id.
pub const MAX_DESCENDING: &str = "zzzzzzzzzzzzzzzzzzzz";

/// Least possible identifier string. Sorts before every generated id.
pub const MAX_ASCENDING: &str = "00000000000000000000";

static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// The generator behind the free functions, created on first use.
pub fn default_generator() -> &'static Generator {
    DEFAULT_GENERATOR.get_or_init(Generator::new)
}

/// Same as [`ascending`].
pub fn new() -> String {
    ascending()
}

/// Ascending identifier for the current time.
pub fn ascending() -> String {
    default_generator().ascending()
}

/// Ascending identifier for `timestamp_ms`.
pub fn ascending_from(timestamp_ms: u64) -> String {
    default_generator().ascending_from(timestamp_ms)
}

/// Descending identifier for the current time.
pub fn descending() -> String {
    default_generator().descending()
}

/// Descending identifier for `timestamp_ms`.
pub fn descending_from(timestamp_ms: u64) -> String {
    default_generator().descending_from(timestamp_ms)
}
