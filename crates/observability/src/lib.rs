//! Tracing/logging setup shared by host binaries, benches and tests.
//!
//! The algorithm crates only emit `tracing` events; nothing is printed until a
//! host installs a subscriber through this crate.

/// Initialize process-wide tracing with JSON output and `RUST_LOG` filtering.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, init_with};
