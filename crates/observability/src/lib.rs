//! Tracing/logging setup shared by entityforge binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::LogFormat;

/// Initialize process-wide tracing using `ENTITYFORGE_LOG_FORMAT` and `RUST_LOG`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
