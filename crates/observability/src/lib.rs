//! Tracing/logging setup shared by binaries and integration harnesses.

pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
