//! Tracing, logging (shared setup) and the diagnostic log capability.

/// Initialize process-wide tracing/logging.
///
/// `default_level` applies when `RUST_LOG` is unset. This is safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat, default_level: &str) {
    self::tracing::init(format, default_level);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Injected logging capability for ledger operations.
pub mod diagnostics;

pub use self::diagnostics::{
    Diagnostic, DiagnosticLog, LoggedDiagnostic, MemoryLog, Severity, TracingLog,
};
pub use self::tracing::LogFormat;
