//! Diagnostic log capability.
//!
//! Ledger operations report what they did (or refused to do) through a
//! [`DiagnosticLog`] they are handed at construction, instead of writing to a
//! process-wide logger directly. Production code uses [`TracingLog`]; tests use
//! [`MemoryLog`] to assert on what was reported.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

/// Severity of a diagnostic record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Successful mutation, load or save.
    Info,
    /// Rejected input, coerced arguments, missing store file.
    Warning,
    /// Malformed persisted data, IO faults.
    Error,
}

/// One diagnostic record: operation name, item, quantity and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub operation: &'static str,
    pub item: Option<String>,
    pub quantity: Option<i64>,
    pub outcome: String,
}

impl Diagnostic {
    pub fn new(operation: &'static str, outcome: impl Into<String>) -> Self {
        Self {
            operation,
            item: None,
            quantity: None,
            outcome: outcome.into(),
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.operation, self.outcome)?;
        if let Some(item) = &self.item {
            write!(f, " item={item:?}")?;
        }
        if let Some(quantity) = self.quantity {
            write!(f, " quantity={quantity}")?;
        }
        Ok(())
    }
}

/// Logger capability held by a ledger.
pub trait DiagnosticLog: Send + Sync {
    fn info(&self, diagnostic: Diagnostic);
    fn warning(&self, diagnostic: Diagnostic);
    fn error(&self, diagnostic: Diagnostic);

    fn log(&self, severity: Severity, diagnostic: Diagnostic) {
        match severity {
            Severity::Info => self.info(diagnostic),
            Severity::Warning => self.warning(diagnostic),
            Severity::Error => self.error(diagnostic),
        }
    }
}

impl<T> DiagnosticLog for Arc<T>
where
    T: DiagnosticLog + ?Sized,
{
    fn info(&self, diagnostic: Diagnostic) {
        (**self).info(diagnostic)
    }

    fn warning(&self, diagnostic: Diagnostic) {
        (**self).warning(diagnostic)
    }

    fn error(&self, diagnostic: Diagnostic) {
        (**self).error(diagnostic)
    }
}

/// Forwards diagnostics to `tracing` with structured fields.
///
/// Timestamps are added by the installed subscriber.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn info(&self, d: Diagnostic) {
        ::tracing::info!(
            operation = d.operation,
            item = d.item.as_deref(),
            quantity = d.quantity,
            "{}",
            d.outcome
        );
    }

    fn warning(&self, d: Diagnostic) {
        ::tracing::warn!(
            operation = d.operation,
            item = d.item.as_deref(),
            quantity = d.quantity,
            "{}",
            d.outcome
        );
    }

    fn error(&self, d: Diagnostic) {
        ::tracing::error!(
            operation = d.operation,
            item = d.item.as_deref(),
            quantity = d.quantity,
            "{}",
            d.outcome
        );
    }
}

/// A diagnostic captured by [`MemoryLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedDiagnostic {
    pub severity: Severity,
    pub diagnostic: Diagnostic,
    pub logged_at: DateTime<Utc>,
}

/// In-memory diagnostic log for tests/dev.
#[derive(Debug, Default)]
pub struct MemoryLog {
    inner: RwLock<Vec<LoggedDiagnostic>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, severity: Severity, diagnostic: Diagnostic) {
        if let Ok(mut entries) = self.inner.write() {
            entries.push(LoggedDiagnostic {
                severity,
                diagnostic,
                logged_at: Utc::now(),
            });
        }
    }

    /// Snapshot of everything logged so far, oldest first.
    pub fn entries(&self) -> Vec<LoggedDiagnostic> {
        match self.inner.read() {
            Ok(entries) => entries.clone(),
            Err(_) => vec![],
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        match self.inner.read() {
            Ok(entries) => entries.iter().filter(|e| e.severity == severity).count(),
            Err(_) => 0,
        }
    }

    /// Whether a record with this severity was logged for `operation`.
    pub fn contains(&self, severity: Severity, operation: &str) -> bool {
        match self.inner.read() {
            Ok(entries) => entries
                .iter()
                .any(|e| e.severity == severity && e.diagnostic.operation == operation),
            Err(_) => false,
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.inner.write() {
            entries.clear();
        }
    }
}

impl DiagnosticLog for MemoryLog {
    fn info(&self, diagnostic: Diagnostic) {
        self.push(Severity::Info, diagnostic);
    }

    fn warning(&self, diagnostic: Diagnostic) {
        self.push(Severity::Warning, diagnostic);
    }

    fn error(&self, diagnostic: Diagnostic) {
        self.push(Severity::Error, diagnostic);
    }
}
