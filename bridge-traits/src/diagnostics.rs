//! Diagnostics Reporting Abstraction
//!
//! Non-fatal errors that should not interrupt the user (a sidecar file that
//! failed to persist, for example) are handed to a `DiagnosticsSink` instead
//! of being propagated. The desktop build ships a tracing-backed sink and an
//! HTTP collector sink; tests use an in-memory recorder.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single reported error occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Where the error happened (module or operation name).
    pub context: String,
    /// Human-readable error description.
    pub message: String,
    /// Unix timestamp of the occurrence.
    pub occurred_at: i64,
}

impl ErrorReport {
    /// Create a report stamped with the current time.
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
            occurred_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Collector for non-fatal error reports.
///
/// Implementations must never fail loudly on the caller's behalf: a sink
/// that cannot deliver a report should swallow the failure after logging it.
#[async_trait]
pub trait DiagnosticsSink: Send + Sync {
    /// Deliver a report to the collector.
    async fn report(&self, report: ErrorReport) -> Result<()>;
}
