//! Diagnostics Sink Implementations
//!
//! Two collectors: `LogDiagnostics` mirrors reports into the tracing
//! pipeline, `RemoteDiagnostics` POSTs them to an HTTP collector endpoint.
//! Both honor the sink contract of never surfacing delivery failures to the
//! reporting caller beyond the returned `Result`.

use async_trait::async_trait;
use bridge_traits::{
    diagnostics::{DiagnosticsSink, ErrorReport},
    error::Result,
    http::{HttpClient, HttpMethod, HttpRequest},
};
use std::sync::Arc;
use tracing::{error, warn};

/// Sink that records reports through the tracing pipeline.
#[derive(Default)]
pub struct LogDiagnostics;

#[async_trait]
impl DiagnosticsSink for LogDiagnostics {
    async fn report(&self, report: ErrorReport) -> Result<()> {
        error!(
            context = %report.context,
            occurred_at = report.occurred_at,
            "{}",
            report.message
        );
        Ok(())
    }
}

/// Sink that delivers reports to a remote HTTP collector.
pub struct RemoteDiagnostics {
    http: Arc<dyn HttpClient>,
    endpoint: String,
}

impl RemoteDiagnostics {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DiagnosticsSink for RemoteDiagnostics {
    async fn report(&self, report: ErrorReport) -> Result<()> {
        let request = HttpRequest::new(HttpMethod::Post, &self.endpoint).json(&report)?;

        match self.http.execute(request).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                warn!(
                    status = response.status,
                    "Diagnostics collector rejected report"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to deliver diagnostics report");
                Ok(())
            }
        }
    }
}
